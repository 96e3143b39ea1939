use std::borrow::Cow;

pub fn make_single_line(s: &str) -> Cow<'_, str> {
    if s.contains('\n') {
        Cow::Owned(s.replace("\r\n", "↵").replace('\n', "↵"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Subject tagged with the machine that sent it, eg. `Alert@backup-01: Disk full`
pub fn alert_subject(subject: &str) -> String {
    let hostname = gethostname::gethostname();
    format!("Alert@{}: {subject}", hostname.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_linefeed() {
        let s = "Hello\nWorld!\r\nBye";
        assert!(s.contains('\n'));
        let actual = make_single_line(s);
        assert!(!actual.contains('\n'));
        assert!(!actual.contains('\r'));
    }

    #[test]
    fn single_line_is_borrowed() {
        assert!(matches!(make_single_line("Hello"), Cow::Borrowed("Hello")));
    }

    #[test]
    fn alert_subject_keeps_original() {
        let actual = alert_subject("Disk full");
        assert!(actual.starts_with("Alert@"));
        assert!(actual.ends_with(": Disk full"));
    }
}
