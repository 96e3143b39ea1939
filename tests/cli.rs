use std::{
    env,
    path::PathBuf,
    process::{Command, Output},
};

use rstest::rstest;

/// Runs the binary from an empty directory with none of its variables inherited
fn send_mail(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let dir = env::temp_dir().join(format!("send_mail_cli_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_send_mail"));
    cmd.current_dir(&dir).args(args);
    for key in ["SMTP_SERVER", "SMTP_PORT", "EMAIL_ACCOUNT", "EMAIL_PASSWORD"] {
        cmd.env_remove(key);
    }
    // Unroutable so a test that got as far as connecting fails instead of sending
    cmd.env("SMTP_SERVER", "127.0.0.1").env("SMTP_PORT", "9");
    cmd.envs(vars.iter().copied());
    cmd.output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const BASE: [&str; 10] = [
    "-e", "a@x.com", "-p", "secret", "-r", "b@y.com", "-s", "Hi", "-b", "Hello",
];

#[test]
fn account_can_come_from_environment() {
    // Gets past argument parsing and fails on the bad port instead
    let output = send_mail(
        &["-r", "b@y.com", "-s", "Hi", "-b", "Hello"],
        &[
            ("EMAIL_ACCOUNT", "a@x.com"),
            ("EMAIL_PASSWORD", "secret"),
            ("SMTP_PORT", "not-a-port"),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("SMTP_PORT"), "{}", stderr(&output));
}

#[test]
fn invalid_port_is_config_error() {
    let output = send_mail(&BASE, &[("SMTP_PORT", "abc")]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Configuration error"),
        "{}",
        stderr(&output)
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_server_is_config_error() {
    let output = send_mail(&BASE, &[("SMTP_SERVER", "")]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("SMTP_SERVER"), "{}", stderr(&output));
}

#[test]
fn missing_attachment_is_file_error() {
    let missing = PathBuf::from("/definitely/not/here/report.pdf");
    let mut args = BASE.to_vec();
    args.extend(["-a", missing.to_str().unwrap()]);

    let output = send_mail(&args, &[]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Failed to read attachment"),
        "{}",
        stderr(&output)
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("sent successfully"));
}

/// `BASE` without `flag` and its value
fn without(flag: &str) -> Vec<&'static str> {
    let pos = BASE.iter().position(|a| *a == flag).unwrap();
    BASE.iter()
        .enumerate()
        .filter(|(i, _)| *i != pos && *i != pos + 1)
        .map(|(_, a)| *a)
        .collect()
}

#[rstest]
#[case("-e", "--email-account")]
#[case("-p", "--password")]
#[case("-r", "--recipient")]
#[case("-s", "--subject")]
#[case("-b", "--body")]
fn missing_flag_is_usage_error(#[case] flag: &str, #[case] long: &str) {
    let output = send_mail(&without(flag), &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains(long), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
}

#[rstest]
#[case("-e")]
#[case("-p")]
#[case("-r")]
#[case("-s")]
#[case("-b")]
fn empty_flag_value_is_usage_error(#[case] flag: &str) {
    let pos = BASE.iter().position(|a| *a == flag).unwrap();
    let mut args = BASE.to_vec();
    args[pos + 1] = "";

    let output = send_mail(&args, &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn refused_connection_is_delivery_error() {
    // Valid config and message, nothing listening on port 9
    let output = send_mail(&BASE, &[]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Failed to send email"),
        "{}",
        stderr(&output)
    );
    assert!(!String::from_utf8_lossy(&output.stdout).contains("sent successfully"));
}
