use std::path::PathBuf;

use clap::{builder::NonEmptyStringValueParser, Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Clone, Eq, PartialEq, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Send an email with optional attachments through an SMTP server using STARTTLS."
)]
pub struct Cli {
    /// Account to send from, also used to log in to the SMTP server
    #[arg(
        short = 'e',
        long,
        env = "EMAIL_ACCOUNT",
        value_name = "ADDRESS",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub email_account: String,

    /// Password or app-specific password for the account
    #[arg(
        short,
        long,
        env = "EMAIL_PASSWORD",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub password: String,

    /// Address the email is delivered to
    #[arg(short, long, value_name = "ADDRESS", value_parser = NonEmptyStringValueParser::new())]
    pub recipient: String,

    /// Subject line of the email
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub subject: String,

    /// Plain text body of the email
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub body: String,

    /// Files to attach
    ///
    /// If any of them cannot be read nothing is sent
    #[arg(short, long, value_name = "PATH", num_args = 1..)]
    pub attachments: Vec<PathBuf>,

    /// Prefix the subject with `Alert@<hostname>: `
    #[arg(long)]
    pub alert: bool,

    /// Set logging level to use
    #[arg(long, short, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Also write logs to this file (rolled over by size)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Exists to provide better help messages variants copied from LevelFilter as
/// that's the type that is actually needed
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum LogLevel {
    /// Nothing emitted in this mode
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
