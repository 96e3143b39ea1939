mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mailer;
pub mod message;
mod utils;

use log::info;

pub use cli::{Cli, LogLevel};
pub use config::SmtpConfig;
pub use error::SendError;
pub use mailer::Mailer;
pub use message::EmailMessage;

/// Sends the one email described by `cli`
///
/// Configuration and the message are validated before any connection is made.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SmtpConfig::from_env(&cli.email_account, &cli.password)?;

    let subject = if cli.alert {
        utils::alert_subject(&cli.subject)
    } else {
        cli.subject
    };
    let message = EmailMessage::new(
        config.account.as_str(),
        cli.recipient,
        subject,
        cli.body,
        cli.attachments,
    )?;

    let mailer = Mailer::smtp(&config)?;
    mailer.send(&message)?;
    info!("Delivered to {}:{}", config.server, config.port);
    println!("Email sent successfully.");
    Ok(())
}
