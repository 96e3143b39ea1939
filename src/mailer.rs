use lettre::{
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    SmtpTransport, Transport,
};
use log::{debug, info};

use crate::{
    config::SmtpConfig,
    error::{Result, SendError},
    message::EmailMessage,
};

/// Sends messages through any lettre transport, one attempt each
pub struct Mailer<T> {
    transport: T,
}

impl Mailer<SmtpTransport> {
    /// Sets up STARTTLS submission to the configured relay. Nothing connects until a send.
    pub fn smtp(config: &SmtpConfig) -> Result<Self> {
        info!(
            "Using SMTP relay {}:{} as {}",
            config.server, config.port, config.account
        );
        let transport = SmtpTransport::starttls_relay(&config.server)
            .map_err(delivery_error)?
            .port(config.port)
            .credentials(Credentials::new(
                config.account.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self::new(transport))
    }
}

impl<T> Mailer<T>
where
    T: Transport,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the MIME message and hands it to the transport
    ///
    /// Attachments are read before the transport is touched so a bad path
    /// never opens a connection.
    pub fn send(&self, message: &EmailMessage) -> Result<()> {
        let mime = message.to_mime()?;
        debug!(
            "Sending {:?} to {} with {} attachment(s)",
            message.subject,
            message.recipient,
            message.attachments.len()
        );
        self.transport.send(&mime).map_err(delivery_error)?;
        info!("Email sent to {}", message.recipient);
        Ok(())
    }
}

fn delivery_error<E>(err: E) -> SendError
where
    E: std::error::Error + Send + Sync + 'static,
{
    SendError::Delivery {
        summary: describe(&err),
        source: Box::new(err),
    }
}

fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<SmtpError>() {
        Some(e) if is_auth_rejection(e) => {
            "authentication rejected, check the account name and password".to_string()
        }
        Some(e) if e.is_permanent() => "the server rejected the request".to_string(),
        Some(e) if e.is_transient() => "the server temporarily refused the request".to_string(),
        Some(_) => "could not complete the SMTP session".to_string(),
        None => "the transport reported an error".to_string(),
    }
}

/// 535: authentication credentials invalid
fn is_auth_rejection(err: &SmtpError) -> bool {
    err.status().is_some_and(|code| code.to_string() == "535")
}
