use std::{env, path::PathBuf};

use log::debug;

use crate::error::{Result, SendError};

pub const DEFAULT_SMTP_SERVER: &str = "smtp-mail.outlook.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    /// Hostname of the SMTP relay
    pub server: String,

    /// Port the relay accepts STARTTLS submissions on
    pub port: u16,

    /// Login name, also used as the sender address
    pub account: String,

    pub password: String,
}

impl SmtpConfig {
    /// Reads `SMTP_SERVER` and `SMTP_PORT` from the process environment
    pub fn from_env(account: &str, password: &str) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), account, password)
    }

    /// Builds the config from `lookup`, which returns the value of a variable if it is set
    ///
    /// Unset server and port fall back to the defaults, set but unusable values are errors
    pub fn from_lookup<F>(lookup: F, account: &str, password: &str) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = match lookup("SMTP_SERVER") {
            Some(val) if val.trim().is_empty() => {
                return Err(SendError::config("SMTP_SERVER is set but empty"))
            }
            Some(val) => val.trim().to_string(),
            None => DEFAULT_SMTP_SERVER.to_string(),
        };

        let port = match lookup("SMTP_PORT") {
            Some(val) => parse_port(&val)?,
            None => DEFAULT_SMTP_PORT,
        };

        if account.trim().is_empty() {
            return Err(SendError::config("email account is empty"));
        }
        if password.is_empty() {
            return Err(SendError::config("email password is empty"));
        }

        let result = Self {
            server,
            port,
            account: account.trim().to_string(),
            password: password.to_string(),
        };
        debug!("Loaded SMTP config: {result:?}");
        Ok(result)
    }
}

// Keeps the password out of logs
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("account", &self.account)
            .field("password", &"***")
            .finish()
    }
}

fn parse_port(value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(0) => Err(SendError::config("SMTP_PORT must not be 0")),
        Ok(port) => Ok(port),
        Err(e) => Err(SendError::config(format!(
            "SMTP_PORT {value:?} is not a valid port: {e}"
        ))),
    }
}

/// Loads the nearest `.env` file into the process environment
///
/// Variables that are already set are left alone. Returns the path of the file
/// that was loaded, or `None` if there wasn't one.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(SendError::config(format!("Failed to load .env file: {e}"))),
    }
}
