use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SendError>;

/// Every way sending an email can fail. None of these are retried.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read attachment {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send email: {summary}")]
    Delivery {
        summary: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SendError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
