use std::{
    fs,
    path::{Path, PathBuf},
};

use lettre::{
    message::{
        header::{ContentTransferEncoding, ContentType},
        Attachment, Body, Mailbox, MultiPart, SinglePart,
    },
    Message,
};
use log::debug;

use crate::{
    error::{Result, SendError},
    utils::make_single_line,
};

/// Every attachment is sent as opaque bytes
const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// A single email as given on the command line, built once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,

    /// Files attached in the given order, read only when the MIME message is built
    pub attachments: Vec<PathBuf>,
}

impl EmailMessage {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        attachments: Vec<PathBuf>,
    ) -> Result<Self> {
        let result = Self {
            sender: sender.into(),
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            attachments,
        };
        for (name, value) in [
            ("sender", &result.sender),
            ("recipient", &result.recipient),
            ("subject", &result.subject),
            ("body", &result.body),
        ] {
            if value.trim().is_empty() {
                return Err(SendError::usage(format!("{name} must not be empty")));
            }
        }
        Ok(result)
    }

    /// Builds the `multipart/mixed` message: the body as text then one part per attachment
    ///
    /// Fails without building anything if any attachment can't be read.
    pub fn to_mime(&self) -> Result<Message> {
        let from: Mailbox = self.sender.trim().parse().map_err(|e| {
            SendError::usage(format!("invalid sender address {:?}: {e}", self.sender))
        })?;
        let to: Mailbox = self.recipient.trim().parse().map_err(|e| {
            SendError::usage(format!("invalid recipient address {:?}: {e}", self.recipient))
        })?;

        debug!(
            "Building message {:?} with body {:?}",
            self.subject,
            make_single_line(&self.body)
        );
        let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(self.body.clone()));
        for path in &self.attachments {
            multipart = multipart.singlepart(load_attachment(path)?);
        }

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .multipart(multipart)
            .map_err(|e| SendError::usage(format!("failed to build message: {e}")))
    }
}

/// Reads the file into a base64 encoded part named after the file's basename
fn load_attachment(path: &Path) -> Result<SinglePart> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| SendError::FileAccess {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })?;
    let content = fs::read(path).map_err(|source| SendError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Attaching {path:?} as {filename:?} ({} bytes)",
        content.len()
    );

    let body = Body::new_with_encoding(content, ContentTransferEncoding::Base64)
        .unwrap_or_else(Body::new);
    let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE).map_err(|e| {
        SendError::usage(format!(
            "invalid attachment content type {ATTACHMENT_CONTENT_TYPE:?}: {e}"
        ))
    })?;
    Ok(Attachment::new(filename).body(body, content_type))
}
