//! Error surface of the crate: the argument-contract violations raised by
//! record construction and attribute operations, and the owned failure
//! snapshot a record can carry.

use serde::Serialize;

/// Argument contract violation raised synchronously at the point of misuse.
///
/// Every variant is a programmer error, an input the caller was required
/// to supply or validate, rather than a runtime condition worth retrying.
/// Operations that fail with this error leave the record untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The message template was not supplied at construction.
    #[error("message template is required")]
    MissingTemplate,

    /// The attribute source sequence was not supplied at construction.
    /// An empty sequence is valid; a missing one is not.
    #[error("attribute source sequence is required")]
    MissingAttributes,

    /// An attribute name was empty or all whitespace.
    #[error("attribute name must not be empty or whitespace")]
    EmptyAttributeName,
}

/// Failure snapshot associated with an event at capture time.
///
/// Holds the rendered message of the original error plus the messages of
/// its `source()` chain, outermost cause first. Text is captured rather
/// than the live error object, so records stay cloneable and
/// serializable with the failure attached.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct CapturedError {
    message: String,
    chain: Vec<String>,
}

impl CapturedError {
    /// Capture a bare message with no underlying cause chain.
    pub fn new(message: impl Into<String>) -> Self {
        CapturedError {
            message: message.into(),
            chain: Vec::new(),
        }
    }

    /// Capture an error and every cause reachable through
    /// [`std::error::Error::source`].
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        CapturedError {
            message: err.to_string(),
            chain,
        }
    }

    /// Rendered message of the original error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the cause chain, outermost first. Empty when the error
    /// had no `source()`.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    #[error("connection reset by peer")]
    struct ConnectionReset;

    #[derive(thiserror::Error, Debug)]
    #[error("flush to replica failed")]
    struct FlushFailed(#[source] ConnectionReset);

    #[test]
    fn from_error_walks_the_source_chain() {
        let captured = CapturedError::from_error(&FlushFailed(ConnectionReset));
        assert_eq!(captured.message(), "flush to replica failed");
        assert_eq!(captured.chain(), ["connection reset by peer"]);
    }

    #[test]
    fn bare_message_has_empty_chain() {
        let captured = CapturedError::new("disk full");
        assert_eq!(captured.message(), "disk full");
        assert!(captured.chain().is_empty());
    }

    #[test]
    fn displays_as_its_message() {
        let captured = CapturedError::from_error(&FlushFailed(ConnectionReset));
        assert_eq!(captured.to_string(), "flush to replica failed");
    }

    #[test]
    fn invalid_argument_messages_name_the_violation() {
        assert_eq!(
            InvalidArgument::MissingTemplate.to_string(),
            "message template is required"
        );
        assert_eq!(
            InvalidArgument::EmptyAttributeName.to_string(),
            "attribute name must not be empty or whitespace"
        );
    }

    #[test]
    fn captured_error_serializes_message_and_chain() {
        let captured = CapturedError::from_error(&FlushFailed(ConnectionReset));
        let json = serde_json::to_value(&captured).unwrap();
        assert_eq!(json["message"], "flush to replica failed");
        assert_eq!(json["chain"][0], "connection reset by peer");
    }
}
