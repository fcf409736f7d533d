use thiserror::Error;

/// Uniform request failure carrying a human-readable message.
///
/// The taxonomy is deliberately flat: transport errors, non-2xx statuses,
/// and malformed response bodies all collapse into this one kind. Callers
/// display the message; nothing in this layer retries or recovers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Keep the transport error's own message when it has one, otherwise
    /// fall back to the operation's generic message.
    pub(crate) fn from_transport(err: reqwest::Error, fallback: &str) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::new(fallback)
        } else {
            Self::new(message)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let err = ApiError::new("Error fetching guides");
        assert_eq!(err.to_string(), "Error fetching guides");
        assert_eq!(err.message(), "Error fetching guides");
    }
}
