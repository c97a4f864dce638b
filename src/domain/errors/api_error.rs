//! Record service error types.

use thiserror::Error;

/// Failure of a single request against the record service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request to record service failed: {message}")]
    Transport { message: String },

    /// A response arrived but its body could not be interpreted.
    #[error("malformed response from record service: {message}")]
    Malformed { message: String },

    /// The service answered with a non-success status.
    #[error("record service rejected request ({status}): {detail}")]
    Rejected { status: u16, detail: String },
}

impl ApiError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates rejection error carrying the service's detail text.
    #[must_use]
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Returns the service's detail text for rejections.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => Some(detail),
            Self::Transport { .. } | Self::Malformed { .. } => None,
        }
    }

    /// Returns whether no interpretable response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Malformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(ApiError::transport("refused").is_transport());
        assert!(ApiError::malformed("not json").is_transport());
        assert!(!ApiError::rejected(400, "nope").is_transport());
    }

    #[test]
    fn test_detail_only_for_rejections() {
        assert_eq!(ApiError::rejected(404, "Employee not found").detail(), Some("Employee not found"));
        assert_eq!(ApiError::transport("refused").detail(), None);
    }
}
