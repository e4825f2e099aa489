//! Custom error types for kancli.

use thiserror::Error;

/// Errors that can occur during inventory and lifecycle operations.
#[derive(Error, Debug)]
pub enum KancliError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Instance ID not found: {0}")]
    InstanceNotFound(String),

    #[error("Operation cancelled by user")]
    UserCancelled,
}

impl KancliError {
    /// Create an AWS SDK error from any displayable error.
    pub fn aws<E: std::fmt::Display>(err: E) -> Self {
        KancliError::AwsSdk(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_instance_not_found() {
        let err = KancliError::InstanceNotFound("i-0abc123".to_string());
        assert_eq!(err.to_string(), "Instance ID not found: i-0abc123");
    }

    #[test]
    fn test_error_display_user_cancelled() {
        let err = KancliError::UserCancelled;
        assert_eq!(err.to_string(), "Operation cancelled by user");
    }

    #[test]
    fn test_error_aws_helper() {
        let err = KancliError::aws("connection refused");
        assert_eq!(err.to_string(), "AWS SDK error: connection refused");
    }
}
