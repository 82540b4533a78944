use thiserror::Error;

use crate::remote::{ApiEnvelope, ApiError};
use crate::repository::RepositoryError;

pub mod cart;
pub mod catalog;
pub mod orders;

/// Errors surfaced by the sync and cart services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied an invalid payload.
    #[error("{0}")]
    Validation(String),
    /// The backend answered, but with a failure envelope or empty payload.
    #[error("remote returned status {status}: {message}")]
    Remote { status: u16, message: String },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Short message suitable for direct display, classified by HTTP status
    /// where one is available.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Api(ApiError::Http { status: 401 }) => {
                "Unauthorized - please sign in again".to_string()
            }
            ServiceError::Api(ApiError::Http { status: 500 }) => {
                "Server error - please try again".to_string()
            }
            ServiceError::Api(ApiError::Http { .. }) => {
                "Failed to fetch data from the server".to_string()
            }
            ServiceError::Api(ApiError::Transport(_)) => {
                "Network error - please check your connection".to_string()
            }
            ServiceError::Remote { message, .. } => message.clone(),
            ServiceError::Validation(message) => message.clone(),
            ServiceError::Repository(_) => "Local data error - please retry".to_string(),
        }
    }
}

/// Unwrap a backend envelope, treating anything but status 200 with data as
/// a failure.
pub(crate) fn expect_payload<T>(envelope: ApiEnvelope<T>, what: &str) -> ServiceResult<T> {
    if envelope.status != 200 {
        return Err(ServiceError::Remote {
            status: envelope.status,
            message: envelope
                .message
                .or(envelope.error)
                .unwrap_or_else(|| format!("failed to fetch {what}")),
        });
    }
    envelope.data.ok_or_else(|| ServiceError::Remote {
        status: envelope.status,
        message: format!("empty {what} payload"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope<T>(status: u16, data: Option<T>) -> ApiEnvelope<T> {
        ApiEnvelope {
            status,
            message: None,
            data,
            error: None,
            timestamp: None,
        }
    }

    #[test]
    fn payload_extracted_on_success() {
        let value = expect_payload(envelope(200, Some(vec![1, 2])), "numbers").unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn failure_status_is_rejected_even_with_data() {
        let err = expect_payload(envelope(500, Some(vec![1])), "numbers").unwrap_err();
        assert!(matches!(err, ServiceError::Remote { status: 500, .. }));
    }

    #[test]
    fn missing_payload_is_rejected() {
        let err = expect_payload(envelope::<Vec<i32>>(200, None), "numbers").unwrap_err();
        assert!(matches!(err, ServiceError::Remote { status: 200, .. }));
    }

    #[test]
    fn auth_errors_map_to_sign_in_message() {
        let err = ServiceError::Api(ApiError::Http { status: 401 });
        assert_eq!(err.user_message(), "Unauthorized - please sign in again");
    }
}
