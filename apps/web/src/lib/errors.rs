use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Handshake(String),
    Unauthenticated,
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Validation(String),
}

impl AppError {
    /// HTTP status of a failed request, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for every outcome of a fetcher call that did not succeed.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Timeout(_) | AppError::Http { .. } | AppError::Parse(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Handshake(message) => write!(formatter, "Sign-in failed: {message}"),
            AppError::Unauthenticated => write!(formatter, "You are not signed in."),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Validation(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn status_is_only_reported_for_http_failures() {
        let http = AppError::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(http.status(), Some(401));
        assert_eq!(AppError::Network("offline".to_string()).status(), None);
        assert_eq!(AppError::Unauthenticated.status(), None);
    }

    #[test]
    fn request_failures_exclude_caller_mistakes() {
        assert!(AppError::Timeout("slow".to_string()).is_request_failure());
        assert!(
            AppError::Http {
                status: 500,
                message: "boom".to_string()
            }
            .is_request_failure()
        );
        assert!(!AppError::Unauthenticated.is_request_failure());
        assert!(!AppError::Validation("missing".to_string()).is_request_failure());
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::Http {
            status: 404,
            message: "Appointment not found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): Appointment not found");
        assert_eq!(
            AppError::Validation("Please fill in all fields.".to_string()).to_string(),
            "Please fill in all fields."
        );
    }
}
