use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::ErrorBody;

/// Every failure the gateway reports. All of them reach the client as
/// `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Engine { status: u16, message: String },
    #[error("Comparison engine is unreachable: {0}")]
    Unreachable(String),
    #[error("Comparison engine timed out")]
    Timeout,
    #[error("Comparison engine returned an invalid response: {0}")]
    InvalidResponse(String),
    #[error("Invalid image name")]
    InvalidImageName,
    #[error("Image not found: {0}")]
    ImageNotFound(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_decode() {
            GatewayError::InvalidResponse(e.to_string())
        } else {
            GatewayError::Unreachable(e.to_string())
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::InvalidImageName => StatusCode::BAD_REQUEST,
            GatewayError::Engine { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::Unreachable(_) | GatewayError::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::ImageNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_status_is_preserved() {
        let err = GatewayError::Engine {
            status: 500,
            message: "Failed to download images".into(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to download images");
    }

    #[test]
    fn unusual_engine_status_becomes_bad_gateway() {
        let err = GatewayError::Engine {
            status: 42,
            message: "odd".into(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
