use actix_web::{
    http::{
        header::{self, ContentType, HeaderValue},
        StatusCode,
    },
    HttpResponse, ResponseError,
};
use thiserror::Error;

/// Every way a save request can end without writing the document.
///
/// The `Display` text of each variant is sent verbatim as the response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Server is not configured for saving")]
    NotConfigured,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Error reading request body")]
    ReadBody,

    #[error("Request body too large")]
    BodyTooLarge,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Error writing config file")]
    WriteFile,
}

impl ResponseError for SaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            SaveError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SaveError::InvalidToken => StatusCode::UNAUTHORIZED,
            SaveError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            SaveError::InvalidJson => StatusCode::BAD_REQUEST,
            SaveError::NotConfigured | SaveError::ReadBody | SaveError::WriteFile => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .insert_header((
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .body(self.to_string())
    }
}

/// Startup failures while resolving [`Settings`](crate::Settings).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid SAVE_PORT value {0:?}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use actix_web::body;

    use super::*;

    #[test]
    fn statuses_follow_error_class() {
        assert_eq!(SaveError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(SaveError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(SaveError::InvalidJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(SaveError::BodyTooLarge.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        for err in [SaveError::NotConfigured, SaveError::ReadBody, SaveError::WriteFile] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[actix_web::test]
    async fn response_is_plain_text_reason() {
        let res = SaveError::InvalidToken.error_response();

        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(res.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");

        let body = body::to_bytes(res.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Invalid token");
    }
}
