//! Mapping of domain errors onto HTTP responses.
//!
//! Every failure leaves the server as the standard envelope
//! `{success: false, message}`. The status code is chosen from the error's
//! [`ErrorKind`] alone.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use sr_core::errors::{DomainError, ErrorKind};
use sr_shared::types::ApiResponse;
use validator::{Validate, ValidationErrors};

/// Result type returned by request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned from a handler or middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure raised by a domain service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request rejected before it reached a service
    #[error("{0}")]
    BadRequest(String),

    /// No route matched
    #[error("{0}")]
    RouteNotFound(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Message shown to the client
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Domain(error) => error.public_message(),
            other => other.to_string(),
        }
    }
}

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error.kind()),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        HttpResponse::build(status).json(ApiResponse::error(self.public_message()))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(first_validation_message(&errors))
    }
}

/// First failing rule, taken in field-name order so the message is stable
fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                (field.to_string(), message)
            })
        })
        .collect();
    fields.sort();

    fields
        .into_iter()
        .next()
        .map(|(_, message)| message)
        .unwrap_or_else(|| String::from("Invalid request data"))
}

/// Run the request's `validator` rules
pub fn validate_request<T: Validate>(request: &T) -> ApiResult<()> {
    request.validate().map_err(ApiError::from)
}

/// `JsonConfig` error handler: malformed bodies get the 400 envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid request body: {}", error)).into()
}

/// `QueryConfig` error handler
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid query parameters: {}", error)).into()
}

/// `PathConfig` error handler, e.g. an id that is not a UUID
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %error, "Rejected path parameter");
    ApiError::bad_request("Valid ID is required").into()
}

/// Default service for unknown routes
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::RouteNotFound(format!(
        "Route {} {} not found",
        req.method(),
        req.path()
    )))
}
