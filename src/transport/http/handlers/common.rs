use crate::domain::ContactError;
use crate::transport::http::types::ErrorBody;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

/// Status code for each error kind.
pub fn status_for(err: &ContactError) -> StatusCode {
    match err {
        ContactError::NotFound(_) => StatusCode::NOT_FOUND,
        ContactError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ContactError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a service error into the JSON error response. Unexpected causes are logged here
/// and replaced by a generic message.
pub fn error_response(err: ContactError) -> Response {
    let status = status_for(&err);
    let message = match &err {
        ContactError::NotFound(msg) => {
            warn!("Contact not found: {}", msg);
            msg.clone()
        }
        ContactError::InvalidInput(msg) => {
            warn!("Illegal argument: {}", msg);
            msg.clone()
        }
        ContactError::Unexpected(cause) => {
            error!("Unexpected error: {:?}", cause);
            UNEXPECTED_MESSAGE.to_string()
        }
    };
    (status, Json(ErrorBody::new(status.as_u16(), message))).into_response()
}

pub fn bad_request(message: String) -> Response {
    warn!("Bad request: {}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new(StatusCode::BAD_REQUEST.as_u16(), message)),
    )
        .into_response()
}

pub fn json_400(err: JsonRejection) -> Response {
    bad_request(format!("Invalid JSON body: {}", err.body_text()))
}

pub fn path_400(err: PathRejection) -> Response {
    bad_request(format!("Invalid contact id: {}", err.body_text()))
}
