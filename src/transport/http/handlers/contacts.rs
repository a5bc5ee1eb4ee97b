use crate::domain::{Contact, NewContact};
use crate::transport::http::handlers::common::{error_response, json_400, path_400};
use crate::transport::http::types::{AppState, ErrorBody};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "All contacts", body = [Contact]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_contacts_handler(State(state): State<AppState>) -> Response {
    match state.contact_service.list().await {
        Ok(contacts) => (StatusCode::OK, Json(contacts)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(
        ("id" = i64, Path, description = "Contact id")
    ),
    responses(
        (status = 200, description = "Contact found", body = Contact),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn get_contact_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_400(e),
    };
    match state.contact_service.get_by_id(id).await {
        Ok(contact) => (StatusCode::OK, Json(contact)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/contacts",
    request_body = NewContact,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Invalid contact data", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn create_contact_handler(
    State(state): State<AppState>,
    request: Result<Json<NewContact>, JsonRejection>,
) -> Response {
    let Json(contact) = match request {
        Ok(v) => v,
        Err(e) => return json_400(e),
    };
    match state.contact_service.create(contact).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/contacts/{id}",
    params(
        ("id" = i64, Path, description = "Contact id; created if absent")
    ),
    request_body = NewContact,
    responses(
        (status = 200, description = "Contact created or replaced", body = Contact),
        (status = 400, description = "Invalid contact data or id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn upsert_contact_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<NewContact>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_400(e),
    };
    let Json(contact) = match request {
        Ok(v) => v,
        Err(e) => return json_400(e),
    };
    match state.contact_service.upsert(id, contact).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(
        ("id" = i64, Path, description = "Contact id")
    ),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_400(e),
    };
    match state.contact_service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
