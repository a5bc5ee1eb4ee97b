use crate::domain::{Contact, NewContact};
use crate::transport::http::handlers::{contacts, health};
use crate::transport::http::types::{AppState, ErrorBody, HealthResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        contacts::list_contacts_handler,
        contacts::get_contact_handler,
        contacts::create_contact_handler,
        contacts::upsert_contact_handler,
        contacts::delete_contact_handler
    ),
    components(schemas(Contact, NewContact, ErrorBody, HealthResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/contacts",
            get(contacts::list_contacts_handler).post(contacts::create_contact_handler),
        )
        .route(
            "/contacts/:id",
            get(contacts::get_contact_handler)
                .put(contacts::upsert_contact_handler)
                .delete(contacts::delete_contact_handler),
        )
        .with_state(app_state)
}
