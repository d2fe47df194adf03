//! The customer route table.

use crate::handlers::customers::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/customers` collection and `/customers/:id` item routes.
pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list).post(create))
        .route(
            "/customers/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
