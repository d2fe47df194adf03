//! Route assembly: the CRUD surface plus operational endpoints, wrapped in
//! request logging and the per-request panic boundary.

mod common;
mod customers;

pub use common::common_routes;
pub use customers::customer_routes;

use crate::error::ErrorBody;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, TraceLayer};
use tracing::Level;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .merge(common_routes(state.clone()))
            .merge(customer_routes(state)),
    )
}

/// Wrap a router in the shared middleware stack: an INFO-level trace of
/// every request (method + path) and a panic boundary that answers 500
/// instead of tearing the task down.
fn with_middleware(router: Router) -> Router {
    let stack = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::custom(panic_response));
    router.layer(stack)
}

/// Render a caught handler panic as a 500 with the usual error body. The
/// payload is logged, not echoed, so internals stay out of responses.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            message: "internal server error".into(),
        }),
    )
        .into_response()
}
