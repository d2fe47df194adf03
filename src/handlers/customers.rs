//! Customer CRUD handlers: list, read, create, update, delete.
//!
//! Each handler translates exactly one route into one store call and maps
//! the outcome onto a status code. Errors never propagate past here; they
//! become responses via [`AppError`]'s `IntoResponse`.

use crate::error::AppError;
use crate::model::Customer;
use crate::state::AppState;
use crate::store;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// Parse the id path segment. Extracting it as a string and parsing here
/// keeps the failure on the consistent JSON error body instead of the
/// framework's plain-text rejection.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|e| AppError::BadRequest(format!("invalid customer id '{}': {}", raw, e)))
}

/// Unwrap a JSON body, turning a malformed payload into a client error.
fn require_body(body: Result<Json<Customer>, JsonRejection>) -> Result<Customer, AppError> {
    let Json(customer) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(customer)
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = store::list_customers(&state.pool).await?;
    Ok(Json(customers))
}

pub async fn read(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let id = parse_id(&raw_id)?;
    let customer = store::customer_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(customer))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let mut customer = require_body(body)?;
    let id = store::insert_customer(&state.pool, &customer).await?;
    customer.id = Some(id);
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replaces every field of the addressed customer. A missing id still
/// answers 200 with the submitted fields echoed back; nothing is created.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<Json<Customer>, AppError> {
    let id = parse_id(&raw_id)?;
    let mut customer = require_body(body)?;
    store::update_customer(&state.pool, id, &customer).await?;
    customer.id = Some(id);
    Ok(Json(customer))
}

/// Deleting is idempotent: a missing id answers 204 like a present one.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id)?;
    store::delete_customer(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
