//! Farm customer CRM service: REST CRUD over an embedded SQLite database.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ErrorBody};
pub use model::Customer;
pub use routes::{common_routes, customer_routes, router};
pub use state::AppState;
pub use store::init_store;
