//! Runtime configuration from environment variables.

use crate::error::AppError;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "farm_customers.db";

/// Collected once at startup, before anything else runs.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP listener binds to. `FARMGATE_ADDR`.
    pub bind_addr: SocketAddr,
    /// Path of the SQLite file. Recreated on every launch. `FARMGATE_DB`.
    pub database_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    /// A malformed bind address is a startup error.
    pub fn from_env() -> Result<Self, AppError> {
        let addr = std::env::var("FARMGATE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
        let bind_addr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("invalid FARMGATE_ADDR '{}': {}", addr, e)))?;
        let database_path = std::env::var("FARMGATE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        Ok(Config {
            bind_addr,
            database_path,
        })
    }
}
