#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod sessions;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use config::app::Config;
pub use config::db::{db_url, DbOwner, DbProfile};
pub use error::AppError;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use sessions::{MemoryRoundStore, RedisRoundStore, RoundStateStore, SessionId};
pub use state::app_state::AppState;
pub use state::session_config::SessionConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
