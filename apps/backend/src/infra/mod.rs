//! Infrastructure layer - database bootstrap, state assembly, error translation.

pub mod db;
pub mod db_errors;
pub mod state;
