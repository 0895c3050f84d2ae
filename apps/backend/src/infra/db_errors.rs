//! SeaORM -> DomainError translation helpers.
//!
//! Adapters hand `sea_orm::DbErr` to the repos layer, which converts it here.
//! Driver text only reaches the logs, and only through `Redacted`.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn looks_like_decode_failure(msg: &str) -> bool {
    let msg = msg.to_ascii_lowercase();
    msg.contains("error occurred while decoding") || msg.contains("columndecode")
}

fn looks_like_pool_failure(msg: &str) -> bool {
    let msg = msg.to_ascii_lowercase();
    msg.contains("pool timed out")
        || msg.contains("connection refused")
        || msg.contains("pool closed")
        || msg.contains("unable to open database file")
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } | sea_orm::DbErr::Json(_) => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Undecodable row");
            return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is corrupt");
        }
        _ => {}
    }

    if looks_like_decode_failure(&error_msg) {
        error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Undecodable row");
        return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is corrupt");
    }

    if looks_like_pool_failure(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
