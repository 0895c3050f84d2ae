use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, NotFoundKind};

/// Difficulty tier of an animal; stored as a lower-case string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "hard")]
    Hard,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Interpret the optional `difficulty` request parameter.
    ///
    /// Absent or blank means "no filter". Known tiers match
    /// case-insensitively. An unknown tier can never match a record, so it
    /// fails the same way as an empty subset.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Difficulty>, DomainError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        match raw.to_ascii_lowercase().as_str() {
            "easy" => Ok(Some(Difficulty::Easy)),
            "medium" => Ok(Some(Difficulty::Medium)),
            "hard" => Ok(Some(Difficulty::Hard)),
            _ => Err(DomainError::not_found(
                NotFoundKind::Animal,
                format!("No animals found for difficulty '{raw}'"),
            )),
        }
    }
}
