//! Animal catalogue repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::animals_sea as animals_adapter;
use crate::domain::animal::{normalize_habitats, AnimalRecord};
use crate::domain::difficulty::Difficulty;
use crate::entities::animals;
use crate::errors::domain::{DomainError, InfraErrorKind};

fn into_record(
    animal: animals::Model,
    type_name: String,
    conservation_status: Option<String>,
    habitats: Vec<String>,
) -> AnimalRecord {
    AnimalRecord {
        id: animal.id,
        name: animal.name,
        scientific_name: animal.scientific_name,
        weight: animal.weight,
        description: animal.description,
        image_path: animal.image_path,
        type_name,
        difficulty: animal.difficulty,
        conservation_status,
        habitats: normalize_habitats(habitats),
    }
}

/// Pick one random animal, optionally restricted to a difficulty tier.
///
/// Returns `Ok(None)` when no animal matches the filter.
pub async fn pick_random<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    difficulty: Option<Difficulty>,
) -> Result<Option<AnimalRecord>, DomainError> {
    let Some((animal, animal_type)) = animals_adapter::pick_random(conn, difficulty).await? else {
        return Ok(None);
    };

    // type_id is a restricted FK, so a missing row means the catalogue is broken.
    let animal_type = animal_type.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Animal {} references a missing type", animal.id),
        )
    })?;

    let status = animals_adapter::conservation_status(conn, &animal).await?;
    let habitats = animals_adapter::habitat_names(conn, &animal).await?;

    Ok(Some(into_record(
        animal,
        animal_type.name,
        status.map(|s| s.status),
        habitats,
    )))
}
