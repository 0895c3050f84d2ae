//! Catalogue seeding helpers.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};
use zooriddle::domain::Difficulty;
use zooriddle::entities::{animal_habitats, animal_types, animals, conservation_statuses, habitats};

/// Builder for one catalogue animal. Type, status and habitat rows are
/// created on demand and reused by name.
pub struct AnimalSeed {
    name: String,
    scientific_name: String,
    weight: String,
    type_name: String,
    difficulty: Difficulty,
    conservation_status: Option<String>,
    habitats: Vec<String>,
}

pub fn animal(name: &str) -> AnimalSeed {
    AnimalSeed {
        name: name.to_string(),
        scientific_name: format!("{} scientificus", name.to_lowercase()),
        weight: "100 kg".to_string(),
        type_name: "Mammal".to_string(),
        difficulty: Difficulty::Medium,
        conservation_status: None,
        habitats: Vec::new(),
    }
}

impl AnimalSeed {
    pub fn scientific_name(mut self, value: &str) -> Self {
        self.scientific_name = value.to_string();
        self
    }

    pub fn weight(mut self, value: &str) -> Self {
        self.weight = value.to_string();
        self
    }

    pub fn type_name(mut self, value: &str) -> Self {
        self.type_name = value.to_string();
        self
    }

    pub fn difficulty(mut self, value: Difficulty) -> Self {
        self.difficulty = value;
        self
    }

    pub fn status(mut self, value: &str) -> Self {
        self.conservation_status = Some(value.to_string());
        self
    }

    /// One join row per distinct name.
    pub fn habitats(mut self, names: &[&str]) -> Self {
        let mut habitats: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        habitats.sort();
        habitats.dedup();
        self.habitats = habitats;
        self
    }

    pub async fn insert<C: ConnectionTrait>(self, conn: &C) -> Result<animals::Model, sea_orm::DbErr> {
        let type_id = ensure_type(conn, &self.type_name).await?;
        let status_id = match &self.conservation_status {
            Some(status) => Some(
                conservation_statuses::ActiveModel {
                    id: NotSet,
                    status: Set(status.clone()),
                }
                .insert(conn)
                .await?
                .id,
            ),
            None => None,
        };

        let animal = animals::ActiveModel {
            id: NotSet,
            name: Set(self.name.clone()),
            scientific_name: Set(self.scientific_name.clone()),
            weight: Set(self.weight.clone()),
            description: Set(format!("All about the {}", self.name)),
            image_path: Set(format!("images/{}.jpg", self.name.to_lowercase().replace(' ', "_"))),
            type_id: Set(type_id),
            difficulty: Set(self.difficulty),
            conservation_status_id: Set(status_id),
        }
        .insert(conn)
        .await?;

        for habitat in &self.habitats {
            let habitat_id = ensure_habitat(conn, habitat).await?;
            animal_habitats::ActiveModel {
                animal_id: Set(animal.id),
                habitat_id: Set(habitat_id),
            }
            .insert(conn)
            .await?;
        }

        Ok(animal)
    }
}

async fn ensure_type<C: ConnectionTrait>(conn: &C, name: &str) -> Result<i64, sea_orm::DbErr> {
    if let Some(existing) = animal_types::Entity::find()
        .filter(animal_types::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(existing.id);
    }
    let row = animal_types::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(conn)
    .await?;
    Ok(row.id)
}

async fn ensure_habitat<C: ConnectionTrait>(conn: &C, name: &str) -> Result<i64, sea_orm::DbErr> {
    if let Some(existing) = habitats::Entity::find()
        .filter(habitats::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(existing.id);
    }
    let row = habitats::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(conn)
    .await?;
    Ok(row.id)
}

/// A small mixed catalogue: one animal per difficulty tier.
pub async fn seed_mixed_catalogue<C: ConnectionTrait>(conn: &C) -> Result<Vec<animals::Model>, sea_orm::DbErr> {
    Ok(vec![
        animal("Lion")
            .scientific_name("Panthera leo")
            .weight("190 kg")
            .difficulty(Difficulty::Easy)
            .status("Vulnerable")
            .habitats(&["Savanna", "Grassland"])
            .insert(conn)
            .await?,
        animal("African Elephant")
            .scientific_name("Loxodonta africana")
            .weight("6000 kg")
            .difficulty(Difficulty::Medium)
            .status("Endangered")
            .habitats(&["Savanna", "Forest"])
            .insert(conn)
            .await?,
        animal("Axolotl")
            .scientific_name("Ambystoma mexicanum")
            .weight("0.2 kg")
            .type_name("Amphibian")
            .difficulty(Difficulty::Hard)
            .habitats(&["Lake"])
            .insert(conn)
            .await?,
    ])
}
