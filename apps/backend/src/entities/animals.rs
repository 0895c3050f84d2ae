use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::difficulty::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "scientific_name")]
    pub scientific_name: String,
    pub weight: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "image_path")]
    pub image_path: String,
    #[sea_orm(column_name = "type_id")]
    pub type_id: i64,
    pub difficulty: Difficulty,
    #[sea_orm(column_name = "conservation_status_id")]
    pub conservation_status_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::animal_types::Entity",
        from = "Column::TypeId",
        to = "super::animal_types::Column::Id"
    )]
    AnimalType,
    #[sea_orm(
        belongs_to = "super::conservation_statuses::Entity",
        from = "Column::ConservationStatusId",
        to = "super::conservation_statuses::Column::Id"
    )]
    ConservationStatus,
    #[sea_orm(has_many = "super::animal_habitats::Entity")]
    AnimalHabitats,
}

impl Related<super::animal_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnimalType.def()
    }
}

impl Related<super::conservation_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConservationStatus.def()
    }
}

impl Related<super::animal_habitats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnimalHabitats.def()
    }
}

impl Related<super::habitats::Entity> for Entity {
    fn to() -> RelationDef {
        super::animal_habitats::Relation::Habitat.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::animal_habitats::Relation::Animal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
