use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table between animals and habitats.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal_habitats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "animal_id")]
    pub animal_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "habitat_id")]
    pub habitat_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::animals::Entity",
        from = "Column::AnimalId",
        to = "super::animals::Column::Id",
        on_delete = "Cascade"
    )]
    Animal,
    #[sea_orm(
        belongs_to = "super::habitats::Entity",
        from = "Column::HabitatId",
        to = "super::habitats::Column::Id",
        on_delete = "Cascade"
    )]
    Habitat,
}

impl Related<super::animals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl Related<super::habitats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Habitat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
