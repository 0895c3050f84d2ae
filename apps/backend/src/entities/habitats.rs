use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "habitats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::animal_habitats::Entity")]
    AnimalHabitats,
}

impl Related<super::animal_habitats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnimalHabitats.def()
    }
}

impl Related<super::animals::Entity> for Entity {
    fn to() -> RelationDef {
        super::animal_habitats::Relation::Animal.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::animal_habitats::Relation::Habitat.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
