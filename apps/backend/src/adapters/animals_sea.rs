//! SeaORM adapter for the animal catalogue - generic over ConnectionTrait.

use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::difficulty::Difficulty;
use crate::entities::{animal_types, animals, conservation_statuses, habitats};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// One random animal joined with its type row.
///
/// `RANDOM()` is understood by both Postgres and SQLite.
pub async fn pick_random<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    difficulty: Option<Difficulty>,
) -> Result<Option<(animals::Model, Option<animal_types::Model>)>, sea_orm::DbErr> {
    let mut query = animals::Entity::find().find_also_related(animal_types::Entity);
    if let Some(difficulty) = difficulty {
        query = query.filter(animals::Column::Difficulty.eq(difficulty));
    }

    query
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .limit(1)
        .one(conn)
        .await
}

pub async fn conservation_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    animal: &animals::Model,
) -> Result<Option<conservation_statuses::Model>, sea_orm::DbErr> {
    match animal.conservation_status_id {
        Some(id) => conservation_statuses::Entity::find_by_id(id).one(conn).await,
        None => Ok(None),
    }
}

/// Habitat names linked to the animal, unordered.
pub async fn habitat_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    animal: &animals::Model,
) -> Result<Vec<String>, sea_orm::DbErr> {
    let rows = animal.find_related(habitats::Entity).all(conn).await?;
    Ok(rows.into_iter().map(|h| h.name).collect())
}
