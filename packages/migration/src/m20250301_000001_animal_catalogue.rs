use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum AnimalTypes {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum ConservationStatuses {
    Table,
    Id,
    Status,
}

#[derive(Iden)]
enum Habitats {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Animals {
    Table,
    Id,
    Name,
    ScientificName,
    Weight,
    Description,
    ImagePath,
    TypeId,
    Difficulty,
    ConservationStatusId,
}

#[derive(Iden)]
enum AnimalHabitats {
    Table,
    AnimalId,
    HabitatId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // animal_types
        manager
            .create_table(
                Table::create()
                    .table(AnimalTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnimalTypes::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(AnimalTypes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // conservation_statuses
        manager
            .create_table(
                Table::create()
                    .table(ConservationStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConservationStatuses::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(ConservationStatuses::Status)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // habitats
        manager
            .create_table(
                Table::create()
                    .table(Habitats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Habitats::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Habitats::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // animals
        manager
            .create_table(
                Table::create()
                    .table(Animals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Animals::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Animals::Name).string().not_null())
                    .col(ColumnDef::new(Animals::ScientificName).string().not_null())
                    .col(ColumnDef::new(Animals::Weight).string().not_null())
                    .col(ColumnDef::new(Animals::Description).text().not_null())
                    .col(ColumnDef::new(Animals::ImagePath).string().not_null())
                    .col(ColumnDef::new(Animals::TypeId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Animals::Difficulty)
                            .string_len(16)
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(Animals::ConservationStatusId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animals_type_id")
                            .from(Animals::Table, Animals::TypeId)
                            .to(AnimalTypes::Table, AnimalTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animals_conservation_status_id")
                            .from(Animals::Table, Animals::ConservationStatusId)
                            .to(ConservationStatuses::Table, ConservationStatuses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Random selection filters on difficulty
        manager
            .create_index(
                Index::create()
                    .name("ix_animals_difficulty")
                    .table(Animals::Table)
                    .col(Animals::Difficulty)
                    .to_owned(),
            )
            .await?;

        // animal_habitats
        manager
            .create_table(
                Table::create()
                    .table(AnimalHabitats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnimalHabitats::AnimalId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AnimalHabitats::HabitatId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AnimalHabitats::AnimalId)
                            .col(AnimalHabitats::HabitatId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animal_habitats_animal_id")
                            .from(AnimalHabitats::Table, AnimalHabitats::AnimalId)
                            .to(Animals::Table, Animals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animal_habitats_habitat_id")
                            .from(AnimalHabitats::Table, AnimalHabitats::HabitatId)
                            .to(Habitats::Table, Habitats::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_table(Table::drop().table(AnimalHabitats::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_animals_difficulty")
                    .table(Animals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Animals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Habitats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ConservationStatuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnimalTypes::Table).to_owned())
            .await?;

        Ok(())
    }
}
