use sea_orm_migration::{prelude::*, schema::*};

static IDX_SEED_DESIGNATION_STAGE: &str = "idx-seed_designation-arena_id-stage_id";
static IDX_SEED_DESIGNATION_PARTICIPANT: &str =
    "idx-seed_designation-arena_id-stage_id-participant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeedDesignation::Table)
                    .if_not_exists()
                    .col(pk_auto(SeedDesignation::Id))
                    .col(string(SeedDesignation::ArenaId))
                    .col(string(SeedDesignation::StageId))
                    .col(string(SeedDesignation::ParticipantId))
                    .col(string(SeedDesignation::ParticipantName))
                    .col(string_len_null(SeedDesignation::ParticipantLevel, 16))
                    .col(string_len_null(SeedDesignation::ParticipantGender, 16))
                    .col(integer(SeedDesignation::RankOrder))
                    .col(boolean(SeedDesignation::Active))
                    .col(string_null(SeedDesignation::DeactivationReason))
                    .col(timestamp(SeedDesignation::CreatedAt))
                    .col(timestamp(SeedDesignation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEED_DESIGNATION_STAGE)
                    .table(SeedDesignation::Table)
                    .col(SeedDesignation::ArenaId)
                    .col(SeedDesignation::StageId)
                    .to_owned(),
            )
            .await?;

        // Not unique: deactivated designations are kept alongside a newer active one
        manager
            .create_index(
                Index::create()
                    .name(IDX_SEED_DESIGNATION_PARTICIPANT)
                    .table(SeedDesignation::Table)
                    .col(SeedDesignation::ArenaId)
                    .col(SeedDesignation::StageId)
                    .col(SeedDesignation::ParticipantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEED_DESIGNATION_PARTICIPANT)
                    .table(SeedDesignation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEED_DESIGNATION_STAGE)
                    .table(SeedDesignation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeedDesignation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SeedDesignation {
    Table,
    Id,
    ArenaId,
    StageId,
    ParticipantId,
    ParticipantName,
    ParticipantLevel,
    ParticipantGender,
    RankOrder,
    Active,
    DeactivationReason,
    CreatedAt,
    UpdatedAt,
}
