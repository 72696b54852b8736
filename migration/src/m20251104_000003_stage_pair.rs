use sea_orm_migration::{prelude::*, schema::*};

static IDX_STAGE_PAIR_STAGE: &str = "idx-stage_pair-arena_id-stage_id";
static IDX_STAGE_PAIR_GROUP: &str = "idx-stage_pair-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StagePair::Table)
                    .if_not_exists()
                    .col(pk_auto(StagePair::Id))
                    .col(string(StagePair::ArenaId))
                    .col(string(StagePair::StageId))
                    .col(string(StagePair::Participant1Id))
                    .col(string(StagePair::Participant1Name))
                    .col(string_len_null(StagePair::Participant1Level, 16))
                    .col(string_len_null(StagePair::Participant1Gender, 16))
                    .col(string(StagePair::Participant2Id))
                    .col(string(StagePair::Participant2Name))
                    .col(string_len_null(StagePair::Participant2Level, 16))
                    .col(string_len_null(StagePair::Participant2Gender, 16))
                    .col(boolean(StagePair::Classified))
                    .col(string_null(StagePair::GroupId))
                    .col(timestamp(StagePair::CreatedAt))
                    .col(timestamp(StagePair::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STAGE_PAIR_STAGE)
                    .table(StagePair::Table)
                    .col(StagePair::ArenaId)
                    .col(StagePair::StageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STAGE_PAIR_GROUP)
                    .table(StagePair::Table)
                    .col(StagePair::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STAGE_PAIR_GROUP)
                    .table(StagePair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STAGE_PAIR_STAGE)
                    .table(StagePair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StagePair::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StagePair {
    Table,
    Id,
    ArenaId,
    StageId,
    #[sea_orm(iden = "participant_1_id")]
    Participant1Id,
    #[sea_orm(iden = "participant_1_name")]
    Participant1Name,
    #[sea_orm(iden = "participant_1_level")]
    Participant1Level,
    #[sea_orm(iden = "participant_1_gender")]
    Participant1Gender,
    #[sea_orm(iden = "participant_2_id")]
    Participant2Id,
    #[sea_orm(iden = "participant_2_name")]
    Participant2Name,
    #[sea_orm(iden = "participant_2_level")]
    Participant2Level,
    #[sea_orm(iden = "participant_2_gender")]
    Participant2Gender,
    Classified,
    GroupId,
    CreatedAt,
    UpdatedAt,
}
