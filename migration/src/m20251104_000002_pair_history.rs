use sea_orm_migration::{prelude::*, schema::*};

static IDX_PAIR_HISTORY_STAGE_KEY: &str = "idx-pair_history-arena_id-stage_id-pair_key";
static IDX_PAIR_HISTORY_ARENA_KEY: &str = "idx-pair_history-arena_id-pair_key";
static IDX_PAIR_HISTORY_PARTICIPANT_1: &str = "idx-pair_history-arena_id-participant_1_id";
static IDX_PAIR_HISTORY_PARTICIPANT_2: &str = "idx-pair_history-arena_id-participant_2_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PairHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(PairHistory::Id))
                    .col(string(PairHistory::ArenaId))
                    .col(string(PairHistory::StageId))
                    .col(string(PairHistory::StageName))
                    .col(string(PairHistory::Participant1Id))
                    .col(string(PairHistory::Participant1Name))
                    .col(string(PairHistory::Participant2Id))
                    .col(string(PairHistory::Participant2Name))
                    .col(string(PairHistory::PairKey))
                    .col(boolean(PairHistory::BothSeeds))
                    .col(timestamp(PairHistory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A pair is recorded at most once per stage
        manager
            .create_index(
                Index::create()
                    .name(IDX_PAIR_HISTORY_STAGE_KEY)
                    .table(PairHistory::Table)
                    .col(PairHistory::ArenaId)
                    .col(PairHistory::StageId)
                    .col(PairHistory::PairKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAIR_HISTORY_ARENA_KEY)
                    .table(PairHistory::Table)
                    .col(PairHistory::ArenaId)
                    .col(PairHistory::PairKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAIR_HISTORY_PARTICIPANT_1)
                    .table(PairHistory::Table)
                    .col(PairHistory::ArenaId)
                    .col(PairHistory::Participant1Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAIR_HISTORY_PARTICIPANT_2)
                    .table(PairHistory::Table)
                    .col(PairHistory::ArenaId)
                    .col(PairHistory::Participant2Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [
            IDX_PAIR_HISTORY_PARTICIPANT_2,
            IDX_PAIR_HISTORY_PARTICIPANT_1,
            IDX_PAIR_HISTORY_ARENA_KEY,
            IDX_PAIR_HISTORY_STAGE_KEY,
        ] {
            manager
                .drop_index(Index::drop().name(index).table(PairHistory::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(PairHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PairHistory {
    Table,
    Id,
    ArenaId,
    StageId,
    StageName,
    #[sea_orm(iden = "participant_1_id")]
    Participant1Id,
    #[sea_orm(iden = "participant_1_name")]
    Participant1Name,
    #[sea_orm(iden = "participant_2_id")]
    Participant2Id,
    #[sea_orm(iden = "participant_2_name")]
    Participant2Name,
    PairKey,
    BothSeeds,
    CreatedAt,
}
