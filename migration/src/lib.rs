pub use sea_orm_migration::prelude::*;

mod m20251104_000001_seed_designation;
mod m20251104_000002_pair_history;
mod m20251104_000003_stage_pair;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251104_000001_seed_designation::Migration),
            Box::new(m20251104_000002_pair_history::Migration),
            Box::new(m20251104_000003_stage_pair::Migration),
        ]
    }
}
