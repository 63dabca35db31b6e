use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608250001_create_makes::Migration),
            Box::new(migrations::m202608250002_create_models::Migration),
            Box::new(migrations::m202608250003_create_classifieds::Migration),
            Box::new(migrations::m202608250004_create_images::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::Migrator;
    use sea_orm_migration::prelude::*;

    #[tokio::test]
    async fn migrations_reapply_cleanly_on_the_same_database() {
        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory db");
        let schema_manager = SchemaManager::new(&db);

        // Second pass used to fail on the unique indexes, which the runner
        // then reported as success.
        for _ in 0..2 {
            for migration in <Migrator as MigratorTrait>::migrations() {
                migration
                    .up(&schema_manager)
                    .await
                    .unwrap_or_else(|e| panic!("{} failed to reapply: {e}", migration.name()));
            }
        }
    }
}
