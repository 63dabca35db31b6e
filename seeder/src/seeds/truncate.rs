use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};

use crate::seed::Seeder;

/// Destructive reset of every seeded table, child tables first so foreign
/// keys never dangle. Also restarts the autoincrement counters, matching a
/// `TRUNCATE ... RESTART IDENTITY CASCADE`.
pub struct TruncateSeeder;

const TABLES: [&str; 4] = ["images", "classifieds", "models", "makes"];

#[async_trait]
impl Seeder for TruncateSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for table in TABLES {
            db.execute_unprepared(&format!("DELETE FROM {table}")).await?;
        }

        // sqlite_sequence only exists after the first AUTOINCREMENT insert.
        let has_sequence_table = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
            ))
            .await?
            .is_some();

        if has_sequence_table {
            let names = TABLES.map(|t| format!("'{t}'")).join(", ");
            db.execute_unprepared(&format!(
                "DELETE FROM sqlite_sequence WHERE name IN ({names})"
            ))
            .await?;
        }

        Ok(())
    }
}
