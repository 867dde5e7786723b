use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Test environment owning one in-memory SQLite catalog.
///
/// Every `TestContext` gets its own database, so tests never see each other's rows.
pub struct TestContext {
    /// Connection to the in-memory database, `None` until `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or opens the in-memory database.
    ///
    /// The pool is pinned to a single connection: each SQLite `:memory:` connection is a
    /// separate database, so a second pooled connection would not see the schema.
    /// Foreign keys are switched on so restrict and cascade rules behave as they do
    /// against a migrated database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The open connection
    /// - `Err(TestError::Database)` - Opening the database failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => {
                let mut options = ConnectOptions::new(IN_MEMORY_URL);
                options
                    .min_connections(1)
                    .max_connections(1)
                    .sqlx_logging(false);

                let db = Database::connect(options).await?;
                db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
                db
            }
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; statements must be ordered so referenced tables
    /// come first.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
