use std::sync::Arc;

use fra_core::repository::DataRepository;
use fra_core::repository::claim_history_repository::ClaimHistoryRepository;
use fra_core::repository::claim_repository::ClaimRepository;
use fra_core::repository::user_repository::UserRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

use crate::claim::ClaimProvider;
use crate::claim_history::ClaimHistoryProvider;
use crate::user::UserProvider;

mod entity;
mod mapper;

pub mod claim;
pub mod claim_history;
pub mod user;

#[cfg(test)]
mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    #[cfg_attr(not(test), allow(unused))]
    pub(crate) db: DatabaseConnection,
    claim_repository: Arc<dyn ClaimRepository>,
    claim_history_repository: Arc<dyn ClaimHistoryRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let claim_repository = Arc::new(ClaimProvider { db: db.clone() });
        let claim_history_repository = Arc::new(ClaimHistoryProvider { db: db.clone() });
        let user_repository = Arc::new(UserProvider { db: db.clone() });

        Self {
            db,
            claim_repository,
            claim_history_repository,
            user_repository,
        }
    }
}

/// Connects to the database and brings the schema up to date
pub async fn db_conn(database_url: impl Into<String>) -> Result<DbConn, DbErr> {
    let database_url = database_url.into();
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);

    // every pooled connection to an in-memory sqlite database would see its own empty database
    if database_url.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = sea_orm::Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    tracing::debug!("Database connected and migrated");

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_claim_repository(&self) -> Arc<dyn ClaimRepository> {
        self.claim_repository.clone()
    }

    fn get_claim_history_repository(&self) -> Arc<dyn ClaimHistoryRepository> {
        self.claim_history_repository.clone()
    }

    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
