use fra_core::repository::DataRepository;
use sql_data_provider::{DataLayer, DbConn};

use self::claim_histories::ClaimHistoriesDB;
use self::claims::ClaimsDB;
use self::users::UsersDB;

pub mod claims;
pub mod users;

pub struct DbClient {
    pub claims: ClaimsDB,
    pub claim_histories: ClaimHistoriesDB,
    pub users: UsersDB,
}

impl DbClient {
    pub fn new(db: DbConn) -> Self {
        let layer = DataLayer::build(db);

        Self {
            claims: ClaimsDB::new(layer.get_claim_repository()),
            claim_histories: ClaimHistoriesDB::new(layer.get_claim_history_repository()),
            users: UsersDB::new(layer.get_user_repository()),
        }
    }
}
