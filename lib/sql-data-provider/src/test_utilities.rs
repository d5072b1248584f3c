use fra_core::model::claim::{Claim, ClaimLocation, ClaimStatus};
use fra_core::model::claim_history::{ClaimHistory, ClaimHistoryAction};
use fra_core::model::user::{Role, User};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};
use shared_types::{ClaimHistoryId, ClaimId, UserId};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::entity::{claim, user};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    let db = db_conn("sqlite::memory:").await.unwrap();
    DataLayer::build(db)
}

pub fn dummy_user(role: Role) -> User {
    let id = UserId::new_v4();
    User {
        id,
        created_date: get_dummy_date(),
        last_modified: get_dummy_date(),
        email: format!("{id}@example.org"),
        password_hash: "hash".to_string(),
        full_name: "Test User".to_string(),
        role,
        phone: None,
        address: None,
    }
}

pub async fn insert_user(db: &DatabaseConnection, role: Role) -> Result<UserId, DbErr> {
    let user = user::ActiveModel::from(dummy_user(role)).insert(db).await?;
    Ok(user.id)
}

pub fn dummy_claim(user_id: UserId, created_date: OffsetDateTime) -> Claim {
    Claim {
        id: ClaimId::new_v4(),
        created_date,
        last_modified: created_date,
        title: "Forest Plot A".to_string(),
        description: "Community forest resource claim".to_string(),
        location: ClaimLocation {
            latitude: Some(21.15),
            longitude: Some(79.09),
            address: None,
            state: Some("Maharashtra".to_string()),
            district: Some("Gadchiroli".to_string()),
            village: Some("Mendha".to_string()),
        },
        area_hectares: Some(2.5),
        forest_type: Some("Dry deciduous".to_string()),
        community_details: None,
        status: ClaimStatus::Pending,
        documents: vec![],
        ai_analysis: None,
        user_id,
        officer_notes: None,
        reviewed_by: None,
    }
}

pub async fn insert_claim(
    db: &DatabaseConnection,
    user_id: UserId,
    created_date: OffsetDateTime,
) -> Result<ClaimId, DbErr> {
    let claim = claim::ActiveModel::from(dummy_claim(user_id, created_date))
        .insert(db)
        .await?;
    Ok(claim.id)
}

pub fn dummy_history(
    claim_id: ClaimId,
    actor_id: UserId,
    action: ClaimHistoryAction,
    status: ClaimStatus,
) -> ClaimHistory {
    ClaimHistory {
        id: ClaimHistoryId::new_v4(),
        created_date: get_dummy_date(),
        claim_id,
        actor_id,
        action,
        previous_status: None,
        status,
        notes: None,
    }
}
