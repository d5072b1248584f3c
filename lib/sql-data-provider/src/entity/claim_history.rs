use fra_core::model::claim_history as model;
use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{ClaimHistoryId, ClaimId, UserId};
use time::OffsetDateTime;

use super::claim::ClaimStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "claim_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ClaimHistoryId,
    pub claim_id: ClaimId,
    pub actor_id: UserId,
    pub action: ClaimHistoryAction,
    pub previous_status: Option<ClaimStatus>,
    pub status: ClaimStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::claim::Entity",
        from = "Column::ClaimId",
        to = "super::claim::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Claim,
}

impl Related<super::claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(model::ClaimHistoryAction)]
#[into(model::ClaimHistoryAction)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ClaimHistoryAction {
    #[sea_orm(string_value = "CREATED")]
    Created,
    #[sea_orm(string_value = "STATUS_CHANGED")]
    StatusChanged,
    #[sea_orm(string_value = "DOCUMENT_ADDED")]
    DocumentAdded,
}
