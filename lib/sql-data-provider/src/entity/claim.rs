use fra_core::model::claim as model;
use one_dto_mapper::{From, Into};
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::{ClaimId, UserId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "claim")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ClaimId,
    pub user_id: UserId,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub area_hectares: Option<f64>,
    pub forest_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub community_details: Option<String>,
    pub status: ClaimStatus,
    #[sea_orm(column_type = "Json")]
    pub documents: Documents,
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_analysis: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub officer_notes: Option<String>,
    pub reviewed_by: Option<UserId>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(has_many = "super::claim_history::Entity")]
    ClaimHistory,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::claim_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClaimHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Stored paths of uploaded documents, in upload order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Documents(pub Vec<String>);

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(model::ClaimStatus)]
#[into(model::ClaimStatus)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ClaimStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "under_review")]
    UnderReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}
