use fra_core::model::claim_history::ClaimHistory;
use one_dto_mapper::convert_inner;
use sea_orm::Set;

use crate::entity::claim_history;

impl From<ClaimHistory> for claim_history::ActiveModel {
    fn from(value: ClaimHistory) -> Self {
        Self {
            id: Set(value.id),
            claim_id: Set(value.claim_id),
            actor_id: Set(value.actor_id),
            action: Set(value.action.into()),
            previous_status: Set(convert_inner(value.previous_status)),
            status: Set(value.status.into()),
            notes: Set(value.notes),
            created_date: Set(value.created_date),
        }
    }
}

impl From<claim_history::Model> for ClaimHistory {
    fn from(value: claim_history::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            claim_id: value.claim_id,
            actor_id: value.actor_id,
            action: value.action.into(),
            previous_status: convert_inner(value.previous_status),
            status: value.status.into(),
            notes: value.notes,
        }
    }
}
