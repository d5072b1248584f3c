use fra_core::model::claim::{Claim, ClaimLocation, UpdateClaimStatusRequest};
use sea_orm::{Set, Unchanged};

use crate::entity::claim;

impl From<Claim> for claim::ActiveModel {
    fn from(value: Claim) -> Self {
        let location = value.location;

        Self {
            id: Set(value.id),
            user_id: Set(value.user_id),
            title: Set(value.title),
            description: Set(value.description),
            latitude: Set(location.latitude),
            longitude: Set(location.longitude),
            address: Set(location.address),
            state: Set(location.state),
            district: Set(location.district),
            village: Set(location.village),
            area_hectares: Set(value.area_hectares),
            forest_type: Set(value.forest_type),
            community_details: Set(value.community_details),
            status: Set(value.status.into()),
            documents: Set(claim::Documents(value.documents)),
            ai_analysis: Set(value.ai_analysis),
            officer_notes: Set(value.officer_notes),
            reviewed_by: Set(value.reviewed_by),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        }
    }
}

impl From<claim::Model> for Claim {
    fn from(value: claim::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            title: value.title,
            description: value.description,
            location: ClaimLocation {
                latitude: value.latitude,
                longitude: value.longitude,
                address: value.address,
                state: value.state,
                district: value.district,
                village: value.village,
            },
            area_hectares: value.area_hectares,
            forest_type: value.forest_type,
            community_details: value.community_details,
            status: value.status.into(),
            documents: value.documents.0,
            ai_analysis: value.ai_analysis,
            user_id: value.user_id,
            officer_notes: value.officer_notes,
            reviewed_by: value.reviewed_by,
        }
    }
}

impl From<UpdateClaimStatusRequest> for claim::ActiveModel {
    fn from(value: UpdateClaimStatusRequest) -> Self {
        Self {
            id: Unchanged(value.id),
            status: Set(value.status.into()),
            officer_notes: Set(value.officer_notes),
            reviewed_by: Set(Some(value.reviewed_by)),
            last_modified: Set(value.last_modified),
            ..Default::default()
        }
    }
}
