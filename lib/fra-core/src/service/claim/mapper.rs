use shared_types::{ClaimHistoryId, ClaimId};
use time::OffsetDateTime;

use super::dto::CreateClaimRequestDTO;
use crate::model::actor::Actor;
use crate::model::claim::{Claim, ClaimStatus};
use crate::model::claim_history::{ClaimHistory, ClaimHistoryAction};
use crate::provider::insight::{InsightAttachment, InsightRequest};

pub(super) fn claim_from_create_request(
    request: CreateClaimRequestDTO,
    actor: &Actor,
    now: OffsetDateTime,
) -> Claim {
    Claim {
        id: ClaimId::new_v4(),
        created_date: now,
        last_modified: now,
        title: request.title,
        description: request.description,
        location: request.location,
        area_hectares: request.area_hectares,
        forest_type: request.forest_type,
        community_details: request.community_details,
        status: ClaimStatus::Pending,
        documents: vec![],
        ai_analysis: None,
        user_id: actor.id,
        officer_notes: None,
        reviewed_by: None,
    }
}

pub(super) fn history_entry(
    claim_id: ClaimId,
    actor: &Actor,
    action: ClaimHistoryAction,
    previous_status: Option<ClaimStatus>,
    status: ClaimStatus,
    notes: Option<String>,
    now: OffsetDateTime,
) -> ClaimHistory {
    ClaimHistory {
        id: ClaimHistoryId::new_v4(),
        created_date: now,
        claim_id,
        actor_id: actor.id,
        action,
        previous_status,
        status,
        notes,
    }
}

pub(super) fn document_mime_type(file_name: &str, content_type: Option<&str>) -> String {
    if let Some(content_type) = content_type.filter(|value| !value.trim().is_empty()) {
        return content_type.to_owned();
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
    .to_owned()
}

const DOCUMENT_ANALYSIS_INSTRUCTION: &str = "You are an assistant specialised in analysing \
Forest Rights Act claim documents. Extract key information and point out inconsistencies.";

pub(super) fn document_analysis_request(
    claim: &Claim,
    mime_type: String,
    content: Vec<u8>,
) -> InsightRequest {
    let place = claim
        .location
        .address
        .as_deref()
        .or(claim.location.village.as_deref())
        .unwrap_or("an unknown location");

    let prompt = format!(
        "Analyse this FRA claim document and extract:\n\
         1. Claimant details (name, address, community)\n\
         2. Land details (area, location, forest type)\n\
         3. Evidence of traditional occupation\n\
         4. Document authenticity indicators\n\
         5. Missing information or red flags\n\n\
         Context: the claim is \"{}\" in {place}.\n\
         Respond with a structured JSON object.",
        claim.title
    );

    InsightRequest {
        system_instruction: DOCUMENT_ANALYSIS_INSTRUCTION.to_owned(),
        prompt,
        attachment: Some(InsightAttachment { mime_type, content }),
    }
}
