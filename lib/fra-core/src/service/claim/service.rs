use std::str::FromStr;

use shared_types::ClaimId;
use time::OffsetDateTime;

use super::ClaimService;
use super::dto::{
    ClaimHistoryResponseDTO, CreateClaimRequestDTO, GetClaimResponseDTO,
    UpdateClaimStatusRequestDTO, UploadDocumentRequestDTO, UploadDocumentResponseDTO,
};
use super::mapper::{
    claim_from_create_request, document_analysis_request, document_mime_type, history_entry,
};
use super::validator::{validate_create_request, validate_upload_request};
use crate::model::actor::Actor;
use crate::model::claim::{
    AddClaimDocumentRequest, Claim, ClaimStatus, UpdateClaimStatusRequest,
};
use crate::model::claim_history::ClaimHistoryAction;
use crate::repository::error::DataLayerError;
use crate::service::common_mapper::visible_claims_filter;
use crate::service::error::{
    EntityNotFoundError, PermissionError, ServiceError, ValidationError,
};

impl ClaimService {
    /// Submits a new claim on behalf of the actor, always in `pending` status
    pub async fn create_claim(
        &self,
        actor: &Actor,
        request: CreateClaimRequestDTO,
    ) -> Result<GetClaimResponseDTO, ServiceError> {
        validate_create_request(&request)?;

        let claim = claim_from_create_request(request, actor, OffsetDateTime::now_utc());
        let created = history_entry(
            claim.id,
            actor,
            ClaimHistoryAction::Created,
            None,
            claim.status,
            None,
            claim.created_date,
        );
        self.claim_repository
            .create_claim(claim.to_owned(), created)
            .await?;

        tracing::info!(claim_id = %claim.id, user_id = %actor.id, "Claim submitted");

        Ok(claim.into())
    }

    /// Claims visible to the actor, newest first
    pub async fn get_claim_list(
        &self,
        actor: &Actor,
    ) -> Result<Vec<GetClaimResponseDTO>, ServiceError> {
        let claims = self
            .claim_repository
            .get_claim_list(visible_claims_filter(actor))
            .await?;

        Ok(claims.into_iter().map(Into::into).collect())
    }

    pub async fn get_claim(
        &self,
        actor: &Actor,
        id: &ClaimId,
    ) -> Result<GetClaimResponseDTO, ServiceError> {
        Ok(self.get_visible_claim(actor, id).await?.into())
    }

    /// Recorded events of a claim, oldest first
    pub async fn get_claim_history(
        &self,
        actor: &Actor,
        id: &ClaimId,
    ) -> Result<Vec<ClaimHistoryResponseDTO>, ServiceError> {
        self.get_visible_claim(actor, id).await?;

        let entries = self
            .claim_history_repository
            .get_claim_history_list(id)
            .await?;

        Ok(entries.into_iter().map(Into::into).collect())
    }

    /// Moves a claim to another status
    ///
    /// # Arguments
    ///
    /// * `actor` - must hold a role allowed to transition claims
    /// * `id` - claim to update
    /// * `request` - target status in wire form; `officer_notes` replaces any previous notes
    pub async fn update_claim_status(
        &self,
        actor: &Actor,
        id: &ClaimId,
        request: UpdateClaimStatusRequestDTO,
    ) -> Result<GetClaimResponseDTO, ServiceError> {
        if !actor.role.can_transition() {
            return Err(PermissionError::TransitionNotAllowed(actor.role).into());
        }

        let status = ClaimStatus::from_str(&request.status)
            .map_err(|_| ValidationError::InvalidClaimStatus(request.status.to_owned()))?;

        let claim = self
            .claim_repository
            .get_claim(id)
            .await?
            .ok_or(EntityNotFoundError::Claim(*id))?;

        let now = OffsetDateTime::now_utc();
        let status_changed = history_entry(
            *id,
            actor,
            ClaimHistoryAction::StatusChanged,
            Some(claim.status),
            status,
            request.officer_notes.to_owned(),
            now,
        );
        self.claim_repository
            .update_claim_status(
                UpdateClaimStatusRequest {
                    id: *id,
                    status,
                    officer_notes: request.officer_notes.to_owned(),
                    reviewed_by: actor.id,
                    last_modified: now,
                },
                status_changed,
            )
            .await
            .map_err(|error| match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Claim(*id).into(),
                error => ServiceError::from(error),
            })?;

        tracing::info!(
            claim_id = %id,
            reviewer = %actor.id,
            from = %claim.status,
            to = %status,
            "Claim status changed"
        );

        Ok(Claim {
            status,
            officer_notes: request.officer_notes,
            reviewed_by: Some(actor.id),
            last_modified: now,
            ..claim
        }
        .into())
    }

    /// Stores a supporting document and attaches it to the claim
    ///
    /// The document is also sent for analysis when an insight provider is configured;
    /// analysis failures leave the stored analysis untouched.
    pub async fn upload_document(
        &self,
        actor: &Actor,
        id: &ClaimId,
        request: UploadDocumentRequestDTO,
    ) -> Result<UploadDocumentResponseDTO, ServiceError> {
        let file_name = validate_upload_request(&request)?;
        let claim = self.get_visible_claim(actor, id).await?;

        let file_path = self
            .document_storage
            .store(&format!("{id}_{file_name}"), &request.content)
            .await?;

        let mime_type = document_mime_type(&file_name, request.content_type.as_deref());
        let ai_analysis = self
            .analyse_document(&claim, mime_type, request.content)
            .await;

        let now = OffsetDateTime::now_utc();
        let document_added = history_entry(
            *id,
            actor,
            ClaimHistoryAction::DocumentAdded,
            None,
            claim.status,
            Some(file_name),
            now,
        );
        let result = self
            .claim_repository
            .add_claim_document(
                AddClaimDocumentRequest {
                    id: *id,
                    document: file_path.to_owned(),
                    ai_analysis: ai_analysis.to_owned(),
                    last_modified: now,
                },
                document_added,
            )
            .await;

        if let Err(error) = result {
            // files the claim already references stay in place
            if !claim.documents.contains(&file_path) {
                self.discard_document(&file_path).await;
            }

            return Err(match error {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Claim(*id).into(),
                error => ServiceError::from(error),
            });
        }

        Ok(UploadDocumentResponseDTO {
            file_path,
            ai_analysis,
        })
    }

    async fn get_visible_claim(&self, actor: &Actor, id: &ClaimId) -> Result<Claim, ServiceError> {
        let claim = self
            .claim_repository
            .get_claim(id)
            .await?
            .ok_or(EntityNotFoundError::Claim(*id))?;

        if !actor.can_view(&claim.user_id) {
            return Err(PermissionError::ClaimNotVisible(*id).into());
        }

        Ok(claim)
    }

    async fn analyse_document(
        &self,
        claim: &Claim,
        mime_type: String,
        content: Vec<u8>,
    ) -> Option<String> {
        let provider = self.insight_provider.as_ref()?;

        match provider
            .generate(document_analysis_request(claim, mime_type, content))
            .await
        {
            Ok(analysis) => Some(analysis),
            Err(error) => {
                tracing::warn!(%error, claim_id = %claim.id, "Document analysis failed");
                None
            }
        }
    }

    async fn discard_document(&self, file_path: &str) {
        if let Err(error) = self.document_storage.remove(file_path).await {
            tracing::warn!(%error, file_path, "Failed to remove unattached document");
        }
    }
}
