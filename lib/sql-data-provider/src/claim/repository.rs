use autometrics::autometrics;
use fra_core::model::claim::{
    AddClaimDocumentRequest, Claim, ClaimListFilter, UpdateClaimStatusRequest,
};
use fra_core::model::claim_history::ClaimHistory;
use fra_core::repository::claim_repository::ClaimRepository;
use fra_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    Unchanged,
};
use shared_types::ClaimId;

use super::ClaimProvider;
use crate::claim_history::repository::insert_claim_history;
use crate::entity::claim;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl ClaimRepository for ClaimProvider {
    async fn create_claim(
        &self,
        request: Claim,
        history: ClaimHistory,
    ) -> Result<ClaimId, DataLayerError> {
        let txn = self.db.begin().await.map_err(to_data_layer_error)?;

        let claim = claim::Entity::insert(claim::ActiveModel::from(request))
            .exec(&txn)
            .await
            .map_err(to_data_layer_error)?;
        insert_claim_history(&txn, history).await?;

        txn.commit().await.map_err(to_data_layer_error)?;

        Ok(claim.last_insert_id)
    }

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, DataLayerError> {
        let claim = claim::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(claim))
    }

    async fn get_claim_list(
        &self,
        filter: ClaimListFilter,
    ) -> Result<Vec<Claim>, DataLayerError> {
        let mut query = claim::Entity::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(claim::Column::UserId.eq(user_id));
        }

        let claims = query
            .order_by_desc(claim::Column::CreatedDate)
            .order_by_desc(claim::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(claims))
    }

    async fn update_claim_status(
        &self,
        request: UpdateClaimStatusRequest,
        history: ClaimHistory,
    ) -> Result<(), DataLayerError> {
        let txn = self.db.begin().await.map_err(to_data_layer_error)?;

        claim::Entity::update(claim::ActiveModel::from(request))
            .exec(&txn)
            .await
            .map_err(to_update_data_layer_error)?;
        insert_claim_history(&txn, history).await?;

        txn.commit().await.map_err(to_data_layer_error)?;

        Ok(())
    }

    async fn add_claim_document(
        &self,
        request: AddClaimDocumentRequest,
        history: ClaimHistory,
    ) -> Result<(), DataLayerError> {
        let txn = self.db.begin().await.map_err(to_data_layer_error)?;

        let claim = claim::Entity::find_by_id(request.id)
            .one(&txn)
            .await
            .map_err(to_data_layer_error)?
            .ok_or(DataLayerError::RecordNotUpdated)?;

        let mut documents = claim.documents;
        if !documents.0.contains(&request.document) {
            documents.0.push(request.document);
        }

        claim::ActiveModel {
            id: Unchanged(request.id),
            documents: Set(documents),
            ai_analysis: match request.ai_analysis {
                Some(analysis) => Set(Some(analysis)),
                None => Unchanged(claim.ai_analysis),
            },
            last_modified: Set(request.last_modified),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(to_update_data_layer_error)?;
        insert_claim_history(&txn, history).await?;

        txn.commit().await.map_err(to_data_layer_error)?;

        Ok(())
    }
}
