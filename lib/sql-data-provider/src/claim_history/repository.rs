use autometrics::autometrics;
use fra_core::model::claim_history::ClaimHistory;
use fra_core::repository::claim_history_repository::ClaimHistoryRepository;
use fra_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::ClaimId;

use super::ClaimHistoryProvider;
use crate::entity::claim_history;
use crate::mapper::to_data_layer_error;

/// Appends an entry on the given connection, usually the transaction of the claim change
pub(crate) async fn insert_claim_history(
    db: &impl ConnectionTrait,
    entry: ClaimHistory,
) -> Result<(), DataLayerError> {
    claim_history::Entity::insert(claim_history::ActiveModel::from(entry))
        .exec(db)
        .await
        .map_err(to_data_layer_error)?;

    Ok(())
}

#[autometrics]
#[async_trait::async_trait]
impl ClaimHistoryRepository for ClaimHistoryProvider {
    async fn get_claim_history_list(
        &self,
        claim_id: &ClaimId,
    ) -> Result<Vec<ClaimHistory>, DataLayerError> {
        let entries = claim_history::Entity::find()
            .filter(claim_history::Column::ClaimId.eq(claim_id))
            .order_by_asc(claim_history::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(entries))
    }
}
