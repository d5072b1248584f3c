use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;
use crate::m20250901_000001_initial::{Claim, User};

#[derive(DeriveMigrationName)]
pub struct Migration;

const CLAIM_HISTORY_CLAIM_ID_CREATED_DATE_INDEX: &str = "index-ClaimHistory-ClaimId-CreatedDate";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClaimHistory::Table)
                    .col(
                        ColumnDef::new(ClaimHistory::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClaimHistory::ClaimId).uuid_char().not_null())
                    .col(ColumnDef::new(ClaimHistory::ActorId).uuid_char().not_null())
                    .col(ColumnDef::new(ClaimHistory::Action).string_len(32).not_null())
                    .col(ColumnDef::new(ClaimHistory::PreviousStatus).string_len(32))
                    .col(ColumnDef::new(ClaimHistory::Status).string_len(32).not_null())
                    .col(ColumnDef::new(ClaimHistory::Notes).text())
                    .col(
                        ColumnDef::new(ClaimHistory::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ClaimHistory-ClaimId")
                            .from_tbl(ClaimHistory::Table)
                            .from_col(ClaimHistory::ClaimId)
                            .to_tbl(Claim::Table)
                            .to_col(Claim::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ClaimHistory-ActorId")
                            .from_tbl(ClaimHistory::Table)
                            .from_col(ClaimHistory::ActorId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLAIM_HISTORY_CLAIM_ID_CREATED_DATE_INDEX)
                    .table(ClaimHistory::Table)
                    .col(ClaimHistory::ClaimId)
                    .col(ClaimHistory::CreatedDate)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum ClaimHistory {
    Table,
    Id,
    ClaimId,
    ActorId,
    Action,
    PreviousStatus,
    Status,
    Notes,
    CreatedDate,
}
