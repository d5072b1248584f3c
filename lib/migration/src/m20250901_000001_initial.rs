use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub const UNIQUE_USER_EMAIL_INDEX: &str = "index-User-Email-Unique";
const CLAIM_USER_ID_INDEX: &str = "index-Claim-UserId";
const CLAIM_CREATED_DATE_INDEX: &str = "index-Claim-CreatedDate";
const CLAIM_STATE_INDEX: &str = "index-Claim-State";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(ColumnDef::new(User::Id).uuid_char().not_null().primary_key())
                    .col(ColumnDef::new(User::Email).string().not_null())
                    .col(ColumnDef::new(User::PasswordHash).string().not_null())
                    .col(ColumnDef::new(User::FullName).string().not_null())
                    .col(ColumnDef::new(User::Role).string_len(32).not_null())
                    .col(ColumnDef::new(User::Phone).string())
                    .col(ColumnDef::new(User::Address).string())
                    .col(
                        ColumnDef::new(User::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(User::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_USER_EMAIL_INDEX)
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Claim::Table)
                    .col(
                        ColumnDef::new(Claim::Id)
                            .uuid_char()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Claim::UserId).uuid_char().not_null())
                    .col(ColumnDef::new(Claim::Title).string().not_null())
                    .col(ColumnDef::new(Claim::Description).text().not_null())
                    .col(ColumnDef::new(Claim::Latitude).double())
                    .col(ColumnDef::new(Claim::Longitude).double())
                    .col(ColumnDef::new(Claim::Address).string())
                    .col(ColumnDef::new(Claim::State).string())
                    .col(ColumnDef::new(Claim::District).string())
                    .col(ColumnDef::new(Claim::Village).string())
                    .col(ColumnDef::new(Claim::AreaHectares).double())
                    .col(ColumnDef::new(Claim::ForestType).string())
                    .col(ColumnDef::new(Claim::CommunityDetails).text())
                    .col(ColumnDef::new(Claim::Status).string_len(32).not_null())
                    .col(ColumnDef::new(Claim::Documents).json().not_null())
                    .col(ColumnDef::new(Claim::AiAnalysis).text())
                    .col(ColumnDef::new(Claim::OfficerNotes).text())
                    .col(ColumnDef::new(Claim::ReviewedBy).uuid_char())
                    .col(
                        ColumnDef::new(Claim::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Claim::LastModified)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Claim-UserId")
                            .from_tbl(Claim::Table)
                            .from_col(Claim::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Claim-ReviewedBy")
                            .from_tbl(Claim::Table)
                            .from_col(Claim::ReviewedBy)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLAIM_USER_ID_INDEX)
                    .table(Claim::Table)
                    .col(Claim::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLAIM_CREATED_DATE_INDEX)
                    .table(Claim::Table)
                    .col(Claim::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CLAIM_STATE_INDEX)
                    .table(Claim::Table)
                    .col(Claim::State)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum User {
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Role,
    Phone,
    Address,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
pub(crate) enum Claim {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Latitude,
    Longitude,
    Address,
    State,
    District,
    Village,
    AreaHectares,
    ForestType,
    CommunityDetails,
    Status,
    Documents,
    AiAnalysis,
    OfficerNotes,
    ReviewedBy,
    CreatedDate,
    LastModified,
}
