use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::macros::impls_for_uuid_newtype;

/// Identifier of a submitted forest-rights claim.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct ClaimId(Uuid);

impls_for_uuid_newtype!(ClaimId);

#[cfg(feature = "sea-orm")]
crate::macros::impls_for_seaorm_newtype!(ClaimId);
