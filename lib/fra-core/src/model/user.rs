use serde::{Deserialize, Serialize};
use shared_types::UserId;
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: UserId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Role {
    #[serde(rename = "Community User")]
    #[strum(serialize = "Community User")]
    CommunityUser,
    #[serde(rename = "NGO")]
    #[strum(serialize = "NGO")]
    Ngo,
    #[serde(rename = "District Officer")]
    #[strum(serialize = "District Officer")]
    DistrictOfficer,
    #[serde(rename = "Ministry")]
    #[strum(serialize = "Ministry")]
    Ministry,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoleCapabilities {
    /// May move a claim to another status
    pub can_transition: bool,
    /// Sees claims of all users, not only own submissions
    pub can_view_all: bool,
}

impl Role {
    pub const fn capabilities(&self) -> RoleCapabilities {
        match self {
            Role::CommunityUser => RoleCapabilities {
                can_transition: false,
                can_view_all: false,
            },
            Role::Ngo => RoleCapabilities {
                can_transition: false,
                can_view_all: true,
            },
            Role::DistrictOfficer | Role::Ministry => RoleCapabilities {
                can_transition: true,
                can_view_all: true,
            },
        }
    }

    pub const fn can_transition(&self) -> bool {
        self.capabilities().can_transition
    }

    pub const fn can_view_all(&self) -> bool {
        self.capabilities().can_view_all
    }
}
