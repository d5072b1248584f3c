use shared_types::UserId;

use super::user::Role;

/// Authenticated caller of a service operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn can_view(&self, owner: &UserId) -> bool {
        self.role.can_view_all() || self.id == *owner
    }
}
