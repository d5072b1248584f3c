use crate::model::actor::Actor;
use crate::model::claim::ClaimListFilter;

/// Restricts claim listings to what the actor is allowed to see
pub(crate) fn visible_claims_filter(actor: &Actor) -> ClaimListFilter {
    ClaimListFilter {
        user_id: (!actor.role.can_view_all()).then_some(actor.id),
    }
}
