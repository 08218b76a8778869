//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier are the same logical entity, whatever
/// their other attributes hold. Implementors should derive `PartialEq`/`Hash`
/// from [`Entity::id`] alone.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, independent of any other attribute.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
