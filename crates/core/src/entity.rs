//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Unlike value objects, two entities are "the same" when their identities are
/// equal, even if other attributes (a stock count, a tag set) differ.
pub trait Entity {
    /// Strongly-typed identity.
    type Identity: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identity.
    fn identity(&self) -> Self::Identity;

    /// Returns true if both entities share the same identity.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
