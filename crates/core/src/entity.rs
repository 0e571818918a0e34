//! Entity trait: records that carry an identity of their own.

/// Entity marker + minimal interface.
///
/// Two entities with equal ids are the same record even if other fields
/// differ; lookups compare ids only.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
