//! Entity trait: records that keep their identity while their attributes change.

/// Anything addressed by a stable identifier (products, catalogue entries).
///
/// Two entities with the same id are the same record, even when every other
/// field differs (e.g. a product before and after a stock update).
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when both values refer to the same record.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
