//! Entity trait: records addressed by a stable identifier.

/// A record with an identity that survives every field change.
///
/// Stores key on [`Entity::id`], so it must not change over the record's life.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}
