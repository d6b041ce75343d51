//! Records that the data collaborator stores and looks up by id.

/// A record addressed by a stable identifier (invoices, customers).
///
/// The in-memory store keys its maps by [`Entity::id`] and uses it to
/// replace an existing record on upsert.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
