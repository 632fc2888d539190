//! Building blocks shared by domain aggregates

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An object defined by a stable identity rather than by its attributes
pub trait Entity {
    /// The identifier type for this entity
    type Id: Clone + Debug + Display + Eq + Hash;

    /// Returns the entity's identity
    fn id(&self) -> &Self::Id;
}

/// Marker for entities that form a consistency boundary
pub trait AggregateRoot: Entity {}
