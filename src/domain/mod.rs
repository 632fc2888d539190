//! Domain layer - Core business logic and entities

pub mod category;
pub mod error;
pub mod seedwork;
pub mod validation;

pub use category::{
    Category, CategoryId, CategoryIdError, CategoryRecord, CategoryStatus, CreateCategory,
    UpdateCategory,
};
pub use error::ValidationError;
pub use seedwork::{AggregateRoot, Entity};
