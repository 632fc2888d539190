//! Category domain module
//!
//! Categories group catalog titles. A category is always valid: construction,
//! update and rehydration all run the same field rules.

mod command;
mod entity;
#[cfg(test)]
pub(crate) mod fixture;

pub use command::{CreateCategory, UpdateCategory};
pub use entity::{
    Category, CategoryId, CategoryIdError, CategoryRecord, CategoryStatus,
    DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
