//! Codeflix Catalog
//!
//! Domain model for the video catalog:
//! - `Category` aggregate with create/update/activate/deactivate lifecycle
//! - Reusable field validation rules
//! - Configuration, logging and a small CLI front end

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{Category, CategoryId, CategoryStatus, ValidationError};
