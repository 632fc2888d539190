//! Category aggregate and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::command::{CreateCategory, UpdateCategory};
use crate::domain::error::ValidationError;
use crate::domain::seedwork::{AggregateRoot, Entity};
use crate::domain::validation;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

const NAME_FIELD: &str = "Name";
const DESCRIPTION_FIELD: &str = "Description";

/// Errors that can occur when parsing a category identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Category ID is not a valid UUID: {0}")]
    Malformed(String),

    #[error("Category ID cannot be nil")]
    Nil,
}

/// Category identifier - a random (v4) UUID, never nil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Uuid> for CategoryId {
    type Error = CategoryIdError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        if value.is_nil() {
            return Err(CategoryIdError::Nil);
        }

        Ok(Self(value))
    }
}

impl From<CategoryId> for Uuid {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl FromStr for CategoryId {
    type Err = CategoryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(|e| CategoryIdError::Malformed(e.to_string()))?;
        Self::try_from(uuid)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activation status of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    /// Category is visible in the catalog
    #[default]
    Active,
    /// Category is hidden from the catalog
    Inactive,
}

impl CategoryStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<bool> for CategoryStatus {
    fn from(is_active: bool) -> Self {
        if is_active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl std::fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Persisted shape of a category
///
/// Converting a record back into a [`Category`] re-runs the construction
/// rules, so a stored document can never yield an invalid aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_is_active() -> bool {
    true
}

/// Catalog category aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord", into = "CategoryRecord")]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    status: CategoryStatus,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_status(name, description, true)
    }

    /// Create a category with an explicit initial status
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        Self::create(
            CreateCategory::new(name, description).with_is_active(is_active),
        )
    }

    /// Create a category from a possibly incomplete command
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn create(command: CreateCategory) -> Result<Self, ValidationError> {
        let (name, description) = Self::validate(command.name, command.description)
            .inspect_err(|e| debug!(field = e.field(), "Category rejected: {}", e))?;

        let category = Self {
            id: CategoryId::new(),
            name,
            description,
            status: CategoryStatus::from(command.is_active.unwrap_or(true)),
            created_at: Utc::now(),
        };

        debug!(category_id = %category.id, status = %category.status, "Category created");
        Ok(category)
    }

    /// Rebuild a category from a stored record, keeping its identity and timestamp
    pub fn restore(record: CategoryRecord) -> Result<Self, ValidationError> {
        let (name, description) = Self::validate(record.name, record.description)?;

        Ok(Self {
            id: record.id,
            name,
            description,
            status: CategoryStatus::from(record.is_active),
            created_at: record.created_at,
        })
    }

    // Getters

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> CategoryStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators

    /// Rename the category, replacing the description only when one is given
    pub fn update(&mut self, name: &str, description: Option<&str>) -> Result<(), ValidationError> {
        self.apply(UpdateCategory {
            name: Some(name.to_owned()),
            description: description.map(str::to_owned),
        })
    }

    /// Apply an update command
    ///
    /// A `None` description leaves the current one untouched. Nothing is
    /// changed unless every supplied field passes.
    pub fn apply(&mut self, command: UpdateCategory) -> Result<(), ValidationError> {
        let result = Self::validate_name(command.name.as_deref()).and_then(|name| {
            if let Some(description) = command.description.as_deref() {
                Self::validate_description(description)?;
            }
            Ok(name.to_owned())
        });

        let name = result.inspect_err(|e| {
            debug!(category_id = %self.id, field = e.field(), "Category update rejected: {}", e)
        })?;

        self.name = name;
        if let Some(description) = command.description {
            self.description = description;
        }

        debug!(category_id = %self.id, "Category updated");
        Ok(())
    }

    /// Mark the category as active
    pub fn activate(&mut self) {
        self.status = CategoryStatus::Active;
        debug!(category_id = %self.id, "Category activated");
    }

    /// Mark the category as inactive
    pub fn deactivate(&mut self) {
        self.status = CategoryStatus::Inactive;
        debug!(category_id = %self.id, "Category deactivated");
    }

    fn validate(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<(String, String), ValidationError> {
        let name = Self::validate_name(name.as_deref())?.to_owned();
        let description = validation::not_null(description, DESCRIPTION_FIELD)?;
        Self::validate_description(&description)?;

        Ok((name, description))
    }

    fn validate_name(name: Option<&str>) -> Result<&str, ValidationError> {
        let name = validation::not_null_or_empty(name, NAME_FIELD)?;
        validation::min_length(name, NAME_MIN_LENGTH, NAME_FIELD)?;
        validation::max_length(name, NAME_MAX_LENGTH, NAME_FIELD)?;
        Ok(name)
    }

    fn validate_description(description: &str) -> Result<(), ValidationError> {
        validation::max_length(description, DESCRIPTION_MAX_LENGTH, DESCRIPTION_FIELD)
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = ValidationError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Self::restore(record)
    }
}

impl From<Category> for CategoryRecord {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: Some(category.name),
            description: Some(category.description),
            is_active: category.status.is_active(),
            created_at: category.created_at,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {}
