//! Input commands for creating and updating categories
//!
//! Fields are optional so that missing or `null` input reaches the
//! validation rules instead of failing at the type level.

use serde::Deserialize;

/// Request to create a category
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Defaults to active when absent
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active: None,
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Request to update a category
///
/// A `None` description (absent or `null`) keeps the current one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
