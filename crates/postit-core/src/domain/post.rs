use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a single note with a free-text category tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub created_on: DateTime<Utc>,
}

/// A post awaiting insertion. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub category: String,
    pub created_on: DateTime<Utc>,
}

impl NewPost {
    /// Build a new post, stamping the creation time.
    pub fn new(title: String, body: String, category: String) -> Self {
        Self {
            title,
            body,
            category,
            created_on: Utc::now(),
        }
    }

    /// Every persisted post must carry a non-empty title, body, and category.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if self.body.is_empty() {
            return Err(DomainError::Validation("body must not be empty".into()));
        }
        if self.category.is_empty() {
            return Err(DomainError::Validation(
                "category must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// The mutable fields of a post. `id` and `created_on` never change after
/// creation and are not part of an update.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub body: String,
    pub category: String,
}
