//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post. Unknown fields (a client-supplied id or
/// timestamp) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub category: String,
}

/// Request to update the mutable fields of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub body: String,
    pub category: String,
}

/// A post as seen on the wire. `created_on` serializes as RFC 3339; callers
/// must not assume sub-second precision survives a store round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub created_on: DateTime<Utc>,
}
