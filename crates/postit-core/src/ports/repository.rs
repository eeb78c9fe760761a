use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostQuery};
use crate::error::RepoError;

/// Post repository - the store-facing port for the single entity.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts matching the query, newest first.
    async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Insert a new post and return the stored representation, including the
    /// assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite the mutable fields of the post with the given id.
    ///
    /// An id with no matching row is not an error; the statement affects zero
    /// rows and the call still succeeds.
    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), RepoError>;

    /// Delete the post with the given id. Deleting an id with no matching row
    /// succeeds, same as `update`.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
