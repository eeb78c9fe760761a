//! In-memory post repository - backs handler tests without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postit_core::domain::{NewPost, Post, PostChanges, PostQuery};
use postit_core::error::RepoError;
use postit_core::ports::PostRepository;

struct Inner {
    rows: Vec<Post>,
    next_id: i64,
}

/// In-memory `PostRepository` over a plain Vec with an async RwLock.
///
/// Mirrors the store's observable behavior: ids are assigned sequentially and
/// listings come back newest first. Data is lost on drop.
pub struct InMemoryPostRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, RepoError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Post> = inner
            .rows
            .iter()
            .filter(|p| query.category.as_ref().is_none_or(|c| &p.category == c))
            .cloned()
            .collect();

        // Newest first; ties broken by id to keep the ordering deterministic.
        rows.sort_by(|a, b| (b.created_on, b.id).cmp(&(a.created_on, a.id)));

        if let Some(window) = query.window {
            rows = rows
                .into_iter()
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .collect();
        }

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = Post {
            id,
            title: post.title,
            body: post.body,
            category: post.category,
            created_on: post.created_on,
        };
        inner.rows.push(stored.clone());

        Ok(stored)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), RepoError> {
        let mut inner = self.inner.write().await;
        if let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) {
            row.title = changes.title;
            row.body = changes.body;
            row.category = changes.category;
        }
        // No matching row is indistinguishable from a zero-row update.
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut inner = self.inner.write().await;
        inner.rows.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str, category: &str) -> NewPost {
        NewPost::new(title.to_owned(), "body".to_owned(), category.to_owned())
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(sample("First", "code")).await.unwrap();
        let second = repo.insert(sample("Second", "code")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample("Older", "code")).await.unwrap();
        repo.insert(sample("Newer", "code")).await.unwrap();

        let posts = repo.list(&PostQuery::default()).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Newer");
        assert_eq!(posts[1].title, "Older");
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample("A", "code")).await.unwrap();
        repo.insert(sample("B", "rant")).await.unwrap();
        repo.insert(sample("C", "code")).await.unwrap();

        let query = PostQuery::default().with_category("code");
        let posts = repo.list(&query).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.category == "code"));
    }

    #[tokio::test]
    async fn pagination_window_truncates_at_the_tail() {
        let repo = InMemoryPostRepository::new();
        for i in 0..5 {
            repo.insert(sample(&format!("Record #{i}"), "code"))
                .await
                .unwrap();
        }

        let page0 = repo
            .list(&PostQuery::default().with_page(0, 3))
            .await
            .unwrap();
        let page1 = repo
            .list(&PostQuery::default().with_page(1, 3))
            .await
            .unwrap();
        assert_eq!(page0.len(), 3);
        assert_eq!(page1.len(), 2);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_a_no_op() {
        let repo = InMemoryPostRepository::new();
        let changes = PostChanges {
            title: "t".to_owned(),
            body: "b".to_owned(),
            category: "c".to_owned(),
        };
        assert!(repo.update(99, changes).await.is_ok());
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(sample("Doomed", "code")).await.unwrap();
        repo.delete(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    }
}
