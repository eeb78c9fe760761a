//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use postit_core::domain::{NewPost, Post, PostChanges, PostQuery};
use postit_core::error::RepoError;
use postit_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository backed by the shared connection pool.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, RepoError> {
        // Filter, ordering, and pagination are composed structurally; the
        // category and both window integers travel as bound parameters.
        let mut select = PostEntity::find().order_by_desc(post::Column::CreatedOn);
        if let Some(category) = &query.category {
            select = select.filter(post::Column::Category.eq(category));
        }
        if let Some(window) = query.window {
            select = select.limit(window.limit).offset(window.offset);
        }

        let rows = select.all(&self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                map_db_err(e)
            }
        })?;

        Ok(model.into())
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), RepoError> {
        // Only the three mutable columns; id and created_on are never part of
        // the statement.
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(changes.title))
            .col_expr(post::Column::Body, Expr::value(changes.body))
            .col_expr(post::Column::Category, Expr::value(changes.category))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(id, rows = result.rows_affected, "updated post");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // Zero affected rows is still a successful delete.
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(id, rows = result.rows_affected, "deleted post");
        Ok(())
    }
}
