//! Idempotent schema setup, run once at startup.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::post;

/// Create the post table if it does not already exist.
pub async fn create_tables_if_not_exists(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(post::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;

    tracing::info!("Post table ready");
    Ok(())
}
