//! Database connection management and the PostgreSQL repository.

mod connections;
mod schema;

pub mod entity;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::PostgresPostRepository;
pub use schema::create_tables_if_not_exists;
