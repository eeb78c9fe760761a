//! # Postit Infrastructure
//!
//! Concrete implementations of the ports defined in `postit-core`:
//! the PostgreSQL-backed post repository plus an in-memory variant used by
//! handler tests.

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, PostgresPostRepository, connect, create_tables_if_not_exists};
pub use memory::InMemoryPostRepository;
