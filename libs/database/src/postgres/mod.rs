//! PostgreSQL database connector and utilities
//!
//! Provides connection pool management and startup schema creation.

mod config;
mod connector;
mod schema;

pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config, connect_with_options};
pub use schema::create_table_if_not_exists;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
