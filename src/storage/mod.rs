//! Storage layer for football player records
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures and their SQL conversions
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD operations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;
