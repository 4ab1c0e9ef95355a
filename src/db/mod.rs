//! Database module: models and schema for the name store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (MySQL)
//! - `mysql.rs`: the store implementation over a single connection

pub mod models;
pub mod mysql;
pub mod schema;

pub use models::NameRecord;
pub use mysql::MysqlNameStore;
pub use schema::MYSQL_INIT;

use crate::error::RosterError;

/// The operations the interactive loop needs from a name store.
///
/// The seam exists so the loop can be exercised against an in-memory store;
/// `MysqlNameStore` is the only production implementation.
#[allow(async_fn_in_trait)]
pub trait NameStore {
    /// Idempotent schema creation. Fails only when the connection is
    /// unusable; the failure propagates, it is not retried.
    async fn ensure_table(&mut self) -> Result<(), RosterError>;

    /// Append one record with the given text. Returns the id the database
    /// assigned. No validation: empty strings are accepted.
    async fn insert(&mut self, name: &str) -> Result<u64, RosterError>;

    /// Every stored name in primary-key order. An empty table yields an
    /// empty vector, not an error.
    async fn list_all(&mut self) -> Result<Vec<String>, RosterError>;
}
