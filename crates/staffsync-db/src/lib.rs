//! Database layer for StaffSync.
//!
//! This crate owns the connection pool, the versioned schema migrations,
//! and the row models for the two persisted entities (`Tenant`, `User`)
//! together with their queries. All access goes through the pool; nothing
//! is cached in-process.

mod error;
mod migrations;
mod models;
mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{NewTenant, NewUser, Tenant, User, ROLE_ADMIN};
pub use pool::DbPool;
