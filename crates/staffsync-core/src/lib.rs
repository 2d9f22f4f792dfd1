//! Shared core types for StaffSync.
//!
//! This crate holds the types every other StaffSync crate depends on:
//! the strongly typed identifiers used to reference tenants and users.
//! It deliberately has no knowledge of the database or the HTTP layer.

mod ids;

pub use ids::{ParseIdError, TenantId, UserId};
