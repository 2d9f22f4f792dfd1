//! Strongly typed identifiers.
//!
//! Tenants and users are both identified by UUIDs. Wrapping the raw
//! `Uuid` in newtypes prevents passing a user identifier where a tenant
//! identifier is expected at compile time.
//!
//! # Example
//!
//! ```
//! use staffsync_core::{TenantId, UserId};
//!
//! fn owner_of(tenant: TenantId) -> String {
//!     tenant.to_string()
//! }
//!
//! let tenant = TenantId::new();
//! let _user = UserId::new();
//! let _ = owner_of(tenant);
//! // owner_of(_user); // does not compile
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error returned when an identifier fails to parse from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The identifier type that failed to parse.
    pub id_type: &'static str,
    /// The underlying UUID parse error message.
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Defines a strongly typed UUID-backed identifier.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier (UUID v4).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a registered company.
    ///
    /// Generated once at registration and immutable afterwards.
    TenantId
);

define_id!(
    /// Identifier of a user account.
    ///
    /// Every user belongs to exactly one tenant.
    UserId
);
