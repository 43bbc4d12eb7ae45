//! Token payloads.
//!
//! - [`Identity`]: who the bearer is, as issued at login or registration
//! - [`Claims`]: the identity plus the issue and expiry timestamps

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::Role;

/// The account snapshot embedded in a token.
///
/// This is a capability snapshot: a role change made after issuance is not
/// reflected until the bearer obtains a new token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// JWT claims for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Account id
    pub id: i64,
    pub username: String,
    pub role: Role,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(identity: &Identity, issued_at: i64, ttl: i64) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            role: identity.role,
            iat: issued_at,
            exp: issued_at + ttl,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
