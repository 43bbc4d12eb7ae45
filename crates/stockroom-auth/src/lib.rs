//! # Stockroom Auth
//!
//! Authentication types and JWT utilities for the Stockroom API.
//!
//! This crate provides:
//!
//! - [`role`]: the closed set of account roles
//! - [`claims`]: the identity carried by a token and the full claim set
//! - [`jwt`]: token issuance and verification
//!
//! Tokens are stateless HS256 JWTs valid for one hour. They are never stored
//! or revoked; expiry is the only invalidation.
//!
//! # Example
//!
//! ```ignore
//! use stockroom_auth::{Identity, Role, issue_token, verify_token};
//! use stockroom_config::JwtConfig;
//!
//! let config = JwtConfig::new("s3cret");
//! let identity = Identity { id: 1, username: "admin".into(), role: Role::Admin };
//!
//! let token = issue_token(&identity, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.identity(), identity);
//! ```

pub mod claims;
pub mod jwt;
pub mod role;

pub use claims::{Claims, Identity};
pub use jwt::{TokenError, issue_token, issue_token_at, verify_token, verify_token_at};
pub use role::{Role, UnknownRole};
