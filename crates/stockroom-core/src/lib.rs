//! # Stockroom Core
//!
//! Foundational types shared by every Stockroom crate:
//!
//! - [`errors`]: the HTTP-facing [`AppError`] type
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: custom deserialization helpers for request bodies
//!
//! # Example
//!
//! ```ignore
//! use stockroom_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret1", 10)?;
//! assert!(verify_password("secret1", &hash)?);
//!
//! let err = AppError::not_found(anyhow::anyhow!("User not found"));
//! ```

pub mod errors;
pub mod password;
pub mod serde;

pub use errors::{AppError, SERVER_ERROR_MESSAGE};
pub use password::{hash_password, verify_password};
