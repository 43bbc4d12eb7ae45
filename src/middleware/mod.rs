//! Middleware and extractors for authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: token authentication and the [`auth::AuthUser`] extractor
//! - [`role`]: the admin gate
//!
//! # Authentication Flow
//!
//! 1. Client sends the raw token in the `x-auth-token` header
//! 2. [`auth::require_auth`] verifies it and stores an `AuthUser` in the
//!    request extensions
//! 3. [`role::require_admin`] does the same, then requires the admin role
//! 4. Handlers receive the identity through the `AuthUser` extractor
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::{auth::require_auth, role::require_admin};
//!
//! let routes = Router::new()
//!     .route("/me", get(me))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;
pub mod role;
