//! # Stockroom API
//!
//! The account and access-control core of an inventory management service,
//! built with Axum and SQLite.
//!
//! ## Overview
//!
//! - **Authentication**: username/password login issuing one-hour HS256 tokens
//! - **Authorization**: two roles, `user` and `admin`, enforced by middleware
//! - **Account management**: admins list, create and delete accounts
//! - **Bootstrap**: a default administrator is seeded into an empty store
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── bin/cli.rs        # stockroom-cli administrative binary
//! ├── cli/              # CLI operations
//! ├── middleware/       # require_auth, require_admin, AuthUser extractor
//! ├── modules/
//! │   ├── auth/         # register, login, me
//! │   └── users/        # admin account management, default admin seed
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # request logging and subscriber setup
//! ├── router.rs         # route table, CORS, fallback
//! ├── state.rs          # AppState and startup
//! └── validator.rs      # ValidatedJson extractor
//! ```
//!
//! Shared pieces live in workspace crates:
//!
//! - `stockroom-core`: `AppError`, bcrypt helpers
//! - `stockroom-config`: environment-driven configuration
//! - `stockroom-auth`: roles, claims, token codec
//! - `stockroom-db`: SQLite pool and migrations
//!
//! ## Authentication
//!
//! Clients send the raw token in the `x-auth-token` header. Tokens carry
//! `{id, username, role}` and are never stored; expiry is the only
//! invalidation, so a role change takes effect when the account next logs in.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://database.sqlite
//! JWT_SECRET=your-secure-secret-key
//! cargo run --bin stockroom
//! ```
//!
//! API documentation is served at `/scalar` and `/api-docs/openapi.json`.

pub mod cli;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use stockroom_auth;
pub use stockroom_config;
pub use stockroom_core;
pub use stockroom_db;
