//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic and queries
//! - `model.rs`: DTOs and database rows
//! - `router.rs`: route table
//!
//! - [`auth`]: registration, login and the current account
//! - [`users`]: admin account management and the default admin seed

pub mod auth;
pub mod users;
