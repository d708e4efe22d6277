//! # lifedrop-auth
//!
//! Session credentials and authorization for LifeDrop.
//!
//! ## Modules
//!
//! - `token` — session token creation and verification (HS256, 1 hour TTL)
//! - `guard` — role checks against the store-of-record and ownership checks
//! - `password` — argon2id hashing for the stored registration credential
//!
//! Tokens carry only the caller's email. Role authority stays in the users
//! table so admin-driven role and status changes take effect without
//! re-login; the guard re-fetches the user on every privileged decision.

pub mod guard;
pub mod password;
pub mod token;

pub use guard::{RoleGuard, require_self};
pub use password::PasswordHasher;
pub use token::{Claims, SessionEncoder, SessionVerifier};
