//! `tracelot-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from transport and storage.

pub mod guard;

pub use guard::{require_admin, require_owner, require_registered, require_role};
