//! Networking for the auth check.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single "current user" request, `types` defines the
//! JSON shape the backend answers with.

pub mod api;
pub mod types;
