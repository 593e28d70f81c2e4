//! Networking modules for the REST backend and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles backend REST calls, `identity` wraps the hosted identity
//! provider, `types` defines the backend wire schema, and `error` the shared
//! REST failure type.

pub mod api;
pub mod error;
pub mod identity;
pub mod types;
