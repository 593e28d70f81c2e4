//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s. Pages provide or read them via Leptos
//! context; list logic lives here so it can be tested without a browser.

pub mod auth;
pub mod availability;
pub mod dashboard;
pub mod events;
pub mod profile;
pub mod toast;
pub mod volunteers;
