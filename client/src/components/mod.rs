//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, guards, and form controls while reading
//! shared state from Leptos context providers.

pub mod app_layout;
pub mod bottom_nav;
pub mod dropdown;
pub mod event_card;
pub mod guards;
pub mod header;
pub mod input_field;
pub mod loader;
pub mod redirect_trailing_slash;
pub mod toast_host;
pub mod toggle_button;
