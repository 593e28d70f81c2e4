//! Admin-area pages. All routes here sit behind the admin guard.

pub mod assign_volunteers;
pub mod create_event;
pub mod dashboard;
pub mod edit_event;
pub mod emergency;
pub mod events;
