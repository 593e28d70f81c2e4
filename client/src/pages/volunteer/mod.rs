//! Volunteer-area pages. All routes here require a signed-in user.

pub mod dashboard;
pub mod events;
pub mod first_aid_guide;
pub mod profile;
