//! Request handlers for the content service API

pub mod contents;
pub mod courses;
pub mod health;
