//! Maintenance commands over the content store

pub mod check;
pub mod list;
