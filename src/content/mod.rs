//! Content module - models, parsing, and loading for every source kind

pub mod extract;
pub mod frontmatter;
pub mod loader;
mod post;
mod project;
mod team;

pub use post::{Author, Post};
pub use project::{Project, ProjectStatus, Visibility};
pub use team::{MemberSocial, TeamMember};
