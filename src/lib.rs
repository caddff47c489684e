//! Content ingestion and query layer for a statically generated
//! community site.
//!
//! Reads markdown and JSON content sources at build time, parses them
//! into typed records, and serves queries over an in-memory cache that
//! is filled once per process. Rendering, routing, and feeds belong to
//! the consumers of this crate.

pub mod commands;
pub mod config;
pub mod content;
pub mod store;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{Author, Post, Project, ProjectStatus, TeamMember, Visibility};
pub use store::ContentStore;

/// A content site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Content layer configuration
    pub config: config::ContentConfig,
    /// Base directory the configured paths resolve against
    pub base_dir: PathBuf,
}

impl Site {
    /// Configuration file read from the base directory when present
    pub const CONFIG_FILE: &'static str = "content.yml";

    /// Create a site from a directory, reading `content.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(Self::CONFIG_FILE);

        let config = if config_path.exists() {
            config::ContentConfig::load(&config_path)?
        } else {
            config::ContentConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Create a site with explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::ContentConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.posts_dir)
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.projects_dir)
    }

    pub fn authors_file(&self) -> PathBuf {
        self.base_dir.join(&self.config.authors_file)
    }

    pub fn team_file(&self) -> PathBuf {
        self.base_dir.join(&self.config.team_file)
    }

    /// Store serving this site's content
    pub fn into_store(self) -> ContentStore {
        ContentStore::new(self)
    }
}
