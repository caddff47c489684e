//! Content layer configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the content sources live and how derived fields are computed.
///
/// All paths are resolved against the site base directory. Every field
/// has a default matching the conventional repository layout, so a site
/// without a `content.yml` still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding blog post markdown files
    pub posts_dir: String,
    /// Directory holding project markdown documents
    pub projects_dir: String,
    /// Authors document, `{ "authors": [...] }`
    pub authors_file: String,
    /// Team document, `{ "team": [...] }`
    pub team_file: String,
    /// Public asset prefix team member images are rooted under
    pub team_image_prefix: String,
    /// Reading speed used to derive a read time when a post does not
    /// declare one
    pub words_per_minute: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: "content/blog".to_string(),
            projects_dir: "content/projects".to_string(),
            authors_file: "content/blog/authors.json".to_string(),
            team_file: "content/team.json".to_string(),
            team_image_prefix: "/team-members".to_string(),
            words_per_minute: 200,
        }
    }
}

impl ContentConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ContentConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
