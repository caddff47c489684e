//! Project model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "In Development")]
    InDevelopment,
    Maintenance,
    #[serde(rename = "Under Construction")]
    UnderConstruction,
    Archived,
}

impl ProjectStatus {
    /// Position in the project sort order, shipping work first
    pub fn priority(self) -> u8 {
        match self {
            ProjectStatus::Active => 0,
            ProjectStatus::InDevelopment => 1,
            ProjectStatus::Maintenance => 2,
            ProjectStatus::UnderConstruction => 3,
            ProjectStatus::Archived => 4,
        }
    }

    /// Find a status phrase inside free text such as "✅ Active".
    ///
    /// Matches whole words, so "Inactive" is not "Active". Two-word
    /// phrases are checked first because their tail words also appear
    /// alone in prose.
    pub fn scan(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        if words.windows(2).any(|p| p[0] == "in" && p[1] == "development") {
            return Some(ProjectStatus::InDevelopment);
        }
        if words.windows(2).any(|p| p[0] == "under" && p[1] == "construction") {
            return Some(ProjectStatus::UnderConstruction);
        }
        words.iter().find_map(|word| match *word {
            "active" => Some(ProjectStatus::Active),
            "maintenance" => Some(ProjectStatus::Maintenance),
            "archived" => Some(ProjectStatus::Archived),
            _ => None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::InDevelopment => "In Development",
            ProjectStatus::Maintenance => "Maintenance",
            ProjectStatus::UnderConstruction => "Under Construction",
            ProjectStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a project is listed publicly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Find a visibility word inside free text such as "🔒 Private"
    pub fn scan(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        words.iter().find_map(|word| match *word {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project record assembled from front matter and body extraction.
///
/// Project documents are free-form, so everything beyond the slug, name,
/// and body is best-effort: a field whose pattern is missing from the
/// source is simply absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique key, derived from the source file name
    pub slug: String,
    /// From the document H1, front matter, or the slug
    pub name: String,
    pub overview: Option<String>,
    pub github: Option<String>,
    pub primary_language: Option<String>,
    pub languages: Option<Vec<String>>,
    pub stars: Option<u32>,
    pub forks: Option<u32>,
    pub last_updated: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub visibility: Option<Visibility>,
    pub live_demo: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub architecture: Option<String>,
    pub repository_size: Option<String>,
    pub key_features: Option<Vec<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub prerequisites: Option<Vec<String>>,
    /// Lead developer name
    pub contributors: Option<String>,
    /// Raw markdown body
    pub content: String,
}

impl Project {
    /// Position of this project's status in the sort order; projects
    /// without a status sort last
    pub fn status_priority(&self) -> u8 {
        self.status.map(ProjectStatus::priority).unwrap_or(5)
    }

    /// Listed in the featured section: shipping and publicly visible
    pub fn is_featured(&self) -> bool {
        self.status == Some(ProjectStatus::Active) && self.visibility == Some(Visibility::Public)
    }

    /// Check `term` against the tech stack and primary language,
    /// case-insensitively and by substring, so "react" finds "React Native"
    pub fn uses_technology(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let in_stack = self
            .tech_stack
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|t| t.to_lowercase().contains(&term));
        let in_primary = self
            .primary_language
            .as_deref()
            .map_or(false, |language| language.to_lowercase().contains(&term));
        in_stack || in_primary
    }
}
