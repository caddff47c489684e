//! Content loaders
//!
//! One loader per source kind. Loading is fail-soft end to end: a missing
//! or unreadable source logs a warning and yields an empty collection,
//! and a single bad file is skipped without hiding the rest. Page
//! rendering must never hard-fail over a content mistake.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use walkdir::WalkDir;

use super::extract;
use super::frontmatter::{self, parse_date_string, PostFrontMatter, ProjectFrontMatter};
use super::post::{Author, AuthorsFile, Post};
use super::project::{Project, ProjectStatus, Visibility};
use super::team::{TeamFile, TeamMember};
use crate::Site;

/// Errors inside the loaders. These stop at the loader boundary: the
/// public `load_all` methods log them and degrade instead of returning
/// them, so one broken file cannot take a page down.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads blog posts and the author index
pub struct BlogLoader<'a> {
    site: &'a Site,
}

impl<'a> BlogLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every published post, newest first.
    ///
    /// Drafts (`published: false`) are dropped here and never reach the
    /// accessors. The authors document is read alongside the posts so
    /// each post carries its resolved author record.
    pub fn load_all(&self) -> Vec<Post> {
        let posts_dir = self.site.posts_dir();
        if !posts_dir.is_dir() {
            tracing::warn!("Posts directory {:?} is missing, blog will be empty", posts_dir);
            return Vec::new();
        }

        let authors = self.load_authors();
        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_post(path, &authors) {
                Ok(post) => {
                    if post.published {
                        posts.push(post);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Newest first; the slug breaks date ties so the order does not
        // depend on directory iteration
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        dedupe_by_slug(&mut posts, |p| p.slug.as_str(), "post");
        posts
    }

    fn load_post(&self, path: &Path, authors: &HashMap<String, Author>) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = frontmatter::parse::<PostFrontMatter>(&content);

        let slug = slug_from_path(path);
        let title = fm.title.unwrap_or_else(|| title_from_slug(&slug));

        let date = match fm.date.as_deref().and_then(parse_date_string) {
            Some(date) => date,
            None => {
                let fallback = file_date(path).unwrap_or_else(|| chrono::Local::now().date_naive());
                tracing::debug!("Post {:?} has no usable date, falling back to {}", path, fallback);
                fallback
            }
        };

        let author = fm.author.unwrap_or_default();
        let author_data = authors.get(&author.to_lowercase()).cloned();

        let read_time = fm
            .read_time
            .unwrap_or_else(|| derive_read_time(body, self.site.config.words_per_minute));

        Ok(Post {
            slug,
            title,
            description: fm.description.unwrap_or_default(),
            content: body.to_string(),
            author,
            author_data,
            date,
            read_time,
            category: fm.category.unwrap_or_default(),
            tags: fm.tags,
            featured: fm.featured,
            image: fm.image,
            published: fm.published,
        })
    }

    /// Author records keyed by lower-cased name. A missing document just
    /// means no post gets an author record attached.
    fn load_authors(&self) -> HashMap<String, Author> {
        let path = self.site.authors_file();
        match read_authors(&path) {
            Ok(authors) => {
                let mut index = HashMap::new();
                for author in authors {
                    index.entry(author.name.to_lowercase()).or_insert(author);
                }
                index
            }
            Err(e) => {
                tracing::warn!("Failed to load authors from {:?}: {}", path, e);
                HashMap::new()
            }
        }
    }
}

/// Loads project documents
pub struct ProjectLoader<'a> {
    site: &'a Site,
}

impl<'a> ProjectLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every project, ordered by status, then stars, then recency
    pub fn load_all(&self) -> Vec<Project> {
        let projects_dir = self.site.projects_dir();
        if !projects_dir.is_dir() {
            tracing::warn!(
                "Projects directory {:?} is missing, projects will be empty",
                projects_dir
            );
            return Vec::new();
        }

        let mut projects = Vec::new();
        for entry in WalkDir::new(&projects_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_project(path) {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!("Failed to load project {:?}: {}", path, e);
                }
            }
        }

        projects.sort_by(project_order);
        dedupe_by_slug(&mut projects, |p| p.slug.as_str(), "project");
        projects
    }

    fn load_project(&self, path: &Path) -> Result<Project, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = frontmatter::parse::<ProjectFrontMatter>(&content);
        let mined = extract::extract(body);

        let slug = slug_from_path(path);
        let name = fm
            .name
            .or(mined.name)
            .unwrap_or_else(|| title_from_slug(&slug));

        // Explicit front matter beats values mined from the body
        Ok(Project {
            slug,
            name,
            overview: fm.overview.or(mined.overview),
            github: fm.github.or(mined.github),
            primary_language: fm.primary_language.or(mined.primary_language),
            languages: fm.languages.or(mined.languages),
            stars: fm.stars.or(mined.stars),
            forks: fm.forks.or(mined.forks),
            last_updated: fm
                .last_updated
                .as_deref()
                .and_then(parse_date_string)
                .or(mined.last_updated),
            status: fm.status.as_deref().and_then(ProjectStatus::scan).or(mined.status),
            visibility: fm.visibility.as_deref().and_then(Visibility::scan).or(mined.visibility),
            live_demo: fm.live_demo.or(mined.live_demo),
            tech_stack: fm.tech_stack.or(mined.tech_stack),
            architecture: fm.architecture.or(mined.architecture),
            repository_size: fm.repository_size.or(mined.repository_size),
            key_features: fm.key_features.or(mined.key_features),
            category: fm.category.or(mined.category),
            tags: fm.tags.or(mined.tags),
            prerequisites: fm.prerequisites.or(mined.prerequisites),
            contributors: fm.contributors.or(mined.contributors),
            content: body.to_string(),
        })
    }
}

/// Loads the team document
pub struct TeamLoader<'a> {
    site: &'a Site,
}

impl<'a> TeamLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load the team in document order, image paths rooted under the
    /// public prefix
    pub fn load_all(&self) -> Vec<TeamMember> {
        let path = self.site.team_file();
        match read_team(&path) {
            Ok(mut team) => {
                for member in &mut team {
                    member.normalize_image(&self.site.config.team_image_prefix);
                }
                team
            }
            Err(e) => {
                tracing::warn!("Failed to load team from {:?}: {}", path, e);
                Vec::new()
            }
        }
    }
}

fn read_authors(path: &Path) -> Result<Vec<Author>, ContentError> {
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let file: AuthorsFile = serde_json::from_str(&content)?;
    Ok(file.authors)
}

fn read_team(path: &Path) -> Result<Vec<TeamMember>, ContentError> {
    let content = fs::read_to_string(path)?;
    let file: TeamFile = serde_json::from_str(&content)?;
    Ok(file.team)
}

/// Composite project ordering: shipping work first, then stars, then
/// recency, with the slug as a stable final tiebreak
fn project_order(a: &Project, b: &Project) -> Ordering {
    a.status_priority()
        .cmp(&b.status_priority())
        .then_with(|| b.stars.unwrap_or(0).cmp(&a.stars.unwrap_or(0)))
        .then_with(|| b.last_updated.cmp(&a.last_updated))
        .then_with(|| a.slug.cmp(&b.slug))
}

/// Drop records whose slug already appeared, keeping the first. File
/// names normally guarantee uniqueness, so a collision points at a
/// duplicate in a nested directory.
fn dedupe_by_slug<T, F>(records: &mut Vec<T>, slug: F, kind: &str)
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    records.retain(|record| {
        let keep = seen.insert(slug(record).to_string());
        if !keep {
            tracing::warn!("Duplicate {} slug {:?}, keeping the first", kind, slug(record));
        }
        keep
    });
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Slug is the file name without its extension
fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

/// Fallback title: the slug with separators opened back into spaces
fn title_from_slug(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
}

/// Reading time derived from a whitespace word count, rounded up
fn derive_read_time(body: &str, words_per_minute: usize) -> String {
    let words = body.split_whitespace().count();
    // A zero reading speed would divide by zero
    let minutes = words.div_ceil(words_per_minute.max(1));
    format!("{} min read", minutes)
}

/// Modification date of the source file, used when front matter has no
/// usable date
fn file_date(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let datetime: chrono::DateTime<chrono::Local> = modified.into();
    Some(datetime.date_naive())
}
