//! Process-wide content store
//!
//! One cache slot per content kind, filled by the matching loader the
//! first time an accessor needs it and shared for the rest of the
//! process. Accessors hand out references into the cache; loaded records
//! are never mutated after the fill.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::content::loader::{BlogLoader, ProjectLoader, TeamLoader};
use crate::content::{Post, Project, TeamMember};
use crate::Site;

/// Cached, query-ready view over every content source
pub struct ContentStore {
    site: Site,
    posts: OnceLock<Vec<Post>>,
    projects: OnceLock<Vec<Project>>,
    team: OnceLock<Vec<TeamMember>>,
}

impl ContentStore {
    /// Create a store; nothing is read until an accessor asks for it
    pub fn new(site: Site) -> Self {
        Self {
            site,
            posts: OnceLock::new(),
            projects: OnceLock::new(),
            team: OnceLock::new(),
        }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// All published posts, newest first
    pub fn posts(&self) -> &[Post] {
        self.posts
            .get_or_init(|| BlogLoader::new(&self.site).load_all())
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts().iter().find(|p| p.slug == slug)
    }

    /// Posts whose category matches exactly, ignoring case
    pub fn posts_by_category(&self, category: &str) -> Vec<&Post> {
        let category = category.to_lowercase();
        self.posts()
            .iter()
            .filter(|p| p.category.to_lowercase() == category)
            .collect()
    }

    /// Posts carrying `tag`, ignoring case
    pub fn posts_by_tag(&self, tag: &str) -> Vec<&Post> {
        let tag = tag.to_lowercase();
        self.posts()
            .iter()
            .filter(|p| p.tags.iter().any(|t| t.to_lowercase() == tag))
            .collect()
    }

    /// Posts flagged for the featured section, newest first
    pub fn featured_posts(&self) -> Vec<&Post> {
        self.posts().iter().filter(|p| p.featured).collect()
    }

    /// Distinct post categories, alphabetical. Dedup is by exact string,
    /// so authored case variants stay distinct.
    pub fn post_categories(&self) -> Vec<String> {
        let categories: BTreeSet<String> = self
            .posts()
            .iter()
            .filter(|p| !p.category.is_empty())
            .map(|p| p.category.clone())
            .collect();
        categories.into_iter().collect()
    }

    /// Distinct post tags, alphabetical
    pub fn post_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .posts()
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect();
        tags.into_iter().collect()
    }

    /// Slugs for static path generation, in listing order
    pub fn post_slugs(&self) -> Vec<&str> {
        self.posts().iter().map(|p| p.slug.as_str()).collect()
    }

    /// Neighbors of a post in the newest-first order, as (newer, older)
    pub fn adjacent_posts(&self, slug: &str) -> (Option<&Post>, Option<&Post>) {
        let posts = self.posts();
        match self.post_by_slug(slug) {
            Some(post) => (post.prev(posts), post.next(posts)),
            None => (None, None),
        }
    }

    /// All projects in the composite sort order
    pub fn projects(&self) -> &[Project] {
        self.projects
            .get_or_init(|| ProjectLoader::new(&self.site).load_all())
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.slug == slug)
    }

    /// Up to `limit` active, public projects, sort order preserved
    pub fn featured_projects(&self, limit: usize) -> Vec<&Project> {
        self.projects()
            .iter()
            .filter(|p| p.is_featured())
            .take(limit)
            .collect()
    }

    /// Projects whose tech stack or primary language contains `term`,
    /// ignoring case
    pub fn projects_by_technology(&self, term: &str) -> Vec<&Project> {
        self.projects()
            .iter()
            .filter(|p| p.uses_technology(term))
            .collect()
    }

    /// Projects whose category contains `term`, ignoring case
    pub fn projects_by_category(&self, term: &str) -> Vec<&Project> {
        let term = term.to_lowercase();
        self.projects()
            .iter()
            .filter(|p| {
                p.category
                    .as_deref()
                    .map_or(false, |c| c.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Distinct project categories, alphabetical
    pub fn project_categories(&self) -> Vec<String> {
        let categories: BTreeSet<String> = self
            .projects()
            .iter()
            .filter_map(|p| p.category.clone())
            .collect();
        categories.into_iter().collect()
    }

    /// Distinct project tags, alphabetical
    pub fn project_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .projects()
            .iter()
            .filter_map(|p| p.tags.as_ref())
            .flatten()
            .cloned()
            .collect();
        tags.into_iter().collect()
    }

    pub fn project_slugs(&self) -> Vec<&str> {
        self.projects().iter().map(|p| p.slug.as_str()).collect()
    }

    /// Every team member, in document order
    pub fn team(&self) -> &[TeamMember] {
        self.team
            .get_or_init(|| TeamLoader::new(&self.site).load_all())
    }

    /// Exact name match, ignoring case
    pub fn team_member_by_name(&self, name: &str) -> Option<&TeamMember> {
        let name = name.to_lowercase();
        self.team().iter().find(|m| m.name.to_lowercase() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentConfig;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn demo_store() -> (TempDir, ContentStore) {
        let dir = TempDir::new().unwrap();

        write(
            &dir,
            "content/blog/rust-intro.md",
            "---\ntitle: Rust Intro\ndate: 2024-03-01\ncategory: Engineering\ntags: [rust, tooling]\nfeatured: true\n---\nBody",
        );
        write(
            &dir,
            "content/blog/design-system.md",
            "---\ntitle: Design System\ndate: 2024-02-01\ncategory: Design\ntags: [figma]\n---\nBody",
        );
        write(
            &dir,
            "content/blog/ci-caching.md",
            "---\ntitle: CI Caching\ndate: 2024-01-01\ncategory: engineering\ntags: [ci, rust]\n---\nBody",
        );

        for (slug, stars) in [("alpha", 40), ("beta", 30), ("gamma", 20), ("delta", 10)] {
            write(
                &dir,
                &format!("content/projects/{}.md", slug),
                &format!(
                    "# {}\n\n- **Status:** ✅ Active\n- **Visibility:** 🌐 Public\n- **Stars:** {} stars\n- **Category:** Infrastructure\n- **Tags:** #tooling\n- **Technology Stack:** Tokio, Axum\n",
                    slug, stars
                ),
            );
        }
        write(
            &dir,
            "content/projects/old-site.md",
            "# old-site\n\n- **Status:** Archived\n- **Visibility:** 🌐 Public\n- **Category:** Web\n",
        );

        write(
            &dir,
            "content/team.json",
            r#"{"team": [{"name": "Alice Chen", "role": "Founder", "bio": "", "image": "alice.png", "social": {}}]}"#,
        );

        let site = Site::with_config(dir.path(), ContentConfig::default());
        let store = ContentStore::new(site);
        (dir, store)
    }

    #[test]
    fn test_accessors_reuse_the_same_load() {
        let (_dir, store) = demo_store();
        let first = store.posts().as_ptr();
        let second = store.posts().as_ptr();
        assert_eq!(first, second);
        assert_eq!(store.projects().as_ptr(), store.projects().as_ptr());
        assert_eq!(store.team().as_ptr(), store.team().as_ptr());
    }

    #[test]
    fn test_store_exposes_its_site() {
        let (dir, store) = demo_store();
        assert_eq!(store.site().base_dir, dir.path());
    }

    #[test]
    fn test_posts_are_listed_newest_first() {
        let (_dir, store) = demo_store();
        let slugs = store.post_slugs();
        assert_eq!(slugs, vec!["rust-intro", "design-system", "ci-caching"]);
    }

    #[test]
    fn test_post_by_slug() {
        let (_dir, store) = demo_store();
        assert_eq!(store.post_by_slug("ci-caching").unwrap().title, "CI Caching");
        assert!(store.post_by_slug("nope").is_none());
    }

    #[test]
    fn test_posts_by_category_ignores_case() {
        let (_dir, store) = demo_store();
        let posts = store.posts_by_category("ENGINEERING");
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_posts_by_tag_ignores_case() {
        let (_dir, store) = demo_store();
        let posts = store.posts_by_tag("Rust");
        assert_eq!(posts.len(), 2);
        assert!(store.posts_by_tag("go").is_empty());
    }

    #[test]
    fn test_featured_posts() {
        let (_dir, store) = demo_store();
        let featured = store.featured_posts();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].slug, "rust-intro");
    }

    #[test]
    fn test_post_catalogs_are_deduped_and_sorted() {
        let (_dir, store) = demo_store();
        // Dedup is by exact string, so case variants stay distinct
        assert_eq!(
            store.post_categories(),
            vec!["Design", "Engineering", "engineering"]
        );
        assert_eq!(store.post_tags(), vec!["ci", "figma", "rust", "tooling"]);
    }

    #[test]
    fn test_adjacent_posts() {
        let (_dir, store) = demo_store();

        let (newer, older) = store.adjacent_posts("design-system");
        assert_eq!(newer.unwrap().slug, "rust-intro");
        assert_eq!(older.unwrap().slug, "ci-caching");

        let (newer, older) = store.adjacent_posts("rust-intro");
        assert!(newer.is_none());
        assert_eq!(older.unwrap().slug, "design-system");

        let (newer, older) = store.adjacent_posts("unknown");
        assert!(newer.is_none());
        assert!(older.is_none());
    }

    #[test]
    fn test_featured_projects_cap() {
        let (_dir, store) = demo_store();
        let featured = store.featured_projects(3);
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.is_featured()));
        // The cap keeps the sort order, so the starred ones come first
        assert_eq!(featured[0].slug, "alpha");
    }

    #[test]
    fn test_projects_by_technology() {
        let (_dir, store) = demo_store();
        assert_eq!(store.projects_by_technology("tokio").len(), 4);
        assert!(store.projects_by_technology("django").is_empty());
    }

    #[test]
    fn test_projects_by_category_is_substring() {
        let (_dir, store) = demo_store();
        assert_eq!(store.projects_by_category("infra").len(), 4);
        assert_eq!(store.projects_by_category("web").len(), 1);
    }

    #[test]
    fn test_project_catalogs() {
        let (_dir, store) = demo_store();
        assert_eq!(store.project_categories(), vec!["Infrastructure", "Web"]);
        assert_eq!(store.project_tags(), vec!["tooling"]);
        assert_eq!(store.project_slugs().len(), 5);
    }

    #[test]
    fn test_project_by_slug() {
        let (_dir, store) = demo_store();
        assert!(store.project_by_slug("old-site").is_some());
        assert!(store.project_by_slug("nope").is_none());
    }

    #[test]
    fn test_team_member_by_name_ignores_case() {
        let (_dir, store) = demo_store();
        assert_eq!(store.team().len(), 1);
        let member = store.team_member_by_name("alice chen").unwrap();
        assert_eq!(member.role, "Founder");
        assert!(store.team_member_by_name("Bob").is_none());
    }

    #[test]
    fn test_empty_site_serves_empty_collections() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), ContentConfig::default());
        let store = ContentStore::new(site);

        assert!(store.posts().is_empty());
        assert!(store.projects().is_empty());
        assert!(store.team().is_empty());
        assert!(store.featured_posts().is_empty());
        assert!(store.featured_projects(3).is_empty());
        assert!(store.post_categories().is_empty());
    }
}
