//! Blog post and author models

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A published blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique key, derived from the source file name
    pub slug: String,
    /// Post title
    pub title: String,
    /// Short summary shown on listing cards
    pub description: String,
    /// Raw markdown body
    pub content: String,
    /// Author display name
    pub author: String,
    /// Author record resolved by name, when one matches
    pub author_data: Option<Author>,
    /// Publication date
    pub date: NaiveDate,
    /// Reading time, author-supplied or derived from the body
    pub read_time: String,
    /// Free-text category
    pub category: String,
    /// Tags in authored order
    pub tags: Vec<String>,
    /// Highlighted on the landing section
    pub featured: bool,
    /// Cover image path
    pub image: Option<String>,
    /// Unpublished posts never leave the loader
    pub published: bool,
}

impl Post {
    /// The next-newer post in a date-sorted list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// The next-older post in a date-sorted list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos + 1 < posts.len() {
            Some(&posts[pos + 1])
        } else {
            None
        }
    }
}

/// An author entry from the authors document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Display name; posts reference it case-insensitively
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    /// Platform name to profile URL, in authored order
    pub social: IndexMap<String, String>,
}

impl Author {
    /// Social links worth rendering. Authors use `"#"` as a placeholder
    /// for profiles they have not filled in yet.
    pub fn social_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.social
            .iter()
            .filter(|(_, url)| url.as_str() != "#")
            .map(|(platform, url)| (platform.as_str(), url.as_str()))
    }
}

/// Authors document shape, `{ "authors": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AuthorsFile {
    #[serde(default)]
    pub authors: Vec<Author>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: (i32, u32, u32)) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            content: String::new(),
            author: String::new(),
            author_data: None,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            read_time: "1 min read".to_string(),
            category: String::new(),
            tags: Vec::new(),
            featured: false,
            image: None,
            published: true,
        }
    }

    #[test]
    fn test_prev_next_in_sorted_list() {
        // Newest first, as the loader produces
        let posts = vec![
            post("third", (2024, 3, 1)),
            post("second", (2024, 2, 1)),
            post("first", (2024, 1, 1)),
        ];

        assert!(posts[0].prev(&posts).is_none());
        assert_eq!(posts[1].prev(&posts).unwrap().slug, "third");
        assert_eq!(posts[1].next(&posts).unwrap().slug, "first");
        assert!(posts[2].next(&posts).is_none());
    }

    #[test]
    fn test_social_links_skip_placeholders() {
        let mut social = IndexMap::new();
        social.insert("github".to_string(), "https://github.com/alice".to_string());
        social.insert("twitter".to_string(), "#".to_string());
        let author = Author {
            name: "Alice".to_string(),
            social,
            ..Default::default()
        };

        let links: Vec<_> = author.social_links().collect();
        assert_eq!(links, vec![("github", "https://github.com/alice")]);
    }

    #[test]
    fn test_authors_file_shape() {
        let json = r##"{
            "authors": [
                {
                    "name": "Alice Chen",
                    "role": "Platform Lead",
                    "social": {"github": "https://github.com/alice", "linkedin": "#"}
                }
            ]
        }"##;
        let file: AuthorsFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.authors.len(), 1);
        assert_eq!(file.authors[0].name, "Alice Chen");
        assert_eq!(file.authors[0].role.as_deref(), Some("Platform Lead"));
        assert!(file.authors[0].bio.is_none());
    }
}
