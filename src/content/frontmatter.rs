//! Front-matter parsing for markdown content sources

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Split a leading YAML front-matter block off `content`.
///
/// Returns the raw block without its fences, plus the remaining body.
/// Absence of front matter is a valid, common case: the body is then the
/// original text unchanged. A fenced block that does not read like YAML
/// (markdown between horizontal rules) is left in the body untouched.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return (None, content);
    }

    let rest = &trimmed[3..];
    let rest = rest.trim_start_matches(['\r', '\n']);

    let Some(end_pos) = rest.find("\n---") else {
        // Opening fence without a closing one is just a heading rule
        return (None, content);
    };

    let block = &rest[..end_pos];
    let remaining = rest[end_pos + 4..].trim_start_matches(['\r', '\n']);

    if block.trim().is_empty() {
        return (None, remaining);
    }
    if !looks_like_yaml(block) {
        return (None, content);
    }

    (Some(block), remaining)
}

/// Parse the front-matter block of `content` into `T`.
///
/// Never fails: a document without a block, or with a block `T` cannot
/// deserialize, yields `T::default()`. A malformed block logs a warning
/// and is kept in the body so no authored text is lost.
pub fn parse<T>(content: &str) -> (T, &str)
where
    T: DeserializeOwned + Default,
{
    let (block, body) = split(content);
    let Some(block) = block else {
        return (T::default(), body);
    };

    match serde_yaml::from_str::<T>(block) {
        Ok(fm) => (fm, body),
        Err(e) => {
            tracing::warn!("Failed to parse front-matter, treating as content: {}", e);
            (T::default(), content)
        }
    }
}

/// Check if text between `---` fences has YAML key/value structure,
/// rather than being markdown prose between horizontal rules
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let valid_key = !key.is_empty()
            && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
            && key != "http"
            && key != "https"
            && key != "ftp";
        if !valid_key {
            return false;
        }
        let after = &trimmed[colon_pos + 1..];
        after.is_empty() || after.starts_with(' ')
    })
}

/// Front-matter schema for blog posts.
///
/// Every field is optional so partially annotated posts still load; the
/// loader fills the gaps. Keys are camelCase in the source documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostFrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    /// Tags, accepting both a single string and a list
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub featured: bool,
    pub image: Option<String>,
    /// Posts are published unless explicitly marked otherwise
    #[serde(default = "default_published")]
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for PostFrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            author: None,
            date: None,
            read_time: None,
            category: None,
            tags: Vec::new(),
            featured: false,
            image: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

/// Front-matter schema for project documents.
///
/// Projects are authored as free-form markdown, so a block is rare and
/// every key is optional; body extraction fills whatever is missing.
/// Status and visibility stay raw strings here because authors decorate
/// them with emoji.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFrontMatter {
    pub name: Option<String>,
    pub overview: Option<String>,
    pub github: Option<String>,
    pub primary_language: Option<String>,
    pub languages: Option<Vec<String>>,
    pub stars: Option<u32>,
    pub forks: Option<u32>,
    pub last_updated: Option<String>,
    pub status: Option<String>,
    pub visibility: Option<String>,
    pub live_demo: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub architecture: Option<String>,
    pub repository_size: Option<String>,
    pub key_features: Option<Vec<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub prerequisites: Option<Vec<String>>,
    pub contributors: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

/// Deserialize either a single string or a list of strings into a Vec
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> serde::de::Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("string or list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Parse a date string in the formats content authors actually use.
///
/// Tries ISO dates first, then US-style and written-out forms, then
/// datetimes and RFC 3339. Month-year forms like "December 2024" carry
/// no day and are pinned to the first of the month.
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let date_formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%B %d, %Y",
        "%b %d, %Y",
        "%d %B %Y",
    ];
    for format in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for format in datetime_formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.date_naive());
    }

    for format in ["%d %B %Y", "%d %b %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", s), format) {
            return Some(date);
        }
    }

    // A bare year pins to January 1st
    if let Ok(year) = s.parse::<i32>() {
        if (1000..=9999).contains(&year) {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }

    None
}
