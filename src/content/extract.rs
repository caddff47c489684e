//! Best-effort extraction of structured fields from project documents
//!
//! Project sources are free-form markdown. Metadata lives in labeled
//! bullet lines such as `- **Stars:** 128 stars` and in conventional
//! sections, not in front matter. Each rule below mines one field from
//! the body and leaves it absent when its pattern is missing; extraction
//! itself never fails.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::frontmatter::parse_date_string;
use super::project::{ProjectStatus, Visibility};

lazy_static! {
    /// Top-level `# Title` line
    static ref H1: Regex = Regex::new(r"(?m)^#[ \t]+(.+?)[ \t]*$").unwrap();
    /// Any heading line, checked per line
    static ref HEADING: Regex = Regex::new(r"^(#{1,6})[ \t]+(.*)$").unwrap();
    /// `**Label:** value` line, optionally bulleted, with the colon
    /// inside or outside the bold span
    static ref LABELED: Regex =
        Regex::new(r"(?m)^[ \t]*(?:[-*][ \t]+)?\*\*([^*\n]+?)[ \t]*:?\*\*:?[ \t]*(\S[^\n]*?)[ \t]*$")
            .unwrap();
    /// `- **Label:** value` bullet, checked per line; the value may be empty
    static ref BOLD_BULLET: Regex =
        Regex::new(r"^[ \t]*[-*][ \t]+\*\*([^*\n]+?)[ \t]*:?\*\*:?[ \t]*(.*?)[ \t]*$").unwrap();
    /// Plain `- item` bullet with no bold label, checked per line
    static ref PLAIN_BULLET: Regex = Regex::new(r"^[ \t]*[-*][ \t]+([^*\s].*?)[ \t]*$").unwrap();
    /// Counts written as "1,024 stars" / "37 forks"
    static ref STAR_COUNT: Regex = Regex::new(r"(?i)(\d[\d,]*)\s*stars?\b").unwrap();
    static ref FORK_COUNT: Regex = Regex::new(r"(?i)(\d[\d,]*)\s*forks?\b").unwrap();
    /// Markdown link, capturing text and target
    static ref MD_LINK: Regex = Regex::new(r"\[([^\]]*)\]\(([^)\s]+)\)").unwrap();
    /// Bare URL
    static ref URL: Regex = Regex::new(r"https?://[^\s)\]]+").unwrap();
    /// Trailing share annotation on a language entry, like "(62%)"
    static ref LANG_SHARE: Regex = Regex::new(r"\s*\([^)]*%\)\s*$").unwrap();
}

/// Fields mined from a project document body.
///
/// Every field is independently optional; a rule whose pattern is not in
/// the document leaves its field `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub overview: Option<String>,
    pub key_features: Option<Vec<String>>,
    pub github: Option<String>,
    pub primary_language: Option<String>,
    pub languages: Option<Vec<String>>,
    pub stars: Option<u32>,
    pub forks: Option<u32>,
    pub last_updated: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub visibility: Option<Visibility>,
    pub live_demo: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub architecture: Option<String>,
    pub repository_size: Option<String>,
    pub prerequisites: Option<Vec<String>>,
    pub contributors: Option<String>,
}

/// One extraction rule. Each rule owns its fields and ignores the rest,
/// so rules stay independent and the catalog is easy to extend.
type Rule = fn(&str, &mut ExtractedFields);

const RULES: &[Rule] = &[
    extract_name,
    extract_overview,
    extract_key_features,
    extract_github,
    extract_primary_language,
    extract_languages,
    extract_stars,
    extract_forks,
    extract_last_updated,
    extract_status,
    extract_visibility,
    extract_live_demo,
    extract_category,
    extract_tags,
    extract_tech_stack,
    extract_architecture,
    extract_repository_size,
    extract_prerequisites,
    extract_contributors,
];

/// Run the whole rule catalog over a document body
pub fn extract(body: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    for rule in RULES {
        rule(body, &mut fields);
    }
    fields
}

/// First top-level heading becomes the project name
fn extract_name(body: &str, out: &mut ExtractedFields) {
    out.name = H1.captures(body).map(|caps| caps[1].trim().to_string());
}

/// First non-empty line after a heading containing "Overview"
fn extract_overview(body: &str, out: &mut ExtractedFields) {
    let Some(lines) = section_lines(body, "overview") else {
        return;
    };
    out.overview = lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .map(|line| line.to_string());
}

/// `- **Title:** description` bullets under a "Key Features" heading,
/// kept in source order as "Title: description" strings
fn extract_key_features(body: &str, out: &mut ExtractedFields) {
    let Some(lines) = section_lines(body, "key features") else {
        return;
    };
    let features: Vec<String> = lines
        .iter()
        .filter_map(|line| BOLD_BULLET.captures(line))
        .map(|caps| {
            let title = caps[1].trim();
            let description = caps[2].trim();
            if description.is_empty() {
                title.to_string()
            } else {
                format!("{}: {}", title, description)
            }
        })
        .collect();
    if !features.is_empty() {
        out.key_features = Some(features);
    }
}

/// Repository URL from the "GitHub" labeled line
fn extract_github(body: &str, out: &mut ExtractedFields) {
    let Some(value) = labeled_value(body, "GitHub") else {
        return;
    };
    out.github = first_url(&value);
}

fn extract_primary_language(body: &str, out: &mut ExtractedFields) {
    out.primary_language = labeled_value(body, "Primary Language");
}

/// Comma-separated language list; entries lose trailing shares like "(62%)"
fn extract_languages(body: &str, out: &mut ExtractedFields) {
    let Some(value) = labeled_value(body, "Languages") else {
        return;
    };
    let languages: Vec<String> = value
        .split(',')
        .map(|part| LANG_SHARE.replace(part.trim(), "").trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();
    if !languages.is_empty() {
        out.languages = Some(languages);
    }
}

/// Count immediately preceding the word "stars", commas tolerated.
/// A count that does not fit the field is treated as absent.
fn extract_stars(body: &str, out: &mut ExtractedFields) {
    out.stars = STAR_COUNT
        .captures(body)
        .and_then(|caps| caps[1].replace(',', "").parse().ok());
}

/// Count immediately preceding the word "forks", commas tolerated
fn extract_forks(body: &str, out: &mut ExtractedFields) {
    out.forks = FORK_COUNT
        .captures(body)
        .and_then(|caps| caps[1].replace(',', "").parse().ok());
}

/// Genuine date from the "Last Updated" labeled line, in any format the
/// front-matter date parser accepts
fn extract_last_updated(body: &str, out: &mut ExtractedFields) {
    out.last_updated = labeled_value(body, "Last Updated")
        .as_deref()
        .and_then(parse_date_string);
}

/// Status phrase scanned out of the labeled value, emoji and all
fn extract_status(body: &str, out: &mut ExtractedFields) {
    out.status = labeled_value(body, "Status")
        .as_deref()
        .and_then(ProjectStatus::scan);
}

fn extract_visibility(body: &str, out: &mut ExtractedFields) {
    out.visibility = labeled_value(body, "Visibility")
        .as_deref()
        .and_then(Visibility::scan);
}

/// Demo URL from the markdown link in the "Live Demo" labeled line
fn extract_live_demo(body: &str, out: &mut ExtractedFields) {
    let Some(value) = labeled_value(body, "Live Demo") else {
        return;
    };
    out.live_demo = first_url(&value);
}

fn extract_category(body: &str, out: &mut ExtractedFields) {
    out.category = labeled_value(body, "Category");
}

/// Space-separated tags; a leading `#` on a tag is dropped
fn extract_tags(body: &str, out: &mut ExtractedFields) {
    let Some(value) = labeled_value(body, "Tags") else {
        return;
    };
    let tags: Vec<String> = value
        .split_whitespace()
        .map(|tag| tag.trim_start_matches('#').to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    if !tags.is_empty() {
        out.tags = Some(tags);
    }
}

/// Stack from a "Technology Stack" or "Framework" labeled line, split on
/// commas and slashes. When no label exists, fall back to the bold
/// bullet labels under a "Primary Technologies" subheading.
fn extract_tech_stack(body: &str, out: &mut ExtractedFields) {
    let direct = labeled_value(body, "Technology Stack").or_else(|| labeled_value(body, "Framework"));
    if let Some(value) = direct {
        let stack: Vec<String> = value
            .split([',', '/'])
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();
        if !stack.is_empty() {
            out.tech_stack = Some(stack);
            return;
        }
    }

    let Some(lines) = section_lines(body, "primary technologies") else {
        return;
    };
    let stack: Vec<String> = lines
        .iter()
        .filter_map(|line| BOLD_BULLET.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .collect();
    if !stack.is_empty() {
        out.tech_stack = Some(stack);
    }
}

fn extract_architecture(body: &str, out: &mut ExtractedFields) {
    out.architecture = labeled_value(body, "Architecture");
}

fn extract_repository_size(body: &str, out: &mut ExtractedFields) {
    out.repository_size = labeled_value(body, "Repository Size");
}

/// Plain bullets under a "Prerequisites" subheading; bold-labeled
/// bullets there belong to other rules
fn extract_prerequisites(body: &str, out: &mut ExtractedFields) {
    let Some(lines) = section_lines(body, "prerequisites") else {
        return;
    };
    let prerequisites: Vec<String> = lines
        .iter()
        .filter_map(|line| PLAIN_BULLET.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .collect();
    if !prerequisites.is_empty() {
        out.prerequisites = Some(prerequisites);
    }
}

/// Lead developer name, taken from the link text of the "Lead Developer"
/// labeled line
fn extract_contributors(body: &str, out: &mut ExtractedFields) {
    let Some(value) = labeled_value(body, "Lead Developer") else {
        return;
    };
    out.contributors = MD_LINK
        .captures(&value)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty());
}

/// Value of the first `**Label:** value` line whose label matches
/// `label` case-insensitively
fn labeled_value(body: &str, label: &str) -> Option<String> {
    LABELED.captures_iter(body).find_map(|caps| {
        if caps[1].trim().eq_ignore_ascii_case(label) {
            Some(caps[2].trim().to_string())
        } else {
            None
        }
    })
}

/// Lines of the section opened by the first heading whose text contains
/// `needle` case-insensitively, up to the next heading of any level
fn section_lines<'a>(body: &'a str, needle: &str) -> Option<Vec<&'a str>> {
    let needle = needle.to_lowercase();
    let mut in_section = false;
    let mut collected = Vec::new();

    for line in body.lines() {
        if let Some(caps) = HEADING.captures(line) {
            if in_section {
                break;
            }
            if caps[2].to_lowercase().contains(&needle) {
                in_section = true;
            }
            continue;
        }
        if in_section {
            collected.push(line);
        }
    }

    if in_section {
        Some(collected)
    } else {
        None
    }
}

/// First URL in `value`, preferring a markdown link target over bare text
fn first_url(value: &str) -> Option<String> {
    if let Some(caps) = MD_LINK.captures(value) {
        return Some(caps[2].to_string());
    }
    URL.find(value)
        .map(|m| m.as_str().trim_end_matches(['.', ',']).to_string())
}
