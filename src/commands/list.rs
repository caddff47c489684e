//! List loaded content

use anyhow::Result;
use std::collections::HashMap;

use crate::ContentStore;

/// List content of the given type
pub fn run(store: &ContentStore, list_type: &str) -> Result<()> {
    match list_type {
        "post" | "posts" => {
            let posts = store.posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                let marker = if post.featured { "*" } else { " " };
                println!(
                    " {} {}  {}  [{}]",
                    marker,
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        "project" | "projects" => {
            let projects = store.projects();
            println!("Projects ({}):", projects.len());
            for project in projects {
                let status = project.status.map(|s| s.as_str()).unwrap_or("-");
                let stars = project
                    .stars
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("  {:<28} {:<18} {:>8} stars", project.slug, status, stars);
            }
        }
        "team" => {
            let team = store.team();
            println!("Team ({}):", team.len());
            for member in team {
                println!("  {} - {}", member.name, member.role);
            }
        }
        "tag" | "tags" => {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for post in store.posts() {
                for tag in &post.tags {
                    *counts.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
            let mut tags: Vec<_> = counts.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "category" | "categories" => {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for post in store.posts() {
                if !post.category.is_empty() {
                    *counts.entry(post.category.as_str()).or_insert(0) += 1;
                }
            }
            let mut categories: Vec<_> = counts.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

            println!("Categories ({}):", categories.len());
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown list type: {}. Available: posts, projects, team, tags, categories",
                list_type
            );
        }
    }

    Ok(())
}
