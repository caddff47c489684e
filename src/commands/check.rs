//! Load every content source and report on its health

use anyhow::Result;

use crate::ContentStore;

/// Run all loaders and print counts plus notes on content worth fixing.
/// Loading is fail-soft, so this never errors on bad content; the notes
/// are how authors find out what got dropped or defaulted.
pub fn run(store: &ContentStore) -> Result<()> {
    println!("Checking content under {}", store.site().base_dir.display());

    let posts = store.posts();
    let projects = store.projects();
    let team = store.team();

    println!("Posts:    {}", posts.len());
    println!("Projects: {}", projects.len());
    println!("Team:     {}", team.len());
    println!();

    let mut notes = 0;

    for post in posts {
        if post.author.is_empty() {
            println!("note: post '{}' names no author", post.slug);
            notes += 1;
        } else if post.author_data.is_none() {
            println!(
                "note: post '{}' author {:?} has no authors document entry",
                post.slug, post.author
            );
            notes += 1;
        }
        if post.description.is_empty() {
            println!("note: post '{}' has no description", post.slug);
            notes += 1;
        }
        if post.category.is_empty() {
            println!("note: post '{}' has no category", post.slug);
            notes += 1;
        }
    }

    for project in projects {
        if project.status.is_none() {
            println!("note: project '{}' has no recognizable status", project.slug);
            notes += 1;
        }
        if project.github.is_none() {
            println!("note: project '{}' has no repository link", project.slug);
            notes += 1;
        }
    }

    for member in team {
        if member.image.is_empty() {
            println!("note: team member '{}' has no image", member.name);
            notes += 1;
        }
    }

    if notes == 0 {
        println!("All sources look good.");
    } else {
        println!("{} note(s).", notes);
    }

    Ok(())
}
