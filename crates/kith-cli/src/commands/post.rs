//! Post command handlers

use anyhow::{bail, Context, Result};

use kith_core::Store;

use crate::commands::resolve_post_id;
use crate::output::Output;

/// Create a post as the current user
pub fn create(
    store: &mut Store,
    text: Option<String>,
    image: Option<String>,
    output: &Output,
) -> Result<()> {
    let Some(author) = store.current_user().map(|u| u.id) else {
        bail!("No current user");
    };

    let created = store
        .create_post(author, text.as_deref(), image.as_deref())
        .context("Failed to create post")?;

    match created {
        Some(post) => {
            output.success(&format!("Created post: {}", post.id));
            output.print_post(&post, store);
        }
        None => output.message("Nothing to post: give some text or an image."),
    }

    Ok(())
}

/// Show one post with its comments
pub fn show(store: &Store, id: &str, output: &Output) -> Result<()> {
    let post_id = resolve_post_id(store, id)?;

    let post = store
        .post(post_id)
        .ok_or_else(|| anyhow::anyhow!("Post not found: {}", id))?;

    output.print_post(post, store);
    Ok(())
}
