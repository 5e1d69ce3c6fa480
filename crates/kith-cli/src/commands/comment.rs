//! Comment command handler

use anyhow::{bail, Context, Result};

use kith_core::Store;

use crate::commands::resolve_post_id;
use crate::output::Output;

/// Comment on a post as the current user
pub fn create(store: &mut Store, post_id: &str, text: &str, output: &Output) -> Result<()> {
    let Some(author) = store.current_user().map(|u| u.id) else {
        bail!("No current user");
    };

    // The store itself doesn't check the parent post; the CLI does, so
    // typos don't silently create orphan comments.
    let post_id = resolve_post_id(store, post_id)?;

    let created = store
        .create_comment(post_id, author, text)
        .context("Failed to create comment")?;

    match created {
        Some(comment) => output.success(&format!("Created comment: {}", comment.id)),
        None => output.message("Nothing to say: comment text is empty."),
    }

    Ok(())
}
