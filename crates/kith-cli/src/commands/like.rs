//! Like command handler

use anyhow::{Context, Result};

use kith_core::{LikeTarget, Store};

use crate::commands::{resolve_comment_id, resolve_post_id};
use crate::output::Output;

/// Toggle the current user's like on a post or comment
pub fn toggle(store: &mut Store, target: LikeTarget, id: &str, output: &Output) -> Result<()> {
    let id = match target {
        LikeTarget::Post => resolve_post_id(store, id)?,
        LikeTarget::Comment => resolve_comment_id(store, id)?,
    };

    store
        .toggle_like(target, id)
        .context("Failed to toggle like")?;

    let liked = match target {
        LikeTarget::Post => store
            .post(id)
            .zip(store.current_user())
            .is_some_and(|(p, me)| p.liked_by(me.id)),
        LikeTarget::Comment => store
            .comment(id)
            .zip(store.current_user())
            .is_some_and(|(c, me)| c.liked_by(me.id)),
    };

    if liked {
        output.success(&format!("Liked {}", id));
    } else {
        output.success(&format!("Unliked {}", id));
    }

    Ok(())
}
