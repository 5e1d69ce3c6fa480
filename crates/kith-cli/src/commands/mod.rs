//! Command handlers
//!
//! One module per subcommand, plus shared id resolution: entity ids can
//! be given as full UUIDs or unambiguous prefixes, and users also by
//! exact (case-insensitive) name.

pub mod comment;
pub mod config;
pub mod feed;
pub mod friend;
pub mod like;
pub mod post;
pub mod profile;
pub mod search;
pub mod status;

use anyhow::{bail, Result};
use uuid::Uuid;

use kith_core::Store;

/// Resolve a post id (full UUID or prefix)
pub(crate) fn resolve_post_id(store: &Store, id: &str) -> Result<Uuid> {
    if let Ok(uuid) = Uuid::parse_str(id) {
        return Ok(uuid);
    }

    let matches: Vec<_> = store
        .posts()
        .iter()
        .filter(|p| p.id.to_string().starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No post found matching: {}", id),
        1 => Ok(matches[0].id),
        _ => bail!("Ambiguous post ID '{}'. Please provide more characters.", id),
    }
}

/// Resolve a comment id (full UUID or prefix)
pub(crate) fn resolve_comment_id(store: &Store, id: &str) -> Result<Uuid> {
    if let Ok(uuid) = Uuid::parse_str(id) {
        return Ok(uuid);
    }

    let matches: Vec<_> = store
        .comments()
        .iter()
        .filter(|c| c.id.to_string().starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No comment found matching: {}", id),
        1 => Ok(matches[0].id),
        _ => bail!(
            "Ambiguous comment ID '{}'. Please provide more characters.",
            id
        ),
    }
}

/// Resolve a user by exact name (case-insensitive) or id prefix
pub(crate) fn resolve_user_id(store: &Store, name_or_id: &str) -> Result<Uuid> {
    if let Ok(uuid) = Uuid::parse_str(name_or_id) {
        return Ok(uuid);
    }

    let by_name: Vec<_> = store
        .users()
        .iter()
        .filter(|u| u.name.eq_ignore_ascii_case(name_or_id))
        .collect();
    match by_name.len() {
        1 => return Ok(by_name[0].id),
        n if n > 1 => {
            eprintln!("Multiple users are named '{}':", name_or_id);
            for user in &by_name {
                eprintln!("  {} - {}", user.id, user.title);
            }
            bail!("Ambiguous name. Use an id prefix instead.");
        }
        _ => {}
    }

    let by_prefix: Vec<_> = store
        .users()
        .iter()
        .filter(|u| u.id.to_string().starts_with(name_or_id))
        .collect();

    match by_prefix.len() {
        0 => bail!("No user found matching: {}", name_or_id),
        1 => Ok(by_prefix[0].id),
        _ => bail!(
            "Ambiguous user ID '{}'. Please provide more characters.",
            name_or_id
        ),
    }
}
