//! Friend command handlers

use anyhow::{bail, Context, Result};

use kith_core::Store;

use crate::commands::resolve_user_id;
use crate::output::Output;

/// Toggle friendship between the current user and another user
pub fn toggle(store: &mut Store, user: &str, output: &Output) -> Result<()> {
    let Some(me) = store.current_user().map(|u| u.id) else {
        bail!("No current user");
    };

    let other = resolve_user_id(store, user)?;
    if other == me {
        bail!("You can't befriend yourself.");
    }

    store
        .toggle_friend(other)
        .context("Failed to toggle friendship")?;

    let name = store
        .user(other)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| other.to_string());

    if store.user(me).is_some_and(|u| u.is_friend(other)) {
        output.success(&format!("You are now friends with {}", name));
    } else {
        output.success(&format!("You are no longer friends with {}", name));
    }

    Ok(())
}

/// List the current user's friends
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let Some(me) = store.current_user().map(|u| u.id) else {
        bail!("No current user");
    };

    let friends = store.friends_of(me);
    output.print_users(&friends);
    Ok(())
}
