//! Profile command handlers

use anyhow::{bail, Context, Result};

use kith_core::{ProfileUpdate, Store};

use crate::output::Output;

/// Show the current user's profile
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let Some(user) = store.current_user() else {
        bail!("No current user");
    };

    output.print_user(user);
    Ok(())
}

/// Update profile fields; omitted fields keep their values
pub fn set(
    store: &mut Store,
    name: Option<String>,
    avatar: Option<String>,
    cover: Option<String>,
    title: Option<String>,
    output: &Output,
) -> Result<()> {
    if name.is_none() && avatar.is_none() && cover.is_none() && title.is_none() {
        output.message("Nothing to update: pass --name, --avatar, --cover, or --title.");
        return Ok(());
    }

    let update = ProfileUpdate {
        name,
        avatar,
        cover_image: cover,
        title,
    };

    store
        .update_profile(&update)
        .context("Failed to update profile")?;

    output.success("Profile updated");
    if let Some(user) = store.current_user() {
        output.print_user(user);
    }

    Ok(())
}
