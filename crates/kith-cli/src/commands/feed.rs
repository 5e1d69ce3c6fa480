//! Feed command handler

use anyhow::Result;

use kith_core::Store;

use crate::output::Output;

/// Show the feed, newest posts first
///
/// The store keeps no ordering guarantee on its collection; the
/// newest-first sort happens here, at read time.
pub fn show(store: &Store, limit: Option<usize>, output: &Output) -> Result<()> {
    let mut posts: Vec<_> = store.posts().iter().collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if let Some(limit) = limit {
        posts.truncate(limit);
    }

    output.print_feed(&posts, store);
    Ok(())
}
