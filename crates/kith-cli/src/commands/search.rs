//! Search command handler

use anyhow::Result;

use kith_core::Store;

use crate::output::Output;

/// Search users and posts
///
/// An empty query would match everything; guard it here rather than in
/// the store.
pub fn run(store: &Store, query: &str, output: &Output) -> Result<()> {
    if query.trim().is_empty() {
        output.message("Empty query.");
        return Ok(());
    }

    let results = store.search(query);
    output.print_results(&results, store);
    Ok(())
}
