//! Status command handler

use anyhow::Result;

use kith_core::{Config, Store};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let config = Config::load()?;
    let current = store.current_user();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "current_user": current.map(|u| u.id),
                    "data_file": config.dataset_path(),
                    "counts": {
                        "users": store.users().len(),
                        "posts": store.posts().len(),
                        "comments": store.comments().len()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            if let Some(user) = current {
                println!("{}", user.id);
            }
        }
        OutputFormat::Human => {
            println!("kith Status");
            println!("===========");
            println!();
            match current {
                Some(user) => println!("Signed in as: {} ({})", user.name, user.id),
                None => println!("Signed in as: (nobody)"),
            }
            println!();
            println!("Storage:");
            println!("  Dataset: {}", config.dataset_path().display());
            println!();
            println!("Contents:");
            println!("  Users:    {}", store.users().len());
            println!("  Posts:    {}", store.posts().len());
            println!("  Comments: {}", store.comments().len());
        }
    }

    Ok(())
}
