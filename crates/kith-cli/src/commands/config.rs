//! Config command handlers

use anyhow::{bail, Context, Result};

use kith_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "seed_users": config.seed_users,
                    "seed_posts": config.seed_posts
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:   {}", config.data_dir.display());
            println!("  seed_users: {}", config.seed_users);
            println!("  seed_posts: {}", config.seed_posts);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "seed_users" => {
            config.seed_users = value
                .parse()
                .context("Invalid value for seed_users. Use a number.")?;
        }
        "seed_posts" => {
            config.seed_posts = value
                .parse()
                .context("Invalid value for seed_posts. Use a number.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, seed_users, seed_posts",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
