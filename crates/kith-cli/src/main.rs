//! kith CLI
//!
//! Thin presentation layer over the kith store: every subcommand calls
//! one store operation and renders the result.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use kith_core::{LikeTarget, Store};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "kith")]
#[command(about = "kith - a single-device demo social network")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the feed, newest posts first
    Feed {
        /// Show at most this many posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Create a post as the current user
    Post {
        /// Post text
        text: Option<String>,
        /// Image reference to attach
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Show one post with its comments
    Show {
        /// Post ID (full UUID or prefix)
        id: String,
    },
    /// Comment on a post as the current user
    Comment {
        /// Post ID (full UUID or prefix)
        post_id: String,
        /// Comment text
        text: String,
    },
    /// Toggle the current user's like on a post or comment
    Like {
        /// What kind of entity the id refers to
        #[arg(value_enum)]
        target: TargetKind,
        /// Target ID (full UUID or prefix)
        id: String,
    },
    /// Toggle friendship with another user
    Friend {
        /// User to befriend/unfriend (name or id prefix)
        user: String,
    },
    /// List the current user's friends
    Friends,
    /// Show or edit the current user's profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },
    /// Search users and posts
    Search {
        /// Search query (case-insensitive substring)
        query: String,
    },
    /// Show dataset status
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetKind {
    Post,
    Comment,
}

impl From<TargetKind> for LikeTarget {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Post => LikeTarget::Post,
            TargetKind::Comment => LikeTarget::Comment,
        }
    }
}

#[derive(Subcommand, Clone)]
enum ProfileCommands {
    /// Show the current user's profile
    Show,
    /// Update profile fields (omitted fields are kept)
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Avatar reference
        #[arg(long)]
        avatar: Option<String>,
        /// Cover image reference
        #[arg(long)]
        cover: Option<String>,
        /// Title / role line
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, seed_users, seed_posts)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config doesn't need the store (and must not trigger seeding)
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    // Opening the store seeds a fresh dataset on first run
    let mut store = Store::open()?;

    match cli.command {
        Commands::Feed { limit } => commands::feed::show(&store, limit, &output),
        Commands::Post { text, image } => {
            commands::post::create(&mut store, text, image, &output)
        }
        Commands::Show { id } => commands::post::show(&store, &id, &output),
        Commands::Comment { post_id, text } => {
            commands::comment::create(&mut store, &post_id, &text, &output)
        }
        Commands::Like { target, id } => {
            commands::like::toggle(&mut store, target.into(), &id, &output)
        }
        Commands::Friend { user } => commands::friend::toggle(&mut store, &user, &output),
        Commands::Friends => commands::friend::list(&store, &output),
        Commands::Profile { command } => handle_profile_command(command, &mut store, &output),
        Commands::Search { query } => commands::search::run(&store, &query, &output),
        Commands::Status => commands::status::show(&store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_profile_command(
    command: Option<ProfileCommands>,
    store: &mut Store,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ProfileCommands::Show) | None => commands::profile::show(store, output),
        Some(ProfileCommands::Set {
            name,
            avatar,
            cover,
            title,
        }) => commands::profile::set(store, name, avatar, cover, title, output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
