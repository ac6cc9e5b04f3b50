// ABOUTME: recipe-kitchen CLI - admin editor and interactive kitchen over the recipe REST backend
// ABOUTME: Parses commands, sets up logging and configuration, and dispatches to command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors
//!
//! Usage:
//! ```bash
//! # Check the backend
//! recipe-kitchen health
//!
//! # Browse and inspect recipes
//! recipe-kitchen recipes list --search tomato --type main
//! recipe-kitchen recipes show pizza --format card
//!
//! # Create, edit, and delete
//! recipe-kitchen recipes add --name "Tomato Soup" --ingredient tomato:4: --step "Simmer"
//! recipe-kitchen recipes edit tomato_soup --servings 2
//! recipe-kitchen recipes delete tomato_soup
//!
//! # Interactive kitchen session
//! recipe-kitchen kitchen
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use recipe_kitchen::config::ClientConfig;
use recipe_kitchen::formatters::DisplayFormat;
use recipe_kitchen::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-kitchen",
    about = "Recipe kitchen client",
    long_about = "Manage recipes on a recipe REST backend and find recipes for the ingredients you have."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe API base URL (overrides `RECIPE_API_BASE`)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Check that the backend is up
    Health,

    /// Recipe management commands
    Recipes {
        #[command(subcommand)]
        action: RecipesCommand,
    },

    /// Interactive kitchen session on stdin
    Kitchen,
}

/// Optional recipe fields shared by add and edit
#[derive(Args, Debug, Default)]
pub struct RecipeFields {
    /// Course type (main, dessert, ...)
    #[arg(long = "type")]
    pub recipe_type: Option<String>,

    /// Number of servings
    #[arg(long)]
    pub servings: Option<String>,

    /// Preparation time
    #[arg(long)]
    pub prep: Option<String>,

    /// Total time
    #[arg(long)]
    pub total: Option<String>,

    /// Image filename (defaults to the recipe id plus .jpg)
    #[arg(long)]
    pub image: Option<String>,

    /// Ingredient as name:amount:unit (repeatable)
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Step text (repeatable, in order)
    #[arg(long = "step")]
    pub steps: Vec<String>,

    /// Equipment (repeatable)
    #[arg(long = "material")]
    pub materials: Vec<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipesCommand {
    /// List recipes
    List {
        /// Only recipes whose name or ingredients contain this text
        #[arg(long)]
        search: Option<String>,

        /// Only recipes of this type
        #[arg(long = "type")]
        recipe_type: Option<String>,
    },

    /// Show one recipe
    Show {
        /// Recipe id
        id: String,

        /// simple, ingredients, steps, materials, full, card, json, or detail
        #[arg(long, default_value_t = DisplayFormat::Detail)]
        format: DisplayFormat,
    },

    /// Create a recipe
    Add {
        /// Recipe name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Edit a recipe; unspecified options keep their current values
    Edit {
        /// Recipe id
        id: String,

        /// New name (the id does not change)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init().context("Failed to initialize logging")?;

    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;
    if let Some(api_base) = cli.api_base.as_deref() {
        config = config
            .with_api_base(api_base)
            .context("Invalid --api-base")?;
    }
    debug!(api_base = %config.api_base, "Configuration loaded");

    match cli.command {
        Command::Health => commands::health::check(&config).await?,
        Command::Recipes { action } => match action {
            RecipesCommand::List {
                search,
                recipe_type,
            } => {
                commands::recipes::list(&config, search.as_deref(), recipe_type.as_deref())
                    .await?;
            }
            RecipesCommand::Show { id, format } => {
                commands::recipes::show(&config, &id, format).await?;
            }
            RecipesCommand::Add { name, fields } => {
                commands::recipes::add(&config, name, fields).await?;
            }
            RecipesCommand::Edit { id, name, fields } => {
                commands::recipes::edit(&config, &id, name, fields).await?;
            }
            RecipesCommand::Delete { id, yes } => {
                commands::recipes::delete(&config, &id, yes).await?;
            }
        },
        Command::Kitchen => commands::kitchen::run(&config).await?,
    }

    Ok(())
}
