// ABOUTME: Interactive kitchen session for recipe-kitchen
// ABOUTME: Reads commands from stdin, drives the kitchen controller, and re-renders after changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use anyhow::{Context, Result};
use kitchen_core::catalog::IngredientCatalog;
use kitchen_core::state::KitchenState;
use recipe_kitchen::api::{HttpRecipeApi, RecipeApi};
use recipe_kitchen::config::ClientConfig;
use recipe_kitchen::formatters::render_kitchen;
use recipe_kitchen::kitchen::{parse_input, KitchenController, SessionInput, HELP};
use recipe_kitchen::services::RecipeFinder;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::helpers::display::{print_prompt, print_view};

/// Run the session until `quit` or end of input
pub async fn run(config: &ClientConfig) -> Result<()> {
    let api: Arc<dyn RecipeApi> =
        Arc::new(HttpRecipeApi::new(config).context("Failed to build HTTP client")?);
    let mut finder = RecipeFinder::new(api);
    let cached = finder.warm_cache().await;
    info!(cached, "Kitchen session started");

    let state = KitchenState::new(IngredientCatalog::builtin(), config.items_per_page);
    let mut controller = KitchenController::new(state, finder);
    print_view(&render_kitchen(&controller.view()));
    print_view(HELP);

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print_prompt();
        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        match parse_input(&line) {
            Ok(None) => {}
            Ok(Some(SessionInput::Quit)) => break,
            Ok(Some(SessionInput::Help)) => print_view(HELP),
            Ok(Some(SessionInput::Show)) => print_view(&render_kitchen(&controller.view())),
            Ok(Some(SessionInput::Event(event))) => match controller.handle(event).await {
                Ok(change) if change.needs_render() => {
                    print_view(&render_kitchen(&controller.view()));
                }
                Ok(_) => {}
                Err(e) => eprintln!("{e}"),
            },
            Err(e) => eprintln!("{e}"),
        }
    }

    info!(
        selected = controller.state().basket().len(),
        "Kitchen session ended"
    );
    Ok(())
}
