// ABOUTME: Line-oriented command parser for the interactive kitchen session
// ABOUTME: Turns typed commands into kitchen events or session actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use super::events::KitchenEvent;
use kitchen_core::drag::{DropTarget, PointerId};
use thiserror::Error;

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands:
  fridge                         show the kitchen
  next | prev                    turn the fridge page
  add <id> | remove <id>         put an ingredient in or take it out of the basket
  counter <id> | uncounter <id>  stage an ingredient on the counter or take it off
  promote <id>                   move a counter ingredient into the basket
  drag <id> [pointer]            pick an ingredient up
  drop basket|counter|none [pointer]
  cancel [pointer]               put a dragged ingredient back
  clear                          empty basket and counter
  open <recipe_id> | close       recipe detail
  help | quit";

/// One parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Forward to the controller
    Event(KitchenEvent),
    /// Re-render the kitchen
    Show,
    /// Print the command reference
    Help,
    /// Leave the session
    Quit,
}

/// Typing mistakes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Unrecognized first word
    #[error("unknown command '{0}', type 'help' for the list")]
    UnknownCommand(String),
    /// Command needs an argument
    #[error("'{command}' needs {what}")]
    MissingArgument {
        /// Command typed
        command: &'static str,
        /// What was expected
        what: &'static str,
    },
    /// Pointer is not a number
    #[error("invalid pointer '{0}'")]
    InvalidPointer(String),
    /// Drop target is not basket, counter, or none
    #[error("invalid drop target '{0}', expected basket, counter, or none")]
    InvalidTarget(String),
}

fn required<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, InputError> {
    arg.ok_or(InputError::MissingArgument { command, what })
}

fn pointer(arg: Option<&str>) -> Result<PointerId, InputError> {
    arg.map_or(Ok(PointerId::default()), |raw| {
        raw.parse()
            .map(PointerId)
            .map_err(|_| InputError::InvalidPointer(raw.to_owned()))
    })
}

fn target(raw: &str) -> Result<DropTarget, InputError> {
    match raw.to_lowercase().as_str() {
        "basket" => Ok(DropTarget::Basket),
        "counter" => Ok(DropTarget::Counter),
        "none" | "nowhere" => Ok(DropTarget::Nowhere),
        _ => Err(InputError::InvalidTarget(raw.to_owned())),
    }
}

/// Parse one line; blank lines yield `None`
///
/// Ingredient ids are lowercased. The pointer defaults to 0.
///
/// # Errors
///
/// Returns an [`InputError`] describing the typing mistake
pub fn parse_input(line: &str) -> Result<Option<SessionInput>, InputError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    let second = words.next();
    let ingredient = |name: &'static str| {
        required(arg, name, "an ingredient id").map(str::to_lowercase)
    };

    let input = match command.to_lowercase().as_str() {
        "fridge" | "show" => SessionInput::Show,
        "help" | "?" => SessionInput::Help,
        "quit" | "exit" => SessionInput::Quit,
        "next" => SessionInput::Event(KitchenEvent::NextPage),
        "prev" => SessionInput::Event(KitchenEvent::PrevPage),
        "clear" => SessionInput::Event(KitchenEvent::Clear),
        "close" => SessionInput::Event(KitchenEvent::CloseRecipe),
        "add" => SessionInput::Event(KitchenEvent::Add(ingredient("add")?)),
        "remove" => SessionInput::Event(KitchenEvent::Remove(ingredient("remove")?)),
        "counter" => SessionInput::Event(KitchenEvent::PlaceOnCounter(ingredient("counter")?)),
        "uncounter" => {
            SessionInput::Event(KitchenEvent::RemoveFromCounter(ingredient("uncounter")?))
        }
        "promote" => SessionInput::Event(KitchenEvent::Promote(ingredient("promote")?)),
        "drag" => SessionInput::Event(KitchenEvent::DragStart {
            ingredient: ingredient("drag")?,
            pointer: pointer(second)?,
        }),
        "drop" => SessionInput::Event(KitchenEvent::DragEnd {
            target: target(required(arg, "drop", "a target")?)?,
            pointer: pointer(second)?,
        }),
        "cancel" => SessionInput::Event(KitchenEvent::DragCancel(pointer(arg)?)),
        "open" => SessionInput::Event(KitchenEvent::OpenRecipe(
            required(arg, "open", "a recipe id")?.to_owned(),
        )),
        other => return Err(InputError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(input))
}
