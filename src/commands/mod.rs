pub mod greet;
pub mod list;

use crate::cli::{Args, Command};
use crate::error::CommandResult;
use crate::providers::{english, hindi, tamil};
use crate::registry::Registry;

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args, registry: &Registry) -> CommandResult<String> {
    match &args.command {
        Command::English => greet::message(registry, english::NAME),
        Command::Hindi { english: false } => greet::message(registry, hindi::NAME),
        Command::Hindi { english: true } => greet::message(registry, hindi::ENGLISH_NAME),
        Command::Tamil => greet::message(registry, tamil::NAME),
        Command::Greet { name } => greet::message(registry, name),
        Command::List { json } => Ok(list::render(registry, *json)),
    }
}
