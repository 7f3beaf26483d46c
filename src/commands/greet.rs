use crate::error::CommandResult;
use crate::registry::Registry;

/// Returns the greeting registered under `name`.
pub fn message(registry: &Registry, name: &str) -> CommandResult<String> {
    registry.resolve(name)
}
