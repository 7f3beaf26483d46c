use std::sync::Arc;

use crate::error::GreetingError;
use crate::registry::{GreetingProvider, ProviderEntry, PROVIDERS};

pub const NAME: &str = "tamil";
pub const GREETING: &str = "வணக்கம்";

pub struct Tamil;

impl GreetingProvider for Tamil {
    fn greet(&self, input: &str) -> Result<String, GreetingError> {
        match input {
            NAME => Ok(GREETING.to_string()),
            other => Err(GreetingError::UnrecognizedInput {
                provider: NAME,
                input: other.to_string(),
            }),
        }
    }
}

#[linkme::distributed_slice(PROVIDERS)]
static TAMIL_PROVIDER: ProviderEntry = ProviderEntry {
    name: NAME,
    description: "Vanakkam, in Tamil script",
    factory: || Arc::new(Tamil),
};
