use std::sync::Arc;

use crate::error::GreetingError;
use crate::registry::{GreetingProvider, ProviderEntry, PROVIDERS};

pub const NAME: &str = "english";
pub const GREETING: &str = "Hello all!";

pub struct English;

impl GreetingProvider for English {
    fn greet(&self, input: &str) -> Result<String, GreetingError> {
        if input != NAME {
            return Err(GreetingError::UnrecognizedInput {
                provider: NAME,
                input: input.to_string(),
            });
        }
        Ok(GREETING.to_string())
    }
}

#[linkme::distributed_slice(PROVIDERS)]
static ENGLISH_PROVIDER: ProviderEntry = ProviderEntry {
    name: NAME,
    description: "Greets everyone in English",
    factory: || Arc::new(English),
};
