//! Hindi greetings.
//!
//! Two keys are served: `hindi` says namaste, while `hindi-english` writes the
//! English "hello" in Devanagari.

use std::sync::Arc;

use crate::error::GreetingError;
use crate::registry::{GreetingProvider, ProviderEntry, PROVIDERS};

pub const NAME: &str = "hindi";
pub const ENGLISH_NAME: &str = "hindi-english";

pub const GREETING: &str = "नमस्ते";
pub const ENGLISH_GREETING: &str = "हेलो";

pub struct Hindi;

/// "Hello" transliterated into Devanagari.
pub struct HindiEnglish;

fn expect(provider: &'static str, input: &str, greeting: &str) -> Result<String, GreetingError> {
    if input == provider {
        Ok(greeting.to_string())
    } else {
        Err(GreetingError::UnrecognizedInput {
            provider,
            input: input.to_string(),
        })
    }
}

impl GreetingProvider for Hindi {
    fn greet(&self, input: &str) -> Result<String, GreetingError> {
        expect(NAME, input, GREETING)
    }
}

impl GreetingProvider for HindiEnglish {
    fn greet(&self, input: &str) -> Result<String, GreetingError> {
        expect(ENGLISH_NAME, input, ENGLISH_GREETING)
    }
}

#[linkme::distributed_slice(PROVIDERS)]
static HINDI_PROVIDER: ProviderEntry = ProviderEntry {
    name: NAME,
    description: "Namaste, in Devanagari",
    factory: || Arc::new(Hindi),
};

#[linkme::distributed_slice(PROVIDERS)]
static HINDI_ENGLISH_PROVIDER: ProviderEntry = ProviderEntry {
    name: ENGLISH_NAME,
    description: "English \"hello\" written in Devanagari",
    factory: || Arc::new(HindiEnglish),
};
