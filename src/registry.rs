//! Name-to-provider registry for greetings.
//!
//! Providers submit a [`ProviderEntry`] to the [`PROVIDERS`] slice at link
//! time. A [`Registry`] is then built explicitly from those entries and
//! passed to whoever needs to resolve a greeting.

use std::{collections::HashMap, sync::Arc};

use serde::Serialize;

use crate::error::{GreetingError, RegistryError};

/// A named unit that produces a greeting for the input it recognises.
pub trait GreetingProvider {
    fn greet(&self, input: &str) -> Result<String, GreetingError>;
}

/// Link-time registration record for a provider.
pub struct ProviderEntry {
    /// Key the provider is resolved by (e.g. "english", "tamil").
    pub name: &'static str,
    /// Human-readable description shown by `list`.
    pub description: &'static str,
    pub factory: fn() -> Arc<dyn GreetingProvider>,
}

#[linkme::distributed_slice]
pub static PROVIDERS: [ProviderEntry] = [..];

/// Listing record for a registered provider.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
}

#[derive(Default)]
pub struct Registry {
    providers: HashMap<String, Arc<dyn GreetingProvider>>,
    descriptions: HashMap<String, &'static str>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from every provider linked into the binary.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_entries(&PROVIDERS)
    }

    /// Builds a registry from `entries`, stopping at the first configuration error.
    pub fn from_entries(entries: &[ProviderEntry]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry.name, Some((entry.factory)()))?;
            registry.descriptions.insert(entry.name.to_string(), entry.description);
        }
        Ok(registry)
    }

    /// Inserts `provider` under `name`.
    ///
    /// `None` and names that are already taken are configuration errors; the
    /// registry is left unchanged when either is returned.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: Option<Arc<dyn GreetingProvider>>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let Some(provider) = provider else {
            return Err(RegistryError::MissingProvider(name));
        };
        if self.providers.contains_key(&name) {
            return Err(RegistryError::DuplicateProvider(name));
        }

        tracing::debug!(target: "greetings::registry", provider = %name, "registered provider");
        self.providers.insert(name, provider);
        Ok(())
    }

    /// Looks up `name` and asks the matching provider to greet it.
    pub fn resolve(&self, name: &str) -> Result<String, GreetingError> {
        let Some(provider) = self.providers.get(name) else {
            tracing::warn!(target: "greetings::registry", provider = %name, "no provider registered");
            return Err(GreetingError::NoProvider(name.to_string()));
        };

        tracing::debug!(target: "greetings::registry", provider = %name, "resolving greeting");
        provider.greet(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn list(&self) -> Vec<ProviderInfo> {
        self.names()
            .into_iter()
            .map(|name| ProviderInfo {
                name: name.to_string(),
                description: self
                    .descriptions
                    .get(name)
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    impl GreetingProvider for Echo {
        fn greet(&self, input: &str) -> Result<String, GreetingError> {
            if input == self.0 {
                Ok(format!("hi from {input}"))
            } else {
                Err(GreetingError::UnrecognizedInput {
                    provider: self.0,
                    input: input.to_string(),
                })
            }
        }
    }

    fn echo(name: &'static str) -> Option<Arc<dyn GreetingProvider>> {
        Some(Arc::new(Echo(name)))
    }

    #[test]
    fn resolves_registered_provider() {
        let mut registry = Registry::new();
        registry.register("echo", echo("echo")).unwrap();

        assert_eq!(registry.resolve("echo").unwrap(), "hi from echo");
    }

    #[test]
    fn resolve_is_repeatable() {
        let mut registry = Registry::new();
        registry.register("echo", echo("echo")).unwrap();

        let first = registry.resolve("echo").unwrap();
        let second = registry.resolve("echo").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_name_is_reported() {
        let registry = Registry::new();
        let err = registry.resolve("hindi").unwrap_err();

        assert_eq!(err, GreetingError::NoProvider("hindi".into()));
        assert_eq!(err.to_string(), "no provider registered with name hindi");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = Registry::new();
        registry.register("echo", echo("echo")).unwrap();

        let err = registry.register("echo", echo("echo")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateProvider("echo".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn missing_provider_is_rejected() {
        let mut registry = Registry::new();
        let err = registry.register("echo", None).unwrap_err();

        assert_eq!(err, RegistryError::MissingProvider("echo".into()));
        assert!(registry.is_empty());
    }

    #[test]
    fn from_entries_stops_on_duplicate() {
        let entries = [
            ProviderEntry {
                name: "echo",
                description: "first",
                factory: || Arc::new(Echo("echo")),
            },
            ProviderEntry {
                name: "echo",
                description: "second",
                factory: || Arc::new(Echo("echo")),
            },
        ];

        let err = Registry::from_entries(&entries).err().unwrap();
        assert_eq!(err, RegistryError::DuplicateProvider("echo".into()));
    }

    #[test]
    fn list_is_sorted_with_descriptions() {
        let entries = [
            ProviderEntry {
                name: "zulu",
                description: "last",
                factory: || Arc::new(Echo("zulu")),
            },
            ProviderEntry {
                name: "alpha",
                description: "first",
                factory: || Arc::new(Echo("alpha")),
            },
        ];
        let mut registry = Registry::from_entries(&entries).unwrap();
        registry.register("mike", echo("mike")).unwrap();

        let names: Vec<_> = registry.list().into_iter().map(|info| info.name).collect();
        assert_eq!(names, ["alpha", "mike", "zulu"]);
        assert_eq!(registry.list()[0].description, "first");
        assert_eq!(registry.list()[1].description, "");
    }

    #[test]
    fn builtin_registry_holds_linked_providers() {
        let registry = Registry::builtin().unwrap();

        assert_eq!(registry.names(), ["english", "hindi", "hindi-english", "tamil"]);
    }
}
