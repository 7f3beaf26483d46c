use thiserror::Error;

pub type CommandResult<T> = Result<T, GreetingError>;

/// Recoverable failures reported while resolving a greeting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GreetingError {
    #[error("no provider registered with name {0}")]
    NoProvider(String),
    #[error("unrecognized input {input} for provider {provider}")]
    UnrecognizedInput {
        provider: &'static str,
        input: String,
    },
}

/// Problems with the provider set itself, found while populating a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a provider object is required for {0}, but none was supplied")]
    MissingProvider(String),
    #[error("register called twice for provider name {0}")]
    DuplicateProvider(String),
}
