//! Built-in greeting providers.
//!
//! Each module submits its own entries to [`crate::registry::PROVIDERS`].

pub mod english;
pub mod hindi;
pub mod tamil;
