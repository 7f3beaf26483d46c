use clap::{Parser, Subcommand};

/// Command-line arguments for the greetings CLI.
#[derive(Debug, Parser)]
#[command(
    name = "greetings",
    version,
    about = "Say hello in a handful of languages.",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Greet everyone in English.
    English,
    /// Say namaste in Hindi.
    Hindi {
        /// Write "hello" in Hindi instead.
        #[arg(short, long)]
        english: bool,
    },
    /// Say vanakkam in Tamil.
    Tamil,
    /// Greet using any registered provider.
    Greet {
        /// Provider to resolve.
        #[arg(env = "GREETINGS_LANGUAGE", default_value = "english")]
        name: String,
    },
    /// List registered providers.
    List {
        /// Print the listing as JSON.
        #[arg(long)]
        json: bool,
    },
}
