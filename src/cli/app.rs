use clap::{Parser, Subcommand};

/// Patternbook: a terminal reference for software design patterns
#[derive(Parser)]
#[command(name = "patternbook")]
#[command(version = "0.1.0")]
#[command(about = "Browse design patterns with bilingual notes and .NET/React code samples")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive catalog browser (the default)
    Browse,

    /// Prints the catalog
    List {
        /// Display language (es, en)
        #[arg(short, long, default_value = "es")]
        lang: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Prints one pattern
    Show {
        /// Pattern id; unknown ids fall back to the first pattern
        id: String,

        /// Display language (es, en)
        #[arg(short, long, default_value = "es")]
        lang: String,

        /// Which content to print (about, dotnet, react)
        #[arg(short, long, default_value = "about")]
        tab: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
