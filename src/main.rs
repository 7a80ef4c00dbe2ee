use clap::Parser;
use patternbook::{
    cli::{
        commands::{browse::BrowseCommand, list::ListCommand, show::ShowCommand, CommandHandler},
        Cli, Commands,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr and stay silent unless RUST_LOG is set, so they
    // never garble the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let command = BrowseCommand::new();
            command.execute().await?;
        }
        Commands::List { lang, format } => {
            let command = ListCommand::new(lang, format);
            command.execute()?;
        }
        Commands::Show {
            id,
            lang,
            tab,
            format,
        } => {
            let command = ShowCommand::new(id, lang, tab, format);
            command.execute()?;
        }
    }

    Ok(())
}
