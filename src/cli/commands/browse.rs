use crate::cli::tui;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand;

impl BrowseCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<()> {
        tui::run_browser().await
    }
}

impl Default for BrowseCommand {
    fn default() -> Self {
        Self::new()
    }
}
