/// Terminal User Interface module for the interactive browser
pub mod browser;

use crate::Result;

/// Run the interactive pattern browser
pub async fn run_browser() -> Result<()> {
    browser::run().await
}
