/// Interactive catalog browser implementation
pub mod app;
pub mod clipboard;
pub mod events;
pub mod highlight;
pub mod screens;
pub mod state;
pub mod theme;

use crate::Result;

/// Entry point for the browser
pub async fn run() -> Result<()> {
    let app = app::App::new();
    app.run().await
}
