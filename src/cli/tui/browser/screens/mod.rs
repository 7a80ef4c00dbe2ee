//! Render functions for the browser panes, one module per pane.

pub mod chrome;
pub mod detail;
pub mod examples;
pub mod list;
