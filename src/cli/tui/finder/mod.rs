//! Interactive finder hosting all five modes behind a mode switcher

pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use crate::cli::commands::FinderContext;
use crate::Result;

/// Entry point for the interactive finder
pub async fn run(context: FinderContext) -> Result<()> {
    let app = app::App::new(context);
    app.run().await
}
