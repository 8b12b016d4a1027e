use crate::context::ExecutionContext;
use crate::presentation::tui::{self, AppState};
use anyhow::Result;
use linkhub_runtime::{Hub, spawn_load};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let source = ctx.source_path()?;
    log::info!("browsing {}", source.display());

    let hub = Hub::new(ctx.settings()?, Box::new(ctx.preferences()));
    let rx = spawn_load(source);
    let app_state = AppState::new(hub, config.name.clone(), config.tagline.clone());

    tui::run(app_state, rx)
}
