use crate::args::ThemeCommand;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_theme_change, present_theme_list};
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Guidance, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use linkhub_runtime::{load_theme, save_theme};
use linkhub_types::ThemeId;

pub fn handle(ctx: &ExecutionContext, command: ThemeCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format == OutputFormat::Json);
    let mut preferences = ctx.preferences();
    let current = load_theme(&preferences);

    match command {
        ThemeCommand::List => {
            let result = CommandResultViewModel::new(present_theme_list(current))
                .with_suggestion(Guidance::new("Switch theme").with_command("linkhub theme set <id>"));
            renderer.render(result)
        }
        ThemeCommand::Show => {
            renderer.render(CommandResultViewModel::new(present_theme_change(current, None)))
        }
        ThemeCommand::Set { id } => {
            let theme: ThemeId = id.parse()?;
            save_theme(&mut preferences, theme)?;
            log::info!("theme {} -> {}", current, theme);
            renderer.render(CommandResultViewModel::new(present_theme_change(
                theme,
                Some(current),
            )))
        }
    }
}
