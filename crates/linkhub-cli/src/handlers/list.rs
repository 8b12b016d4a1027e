use crate::args::ListArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_link_list;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Guidance, Renderer};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use linkhub_runtime::{Hub, load_links};

pub fn handle(ctx: &ExecutionContext, args: &ListArgs, format: OutputFormat) -> Result<()> {
    let mut settings = ctx.settings()?;
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            bail!("--page-size must be at least 1");
        }
        settings.page_size = page_size;
    }

    let source = ctx.source_path()?;
    let outcome = load_links(&source);

    let mut hub = Hub::new(settings, Box::new(ctx.preferences()));
    hub.resize(viewport_width(args));
    hub.links_loaded(outcome);
    hub.set_query(args.query.as_str());

    if !hub.go_to_page(args.page) {
        let total_pages = hub.view().page.total_pages;
        bail!("Page {} is out of range (1-{})", args.page, total_pages.max(1));
    }

    let view = hub.view();
    let view_model = present_link_list(&view, hub.links().len(), hub.load_failure());

    let mut result = CommandResultViewModel::new(view_model);
    if hub.load_failure().is_some() {
        result = result.with_suggestion(
            Guidance::new(format!(
                "Create {} with an id,title,url,icon,description,tags header",
                source.display()
            ))
            .with_command("linkhub check"),
        );
    } else if view.matches == 0 && !view.query.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Clear the query to see every link").with_command("linkhub list"),
        );
    } else if view.page.has_next() {
        result = result.with_suggestion(
            Guidance::new("Next page")
                .with_command(format!("linkhub list --paged --page {}", view.page.number + 1)),
        );
    }

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}

/// Width used to pick the viewport class.
///
/// Flags win; otherwise the terminal width, and unpaged output when stdout is
/// not a terminal.
fn viewport_width(args: &ListArgs) -> u16 {
    if args.paged {
        return 0;
    }
    if args.wide || !std::io::stdout().is_terminal() {
        return u16::MAX;
    }
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(width), _)| width)
        .unwrap_or(u16::MAX)
}
