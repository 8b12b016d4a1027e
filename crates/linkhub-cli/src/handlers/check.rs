use crate::context::ExecutionContext;
use crate::presentation::presenters::present_check_report;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Guidance, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use linkhub_runtime::load_links;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let source = ctx.source_path()?;
    let outcome = load_links(&source);
    let report = present_check_report(&source, &outcome);

    let mut result = CommandResultViewModel::new(report);
    if outcome.failure.is_some() {
        result = result.with_suggestion(
            Guidance::new("Point at another links file")
                .with_command("linkhub --source <path> check"),
        );
    } else if outcome.fallback_count() > 0 {
        result = result.with_suggestion(Guidance::new(
            "Known icons: GithubIcon, TwitterIcon, LinkedinIcon, GlobeIcon, MailIcon",
        ));
    }

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
