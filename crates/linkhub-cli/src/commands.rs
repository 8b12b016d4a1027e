use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{LogTarget, init_logging};
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.data_dir.as_deref(), cli.source)?;

    let command = cli.command.unwrap_or(Commands::Browse);
    let interactive = matches!(command, Commands::Browse) && std::io::stdout().is_terminal();

    let log_path = ctx.log_path();
    let target = if interactive {
        LogTarget::File(&log_path)
    } else {
        LogTarget::Stderr
    };
    init_logging(cli.log_level, target);
    log::debug!("data dir: {}", ctx.data_dir().display());

    match command {
        Commands::Browse => {
            if interactive {
                handlers::browse::handle(&ctx)
            } else {
                log::info!("stdout is not a terminal, printing links instead");
                handlers::list::handle(&ctx, &Default::default(), cli.format)
            }
        }
        Commands::List(args) => handlers::list::handle(&ctx, &args, cli.format),
        Commands::Check => handlers::check::handle(&ctx, cli.format),
        Commands::Theme { command } => handlers::theme::handle(&ctx, command, cli.format),
    }
}
