use crate::types::LogLevel;
use std::fs::OpenOptions;
use std::path::Path;

/// Where log records go
pub enum LogTarget<'a> {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal
    File(&'a Path),
}

/// Initialize the `log` facade. `RUST_LOG` still takes precedence per module.
pub fn init_logging(level: LogLevel, target: LogTarget<'_>) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.to_filter())
        .parse_default_env()
        .format_timestamp_secs();

    if let LogTarget::File(path) = target {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => {
                eprintln!("Warning: cannot open log file {}: {}", path.display(), err);
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    // A second initialization in the same process is a no-op
    let _ = builder.try_init();
}
