use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "linkhub")]
#[command(about = "Browse, search and page through your links", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml, preferences and the default links file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Links file to read instead of the configured source
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive link hub (default)
    Browse,

    /// Print links matching a query
    List(ListArgs),

    /// Report rows of the links file that loaded with fallbacks
    Check,

    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against titles, descriptions and tags
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Page to print in paged mode
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Links per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Force paged output regardless of terminal width
    #[arg(long, group = "viewport")]
    pub paged: bool,

    /// Force unpaged output regardless of terminal width
    #[arg(long, group = "viewport")]
    pub wide: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: None,
            paged: false,
            wide: false,
        }
    }
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// List available themes
    List,

    /// Show the stored theme
    Show,

    /// Store a new theme
    Set {
        /// cyan, rose, emerald or violet
        id: String,
    },
}
