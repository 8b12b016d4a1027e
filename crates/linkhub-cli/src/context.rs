use anyhow::Result;
use linkhub_runtime::{Config, FilePreferences, HubSettings, resolve_workspace_path};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    source_override: Option<PathBuf>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: Option<&str>, source: Option<String>) -> Result<Self> {
        let data_dir = resolve_workspace_path(data_dir)?;
        Ok(Self {
            data_dir,
            source_override: source.map(PathBuf::from),
            config: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = Config::path_in(&self.data_dir);
            Ok(Config::load_from(&config_path)?)
        })
    }

    /// Links file: `--source` if given, else the configured source.
    pub fn source_path(&self) -> Result<PathBuf> {
        match &self.source_override {
            Some(path) => Ok(path.clone()),
            None => Ok(self.config()?.source_path(&self.data_dir)),
        }
    }

    pub fn settings(&self) -> Result<HubSettings> {
        Ok(HubSettings::from(self.config()?))
    }

    pub fn preferences(&self) -> FilePreferences {
        FilePreferences::open(FilePreferences::path_in(&self.data_dir))
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("linkhub.log")
    }
}
