use crate::Result;
use linkhub_engine::{ParsedRow, build_links};
use linkhub_types::Link;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Result of loading the links file
///
/// Loading never fails: a read or tokenizer error becomes an empty outcome
/// with `failure` set.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub rows: Vec<ParsedRow>,
    pub failure: Option<String>,
}

impl LoadOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn links(&self) -> Vec<Link> {
        self.rows.iter().map(|row| row.result.link().clone()).collect()
    }

    pub fn into_links(self) -> Vec<Link> {
        self.rows.into_iter().map(|row| row.result.into_link()).collect()
    }

    pub fn fallback_count(&self) -> usize {
        self.rows.iter().filter(|row| row.result.is_fallback()).count()
    }
}

/// Read and parse the links file at `path`.
pub fn load_links(path: &Path) -> LoadOutcome {
    match read_links(path) {
        Ok(rows) => {
            log::info!("loaded {} links from {}", rows.len(), path.display());
            LoadOutcome {
                rows,
                failure: None,
            }
        }
        Err(err) => {
            log::error!("failed to load links from {}: {}", path.display(), err);
            LoadOutcome::failed(err.to_string())
        }
    }
}

/// Load the links file on a background thread.
///
/// The outcome is sent once. If the receiver is gone by then, it is dropped.
pub fn spawn_load(path: PathBuf) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = load_links(&path);
        let _ = tx.send(outcome);
    });
    rx
}

fn read_links(path: &Path) -> Result<Vec<ParsedRow>> {
    let text = std::fs::read_to_string(path)?;
    Ok(build_links(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    const LINKS_CSV: &str = "id,title,url,icon,description,tags\n\
        1,GitHub,https://github.com,GithubIcon,,\n\
        2,Mail,mailto:x,MailIcon,Contact me,work;personal\n\
        3,Feed,https://feed.test,RssIcon,,";

    #[test]
    fn test_load_links_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("links.csv");
        std::fs::write(&path, LINKS_CSV)?;

        let outcome = load_links(&path);
        assert!(outcome.failure.is_none());
        assert_eq!(outcome.rows.len(), 3);
        assert_eq!(outcome.fallback_count(), 1);
        assert_eq!(outcome.into_links()[1].title, "Mail");
        Ok(())
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let outcome = load_links(Path::new("/definitely/not/here/links.csv"));
        assert!(outcome.rows.is_empty());
        assert!(outcome.failure.is_some());
    }

    #[test]
    fn test_invalid_utf8_degrades_to_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("links.csv");
        std::fs::write(&path, [0x69u8, 0x64, 0x0a, 0xff, 0xfe])?;

        let outcome = load_links(&path);
        assert!(outcome.rows.is_empty());
        assert!(outcome.failure.is_some());
        Ok(())
    }

    #[test]
    fn test_spawn_load_delivers_once() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("links.csv");
        std::fs::write(&path, LINKS_CSV)?;

        let rx = spawn_load(path);
        let outcome = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("load should finish");
        assert_eq!(outcome.links().len(), 3);
        Ok(())
    }
}
