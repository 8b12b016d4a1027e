use linkhub_engine::RowWarning;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Ok,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckRowViewModel {
    pub line: u64,
    pub id: Option<i64>,
    pub title: String,
    pub status: RowStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RowWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReportViewModel {
    pub source: String,
    pub rows: Vec<CheckRowViewModel>,
    pub ok: usize,
    pub fallback: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl fmt::Display for CheckReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "Source:".bold(), self.source)?;

        if let Some(err) = &self.load_error {
            writeln!(f, "{} {}", "✗ could not load:".red(), err)?;
            return Ok(());
        }

        for row in &self.rows {
            let label = if row.title.is_empty() {
                "(untitled)"
            } else {
                row.title.as_str()
            };
            match row.status {
                RowStatus::Ok => {
                    writeln!(f, "  {} line {:>3}  {}", "✓".green(), row.line, label)?;
                }
                RowStatus::Fallback => {
                    writeln!(f, "  {} line {:>3}  {}", "!".yellow(), row.line, label)?;
                    for warning in &row.warnings {
                        writeln!(f, "      {}", warning.to_string().yellow())?;
                    }
                }
            }
        }

        writeln!(
            f,
            "{} ok, {} with fallbacks",
            self.ok.to_string().green(),
            self.fallback.to_string().yellow()
        )
    }
}
