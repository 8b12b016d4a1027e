use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct LinkViewModel {
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub icon: String,
    #[serde(skip_serializing)]
    pub symbol: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub number: usize,
    pub total_pages: usize,
    pub paged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkListViewModel {
    pub links: Vec<LinkViewModel>,
    pub page: PageViewModel,
    /// Links matching the query across all pages
    pub matches: usize,
    /// Links loaded from the source
    pub total: usize,
    pub query: String,
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl fmt::Display for LinkListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.links.is_empty() {
            writeln!(f, "{}", "No links found.".bright_black())?;
            return Ok(());
        }

        for link in &self.links {
            writeln!(f, "{} {}  {}", link.symbol, link.title.bold(), link.url.cyan())?;
            if let Some(description) = &link.description {
                writeln!(f, "    {}", description)?;
            }
            if !link.tags.is_empty() {
                let tags: Vec<String> = link.tags.iter().map(|tag| format!("#{}", tag)).collect();
                writeln!(f, "    {}", tags.join(" ").bright_black())?;
            }
        }

        if self.page.paged {
            writeln!(
                f,
                "{}",
                format!(
                    "Page {} / {} ({} matches)",
                    self.page.number, self.page.total_pages, self.matches
                )
                .bright_black()
            )?;
        }

        Ok(())
    }
}
