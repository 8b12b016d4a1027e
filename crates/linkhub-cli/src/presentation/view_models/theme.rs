use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ThemeViewModel {
    pub id: String,
    pub name: String,
    pub accent: String,
    #[serde(skip_serializing)]
    pub accent_rgb: (u8, u8, u8),
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeListViewModel {
    pub themes: Vec<ThemeViewModel>,
}

impl fmt::Display for ThemeListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for theme in &self.themes {
            let (r, g, b) = theme.accent_rgb;
            let marker = if theme.current { "●" } else { "○" };
            writeln!(
                f,
                "{} {:<8} {}",
                marker.truecolor(r, g, b),
                theme.id,
                theme.accent.bright_black()
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeChangeViewModel {
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl fmt::Display for ThemeChangeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.previous {
            Some(previous) if previous != &self.theme => {
                writeln!(f, "Theme: {} → {}", previous, self.theme.bold())
            }
            _ => writeln!(f, "Theme: {}", self.theme.bold()),
        }
    }
}
