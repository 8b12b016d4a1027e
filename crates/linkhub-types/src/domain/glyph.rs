use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon variant shown next to a link
///
/// Selected by the `icon` column of the links file. Names that are not
/// recognized resolve to [`Glyph::Globe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Github,
    Twitter,
    Linkedin,
    #[default]
    Globe,
    Mail,
}

impl Glyph {
    pub const ALL: [Glyph; 5] = [
        Glyph::Github,
        Glyph::Twitter,
        Glyph::Linkedin,
        Glyph::Globe,
        Glyph::Mail,
    ];

    /// Look up a glyph by its column name (e.g. `GithubIcon`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.column_name() == name)
    }

    /// Like [`Glyph::from_name`], falling back to the default glyph.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn column_name(self) -> &'static str {
        match self {
            Glyph::Github => "GithubIcon",
            Glyph::Twitter => "TwitterIcon",
            Glyph::Linkedin => "LinkedinIcon",
            Glyph::Globe => "GlobeIcon",
            Glyph::Mail => "MailIcon",
        }
    }

    /// Single-cell symbol used by terminal renderers.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Github => "◆",
            Glyph::Twitter => "✦",
            Glyph::Linkedin => "▣",
            Glyph::Globe => "◍",
            Glyph::Mail => "✉",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Glyph::Github => "github",
            Glyph::Twitter => "twitter",
            Glyph::Linkedin => "linkedin",
            Glyph::Globe => "globe",
            Glyph::Mail => "mail",
        };
        write!(f, "{}", name)
    }
}
