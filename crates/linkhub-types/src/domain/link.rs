use serde::{Deserialize, Serialize};

use super::glyph::Glyph;

/// One parsed link entry
///
/// Built once when the links file is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Numeric id from the `id` column. `None` when the column did not hold an integer.
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub icon: Glyph,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Link {
    pub fn new(id: i64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            url: url.into(),
            icon: Glyph::default(),
            description: None,
            tags: None,
        }
    }

    pub fn with_icon(mut self, icon: Glyph) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Tags as a slice, empty when the link has none.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Whether the card has anything to show beyond its title.
    pub fn has_details(&self) -> bool {
        self.description.is_some() || !self.tags().is_empty()
    }
}
