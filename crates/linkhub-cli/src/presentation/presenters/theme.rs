use linkhub_types::{Theme, ThemeId};

use crate::presentation::view_models::{ThemeChangeViewModel, ThemeListViewModel, ThemeViewModel};

pub fn present_theme_list(current: ThemeId) -> ThemeListViewModel {
    ThemeListViewModel {
        themes: Theme::all()
            .iter()
            .map(|theme| ThemeViewModel {
                id: theme.id.to_string(),
                name: theme.name.to_string(),
                accent: theme.ring.to_string(),
                accent_rgb: (theme.ring.0, theme.ring.1, theme.ring.2),
                current: theme.id == current,
            })
            .collect(),
    }
}

pub fn present_theme_change(theme: ThemeId, previous: Option<ThemeId>) -> ThemeChangeViewModel {
    ThemeChangeViewModel {
        theme: theme.to_string(),
        previous: previous.map(|id| id.to_string()),
    }
}
