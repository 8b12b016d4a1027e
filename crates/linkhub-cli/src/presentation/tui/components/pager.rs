use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::presentation::tui::app::AppState;
use crate::presentation::tui::palette::{color, MUTED};

/// `‹ current / total ›`, only drawn when there is more than one page
pub(crate) struct PagerComponent;

impl PagerComponent {
    pub(crate) fn is_visible(state: &AppState) -> bool {
        let page = state.hub.view().page;
        page.paged && page.total_pages > 1
    }
}

impl Component for PagerComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let view = state.hub.view();
        let page = view.page;
        let accent = color(view.theme.button_fg);

        let arrow = |enabled: bool, glyph: &'static str| {
            if enabled {
                Span::styled(glyph, Style::default().fg(accent))
            } else {
                Span::styled(glyph, Style::default().fg(MUTED))
            }
        };

        let line = Line::from(vec![
            arrow(page.has_previous(), "‹ "),
            Span::styled(
                format!("{} / {}", page.number, page.total_pages),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            arrow(page.has_next(), " ›"),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
