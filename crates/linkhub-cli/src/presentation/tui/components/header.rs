use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::tui::app::AppState;
use crate::presentation::tui::palette::{color, MUTED, TEXT};

pub(crate) const HEADER_HEIGHT: u16 = 5;

/// Title, tagline, clock and the search box
pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let theme = state.hub.view().theme;
        let [title_area, search_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(3)]).areas(area);

        let clock = state.now.format("%H:%M:%S").to_string();
        let [name_area, clock_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(clock.len() as u16 + 1),
        ])
        .areas(title_area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", state.name),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", state.tagline),
                Style::default().fg(MUTED),
            )),
        ])
        .style(Style::default().bg(color(theme.header_bg)));
        f.render_widget(title, name_area);

        let clock = Paragraph::new(Span::styled(clock, Style::default().fg(color(theme.ring))))
            .style(Style::default().bg(color(theme.header_bg)));
        f.render_widget(clock, clock_area);

        let query = state.hub.query();
        let input = if query.is_empty() {
            Line::from(Span::styled("Type to search", Style::default().fg(MUTED)))
        } else {
            Line::from(vec![
                Span::styled(query.to_string(), Style::default().fg(TEXT)),
                Span::styled("▏", Style::default().fg(color(theme.ring))),
            ])
        };
        let search = Paragraph::new(input).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme.ring))),
        );
        f.render_widget(search, search_area);
    }
}
