use chrono::Datelike;
use linkhub_types::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::tui::app::AppState;
use crate::presentation::tui::palette::{color, MUTED};

pub(crate) const FOOTER_HEIGHT: u16 = 3;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let current = state.hub.theme();

        let mut swatches = Vec::new();
        for theme in Theme::all() {
            let (marker, style) = if theme.id == current {
                ("●", Style::default().add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED))
            };
            swatches.push(Span::styled(marker, Style::default().fg(color(theme.ring))));
            swatches.push(Span::styled(format!(" {}  ", theme.id), style));
        }

        let bottom = match &state.status_message {
            Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(MUTED))),
            None => Line::from(Span::styled(
                format!("© {} {}", state.now.year(), state.name),
                Style::default().fg(MUTED),
            )),
        };

        let footer = Paragraph::new(vec![Line::from(swatches), bottom])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(MUTED)),
            );

        f.render_widget(footer, area);
    }
}
