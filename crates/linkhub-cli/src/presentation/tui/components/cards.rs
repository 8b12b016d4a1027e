use linkhub_runtime::ViewStatus;
use linkhub_types::{Link, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::presentation::tui::app::AppState;
use crate::presentation::tui::palette::{color, MUTED, TEXT};

/// The link cards of the current page
pub(crate) struct CardsComponent;

impl Component for CardsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let view = state.hub.view();
        let theme = view.theme;

        let message = match view.status {
            ViewStatus::Loading => Some("Loading links..."),
            ViewStatus::Empty => Some("No links found."),
            ViewStatus::Showing => None,
        };
        if let Some(message) = message {
            let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(MUTED)))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }

        state.selected = state.selected.min(view.links.len().saturating_sub(1));
        let cards: Vec<(Vec<Line<'static>>, bool)> = view
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let expanded = state.is_expanded(link);
                (card_lines(link, theme, expanded), index == state.selected)
            })
            .collect();
        let heights: Vec<u16> = cards
            .iter()
            .map(|(lines, _)| lines.len() as u16 + 2)
            .collect();

        let scroll = keep_visible(&heights, state.selected, state.scroll, area.height);
        state.scroll = scroll;

        let mut y = area.y;
        let bottom = area.y + area.height;
        for ((lines, focused), height) in cards.into_iter().zip(heights).skip(scroll) {
            if y >= bottom {
                break;
            }
            let height = height.min(bottom - y);
            let border = if focused {
                theme.card_focus_border
            } else {
                theme.card_border
            };
            let card = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color(border)))
                    .style(Style::default().bg(color(theme.card_bg))),
            );
            f.render_widget(card, Rect::new(area.x, y, area.width, height));
            y += height;
        }
    }
}

fn card_lines(link: &Link, theme: &Theme, expanded: bool) -> Vec<Line<'static>> {
    let chevron = match (link.has_details(), expanded) {
        (false, _) => "  ",
        (true, false) => "▸ ",
        (true, true) => "▾ ",
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(chevron, Style::default().fg(MUTED)),
        Span::styled(
            format!("{} ", link.icon.symbol()),
            Style::default().fg(color(theme.icon_accent)),
        ),
        Span::styled(
            link.title.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
    ])];

    if !expanded {
        return lines;
    }

    if let Some(description) = &link.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(TEXT),
        )));
    }

    if !link.tags().is_empty() {
        let chip = Style::default()
            .fg(color(theme.tag_fg))
            .bg(color(theme.tag_bg));
        let mut spans = Vec::new();
        for tag in link.tags() {
            spans.push(Span::styled(format!(" {} ", tag), chip));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("↗ {}", link.url),
        Style::default().fg(color(theme.button_fg)),
    )));

    lines
}

/// First card to draw so that `selected` fits inside `available` rows.
///
/// Walks back from the selection, never past the current `scroll`.
fn keep_visible(heights: &[u16], selected: usize, scroll: usize, available: u16) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let scroll = scroll.min(selected);

    let mut first = selected;
    let mut used = heights.get(selected).map_or(0, |&height| u32::from(height));
    while first > scroll {
        let with_previous = used + u32::from(heights[first - 1]);
        if with_previous > u32::from(available) {
            break;
        }
        used = with_previous;
        first -= 1;
    }
    first
}
