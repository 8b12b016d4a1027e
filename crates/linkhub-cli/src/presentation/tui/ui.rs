use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::AppState;
use super::components::footer::FOOTER_HEIGHT;
use super::components::header::HEADER_HEIGHT;
use super::components::{
    CardsComponent, Component, FooterComponent, HeaderComponent, PagerComponent,
};
use super::palette::color;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let theme = state.hub.view().theme;
    f.render_widget(
        Block::default().style(Style::default().bg(color(theme.background))),
        f.area(),
    );

    let pager_height = if PagerComponent::is_visible(state) { 1 } else { 0 };

    let [header_area, cards_area, pager_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(pager_height),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(f.area());

    HeaderComponent.render(f, header_area, state);
    CardsComponent.render(f, cards_area, state);
    if pager_height > 0 {
        PagerComponent.render(f, pager_area, state);
    }
    FooterComponent.render(f, footer_area, state);
}
