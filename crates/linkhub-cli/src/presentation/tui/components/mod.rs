use ratatui::{layout::Rect, Frame};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod cards;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod pager;

pub(crate) use cards::CardsComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use pager::PagerComponent;
