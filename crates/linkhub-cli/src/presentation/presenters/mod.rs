mod check;
mod links;
mod theme;

pub use check::present_check_report;
pub use links::{present_link, present_link_list};
pub use theme::{present_theme_change, present_theme_list};
