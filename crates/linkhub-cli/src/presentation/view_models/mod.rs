mod check;
mod links;
mod result;
mod theme;

pub use check::{CheckReportViewModel, CheckRowViewModel, RowStatus};
pub use links::{LinkListViewModel, LinkViewModel, PageViewModel};
pub use result::{CommandResultViewModel, Guidance};
pub use theme::{ThemeChangeViewModel, ThemeListViewModel, ThemeViewModel};
