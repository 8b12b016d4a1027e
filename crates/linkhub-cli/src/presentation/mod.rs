//! # Presentation Layer
//!
//! Output for the CLI, kept apart from the hub state in `linkhub_runtime`.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts. No calculation logic, no
//!   domain types leaking into JSON.
//! * `presenters/`: pure functions from domain values to view models.
//! * `renderers/`: console output (plain text via `Display`, or JSON).
//! * `tui/`: the interactive hub. It renders `HubView` directly since it
//!   redraws on every tick.

pub mod presenters;
pub mod renderers;
pub mod tui;
pub mod view_models;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance};
