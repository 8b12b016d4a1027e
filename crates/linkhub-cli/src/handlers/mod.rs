pub mod browse;
pub mod check;
pub mod list;
pub mod theme;
