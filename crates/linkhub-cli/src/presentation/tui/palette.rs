use linkhub_types::Rgb;
use ratatui::style::Color;

pub(crate) fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(crate) const TEXT: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub(crate) const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
