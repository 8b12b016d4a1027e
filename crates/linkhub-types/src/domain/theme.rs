use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of one of the built-in color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Cyan,
    Rose,
    Emerald,
    Violet,
}

impl ThemeId {
    /// All themes in switcher order.
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Cyan,
        ThemeId::Rose,
        ThemeId::Emerald,
        ThemeId::Violet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Cyan => "cyan",
            ThemeId::Rose => "rose",
            ThemeId::Emerald => "emerald",
            ThemeId::Violet => "violet",
        }
    }

    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|id| *id == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn theme(self) -> &'static Theme {
        Theme::get(self)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}

/// 24-bit color token, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Named bundle of style tokens
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub background: Rgb,
    pub header_bg: Rgb,
    pub card_bg: Rgb,
    pub card_border: Rgb,
    /// Border of the selected or expanded card
    pub card_focus_border: Rgb,
    pub icon_accent: Rgb,
    pub tag_bg: Rgb,
    pub tag_fg: Rgb,
    pub button_fg: Rgb,
    /// Swatch color in the theme switcher
    pub ring: Rgb,
}

const GRAY_900: Rgb = Rgb::hex(0x111827);
const GRAY_800: Rgb = Rgb::hex(0x1f2937);
const GRAY_700: Rgb = Rgb::hex(0x374151);

pub static THEMES: [Theme; 4] = [
    Theme {
        id: ThemeId::Cyan,
        name: "Cyan",
        background: Rgb::hex(0x0b1220),
        header_bg: GRAY_900,
        card_bg: GRAY_800,
        card_border: GRAY_700,
        card_focus_border: Rgb::hex(0x06b6d4),
        icon_accent: Rgb::hex(0x22d3ee),
        tag_bg: Rgb::hex(0x164e63),
        tag_fg: Rgb::hex(0x67e8f9),
        button_fg: Rgb::hex(0x67e8f9),
        ring: Rgb::hex(0x06b6d4),
    },
    Theme {
        id: ThemeId::Rose,
        name: "Rose",
        background: Rgb::hex(0x1a0b12),
        header_bg: GRAY_900,
        card_bg: GRAY_800,
        card_border: GRAY_700,
        card_focus_border: Rgb::hex(0xf43f5e),
        icon_accent: Rgb::hex(0xfb7185),
        tag_bg: Rgb::hex(0x881337),
        tag_fg: Rgb::hex(0xfda4af),
        button_fg: Rgb::hex(0xfda4af),
        ring: Rgb::hex(0xf43f5e),
    },
    Theme {
        id: ThemeId::Emerald,
        name: "Emerald",
        background: Rgb::hex(0x06140f),
        header_bg: GRAY_900,
        card_bg: GRAY_800,
        card_border: GRAY_700,
        card_focus_border: Rgb::hex(0x10b981),
        icon_accent: Rgb::hex(0x34d399),
        tag_bg: Rgb::hex(0x064e3b),
        tag_fg: Rgb::hex(0x6ee7b7),
        button_fg: Rgb::hex(0x6ee7b7),
        ring: Rgb::hex(0x10b981),
    },
    Theme {
        id: ThemeId::Violet,
        name: "Violet",
        background: Rgb::hex(0x120b1f),
        header_bg: GRAY_900,
        card_bg: GRAY_800,
        card_border: GRAY_700,
        card_focus_border: Rgb::hex(0x8b5cf6),
        icon_accent: Rgb::hex(0xa78bfa),
        tag_bg: Rgb::hex(0x4c1d95),
        tag_fg: Rgb::hex(0xc4b5fd),
        button_fg: Rgb::hex(0xc4b5fd),
        ring: Rgb::hex(0x8b5cf6),
    },
];

impl Theme {
    pub fn get(id: ThemeId) -> &'static Theme {
        THEMES
            .iter()
            .find(|theme| theme.id == id)
            .unwrap_or(&THEMES[0])
    }

    pub fn all() -> &'static [Theme] {
        &THEMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_id() {
        assert_eq!("rose".parse::<ThemeId>().unwrap(), ThemeId::Rose);
        assert_eq!(" violet ".parse::<ThemeId>().unwrap(), ThemeId::Violet);
        assert_eq!(
            "plaid".parse::<ThemeId>(),
            Err(Error::UnknownTheme("plaid".to_string()))
        );
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(ThemeId::Cyan.next(), ThemeId::Rose);
        assert_eq!(ThemeId::Violet.next(), ThemeId::Cyan);
    }

    #[test]
    fn test_every_id_has_a_theme() {
        for id in ThemeId::ALL {
            assert_eq!(Theme::get(id).id, id);
        }
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::hex(0x06b6d4).to_string(), "#06b6d4");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
    }
}
