//! Named display colors for particles
//!
//! Colors are plain sRGB triples so the physics core stays independent of the
//! renderer; the viewer converts them to Bevy colors when spawning meshes.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Orange,
    Pink,
    Cyan,
    Magenta,
    Lime,
    Turquoise,
    Gold,
    Silver,
    Navy,
    Teal,
    Violet,
}

/// The sixteen colors cycled over particle indices by default
pub const DEFAULT_PALETTE: [NamedColor; 16] = [
    NamedColor::Red,
    NamedColor::Blue,
    NamedColor::Yellow,
    NamedColor::Green,
    NamedColor::Purple,
    NamedColor::Orange,
    NamedColor::Pink,
    NamedColor::Cyan,
    NamedColor::Magenta,
    NamedColor::Lime,
    NamedColor::Turquoise,
    NamedColor::Gold,
    NamedColor::Silver,
    NamedColor::Navy,
    NamedColor::Teal,
    NamedColor::Violet,
];

impl NamedColor {
    /// sRGB components, using the X11 values for each name
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Red => (255, 0, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Green => (0, 255, 0),
            NamedColor::Purple => (160, 32, 240),
            NamedColor::Orange => (255, 165, 0),
            NamedColor::Pink => (255, 192, 203),
            NamedColor::Cyan => (0, 255, 255),
            NamedColor::Magenta => (255, 0, 255),
            NamedColor::Lime => (50, 205, 50),
            NamedColor::Turquoise => (64, 224, 208),
            NamedColor::Gold => (255, 215, 0),
            NamedColor::Silver => (192, 192, 192),
            NamedColor::Navy => (0, 0, 128),
            NamedColor::Teal => (0, 128, 128),
            NamedColor::Violet => (238, 130, 238),
        }
    }
}

/// Color for the particle at `index`, wrapping around the palette
/// An empty palette falls back to [`DEFAULT_PALETTE`]
pub fn cycle(palette: &[NamedColor], index: usize) -> NamedColor {
    if palette.is_empty() {
        return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
    }
    palette[index % palette.len()]
}
