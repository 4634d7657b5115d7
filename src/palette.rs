//! Theme-driven colors: discrete categorical sequences, the per-theme accent
//! and the sequential colorscale handed to the 3D backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hue step between consecutive discrete colors. Close to the golden angle,
/// so a handful of categories land far apart on the hue circle.
pub const HUE_STEP: u16 = 137;

const DISCRETE_SATURATION: f32 = 0.7;
const DISCRETE_LIGHTNESS: f32 = 0.6;
const DISCRETE_ALPHA: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Green,
    Blue,
    Purple,
    Orange,
    Red,
    Teal,
    Indigo,
    Pink,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Green,
        Theme::Blue,
        Theme::Purple,
        Theme::Orange,
        Theme::Red,
        Theme::Teal,
        Theme::Indigo,
        Theme::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Orange => "orange",
            Theme::Red => "red",
            Theme::Teal => "teal",
            Theme::Indigo => "indigo",
            Theme::Pink => "pink",
        }
    }

    /// Resolve a theme name; unknown names fall back to the first theme.
    pub fn from_name(name: &str) -> Self {
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Theme::ALL[0])
    }

    pub fn base_hue(self) -> u16 {
        match self {
            Theme::Green => 120,
            Theme::Blue => 210,
            Theme::Purple => 270,
            Theme::Orange => 30,
            Theme::Red => 0,
            Theme::Teal => 175,
            Theme::Indigo => 245,
            Theme::Pink => 330,
        }
    }

    pub fn accent(self) -> Rgba {
        match self {
            Theme::Green => Rgba::rgb(0x16, 0xa3, 0x4a),
            Theme::Blue => Rgba::rgb(0x02, 0x84, 0xc7),
            Theme::Purple => Rgba::rgb(0x7e, 0x22, 0xce),
            Theme::Orange => Rgba::rgb(0xea, 0x58, 0x0c),
            Theme::Red => Rgba::rgb(0xdc, 0x26, 0x26),
            Theme::Teal => Rgba::rgb(0x0d, 0x94, 0x88),
            Theme::Indigo => Rgba::rgb(0x4f, 0x46, 0xe5),
            Theme::Pink => Rgba::rgb(0xdb, 0x27, 0x77),
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Theme::from_name(&name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// HSL color with alpha. Hue in degrees, the rest in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.l * 100.0).round(),
            self.a
        )
    }
}

impl Serialize for Hsla {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `n` categorical colors for `theme`, stepping the hue by [`HUE_STEP`].
/// Identical arguments always give identical sequences.
pub fn discrete_colors(theme: Theme, n: usize) -> Vec<Hsla> {
    let base = u32::from(theme.base_hue());
    (0..n)
        .map(|i| {
            // reduce i first so large n cannot overflow
            let step = (i % 360) as u32 * u32::from(HUE_STEP);
            let hue = (base + step) % 360;
            Hsla::new(hue as f32, DISCRETE_SATURATION, DISCRETE_LIGHTNESS, DISCRETE_ALPHA)
        })
        .collect()
}

/// Named continuous colorscales understood by the 3D render backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Colorscale {
    Greens,
    Blues,
    Purples,
    Oranges,
    Reds,
    Teal,
    Pinkyl,
    #[default]
    Viridis,
}

const SEQUENTIAL_SCALES: &[(Theme, Colorscale)] = &[
    (Theme::Green, Colorscale::Greens),
    (Theme::Blue, Colorscale::Blues),
    (Theme::Purple, Colorscale::Purples),
    (Theme::Orange, Colorscale::Oranges),
    (Theme::Red, Colorscale::Reds),
    (Theme::Teal, Colorscale::Teal),
    (Theme::Indigo, Colorscale::Purples),
    (Theme::Pink, Colorscale::Pinkyl),
];

/// Nearest backend colorscale for `theme`, [`Colorscale::Viridis`] when the
/// theme has no counterpart.
pub fn sequential_scale(theme: Theme) -> Colorscale {
    SEQUENTIAL_SCALES
        .iter()
        .find(|(t, _)| *t == theme)
        .map(|(_, scale)| *scale)
        .unwrap_or_default()
}
