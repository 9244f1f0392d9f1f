//! Accent colors, preset HSL table, and the hex -> HSL conversion.

use serde::Serialize;
use std::fmt;

/// Accent color choices. Named presets come from a fixed table; `Custom`
/// derives its value from a user-supplied hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Orange,
    Purple,
    Teal,
    Custom,
}

impl Accent {
    /// Named presets, in picker order.
    pub const PRESETS: [Accent; 5] = [
        Accent::Blue,
        Accent::Green,
        Accent::Orange,
        Accent::Purple,
        Accent::Teal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Orange => "orange",
            Accent::Purple => "purple",
            Accent::Teal => "teal",
            Accent::Custom => "custom",
        }
    }

    /// Catalog swatch hex for the picker UI.
    pub fn swatch_hex(&self) -> &'static str {
        match self {
            Accent::Blue => "#0f62fe",
            Accent::Green => "#198038",
            Accent::Orange => "#ff6b00",
            Accent::Purple => "#8a3ffc",
            Accent::Teal => "#007d79",
            Accent::Custom => "#0f62fe",
        }
    }

    /// Parse an accent name; anything unrecognized falls back to blue.
    pub fn from_name(name: &str) -> Accent {
        match name {
            "blue" => Accent::Blue,
            "green" => Accent::Green,
            "orange" => Accent::Orange,
            "purple" => Accent::Purple,
            "teal" => Accent::Teal,
            "custom" => Accent::Custom,
            _ => Accent::Blue,
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized color triple: hue in degrees, saturation/lightness in percent.
/// Displays in stylesheet token form: `217 91% 53%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Light/dark variant pair for one named preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPair {
    pub light: Hsl,
    pub dark: Hsl,
}

/// Preset HSL table. `Custom` resolves to the blue default when no custom
/// value is supplied.
pub fn preset(accent: Accent) -> AccentPair {
    match accent {
        Accent::Blue | Accent::Custom => AccentPair {
            light: Hsl::new(217, 91, 53),
            dark: Hsl::new(217, 91, 53),
        },
        Accent::Green => AccentPair {
            light: Hsl::new(152, 69, 31),
            dark: Hsl::new(149, 62, 40),
        },
        Accent::Orange => AccentPair {
            light: Hsl::new(24, 100, 46),
            dark: Hsl::new(24, 95, 53),
        },
        Accent::Purple => AccentPair {
            light: Hsl::new(271, 81, 56),
            dark: Hsl::new(271, 81, 66),
        },
        Accent::Teal => AccentPair {
            light: Hsl::new(174, 100, 24),
            dark: Hsl::new(174, 100, 36),
        },
    }
}

/// Convert a hex RGB color to HSL with integer rounding.
///
/// Channels that fail to parse are treated as zero, so malformed input
/// degrades to a defined color instead of failing. The max/min channel
/// algebra and rounding match the stylesheet tokens this feeds.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |start: usize| -> f64 {
        hex.get(start..start + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0) as f64
            / 255.0
    };

    let r = channel(0);
    let g = channel(2);
    let b = channel(4);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;
    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
    }

    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Theme snapshot handed to the generators. Owned by the caller; the engine
/// never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSelection {
    pub accent: Accent,
    pub custom: Option<Hsl>,
}

impl ThemeSelection {
    pub fn named(accent: Accent) -> Self {
        Self {
            accent,
            custom: None,
        }
    }

    pub fn custom(hex: &str) -> Self {
        Self {
            accent: Accent::Custom,
            custom: Some(hex_to_hsl(hex)),
        }
    }

    /// Resolved primary value for the light theme block.
    pub fn light(&self) -> Hsl {
        self.custom.unwrap_or_else(|| preset(self.accent).light)
    }

    /// Resolved primary value for the dark theme block.
    pub fn dark(&self) -> Hsl {
        self.custom.unwrap_or_else(|| preset(self.accent).dark)
    }
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self::named(Accent::Blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_family_round_trip() {
        // hex equivalent of the default blue preset reproduces its numbers
        assert_eq!(hex_to_hsl("#1A6EF4"), Hsl::new(217, 91, 53));
        assert_eq!(hex_to_hsl("1a6ef4"), Hsl::new(217, 91, 53));
    }

    #[test]
    fn test_hex_to_hsl_known_values() {
        assert_eq!(hex_to_hsl("#000000"), Hsl::new(0, 0, 0));
        assert_eq!(hex_to_hsl("#ffffff"), Hsl::new(0, 0, 100));
        assert_eq!(hex_to_hsl("#ff0000"), Hsl::new(0, 100, 50));
        assert_eq!(hex_to_hsl("#00ff00"), Hsl::new(120, 100, 50));
        assert_eq!(hex_to_hsl("#0000ff"), Hsl::new(240, 100, 50));
        // catalog blue swatch
        assert_eq!(hex_to_hsl("#0f62fe"), Hsl::new(219, 99, 53));
    }

    #[test]
    fn test_hex_to_hsl_malformed_input_is_zeroed() {
        // unparseable channels degrade to zero, never panic
        assert_eq!(hex_to_hsl("#zzzzzz"), Hsl::new(0, 0, 0));
        assert_eq!(hex_to_hsl(""), Hsl::new(0, 0, 0));
        // truncated input: red parses, the rest zeroes out
        assert_eq!(hex_to_hsl("#ff"), Hsl::new(0, 100, 50));
    }

    #[test]
    fn test_unknown_accent_falls_back_to_blue() {
        assert_eq!(Accent::from_name("magenta"), Accent::Blue);
        assert_eq!(Accent::from_name("teal"), Accent::Teal);
    }

    #[test]
    fn test_theme_selection_resolution() {
        let named = ThemeSelection::named(Accent::Green);
        assert_eq!(named.light(), Hsl::new(152, 69, 31));
        assert_eq!(named.dark(), Hsl::new(149, 62, 40));

        let custom = ThemeSelection::custom("#ff0000");
        assert_eq!(custom.light(), Hsl::new(0, 100, 50));
        assert_eq!(custom.light(), custom.dark());
    }

    #[test]
    fn test_hsl_token_display() {
        assert_eq!(Hsl::new(217, 91, 53).to_string(), "217 91% 53%");
    }
}
