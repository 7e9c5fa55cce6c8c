use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Fixed palette cycled by slice position.
pub const PALETTE: [&str; 10] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#845EC2", "#D65DB1", "#FF6F91", "#FFC75F",
    "#008E9B", "#4B4453",
];

const SPECTRUM_SATURATION: u32 = 70;
const SPECTRUM_LIGHTNESS: u32 = 50;

/// How slices are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Cycle through [`PALETTE`].
    #[default]
    Palette,
    /// Spread hues evenly around the color wheel.
    Spectrum,
}

impl ColorScheme {
    /// CSS color for the slice at `index` out of `count`.
    pub fn color(self, index: usize, count: usize) -> String {
        match self {
            ColorScheme::Palette => PALETTE[index % PALETTE.len()].to_string(),
            ColorScheme::Spectrum => {
                let hue = if count == 0 { 0.0 } else { index as f64 * 360.0 / count as f64 };
                format!(
                    "hsl({}, {}%, {}%)",
                    format_hue(hue),
                    SPECTRUM_SATURATION,
                    SPECTRUM_LIGHTNESS
                )
            }
        }
    }

    pub fn colors(self, count: usize) -> Vec<String> {
        (0..count).map(|index| self.color(index, count)).collect()
    }
}

fn format_hue(hue: f64) -> String {
    let rounded = (hue * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as u32)
    } else {
        format!("{rounded}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color scheme '{0}', expected 'palette' or 'spectrum'")]
pub struct ParseColorSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "palette" => Ok(ColorScheme::Palette),
            "spectrum" => Ok(ColorScheme::Spectrum),
            other => Err(ParseColorSchemeError(other.to_string())),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Palette => write!(f, "palette"),
            ColorScheme::Spectrum => write!(f, "spectrum"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let scheme = ColorScheme::Palette;
        assert_eq!(scheme.color(0, 12), "#0088FE");
        assert_eq!(scheme.color(9, 12), "#4B4453");
        assert_eq!(scheme.color(10, 12), "#0088FE");
        assert_eq!(scheme.color(11, 12), "#00C49F");
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        let mut colors = PALETTE.to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), PALETTE.len());
    }

    #[test]
    fn test_spectrum_spreads_hues_evenly() {
        assert_eq!(
            ColorScheme::Spectrum.colors(4),
            vec![
                "hsl(0, 70%, 50%)",
                "hsl(90, 70%, 50%)",
                "hsl(180, 70%, 50%)",
                "hsl(270, 70%, 50%)",
            ]
        );
        assert_eq!(ColorScheme::Spectrum.color(1, 3), "hsl(120, 70%, 50%)");
        assert_eq!(ColorScheme::Spectrum.color(1, 7), "hsl(51.43, 70%, 50%)");
    }

    #[test]
    fn test_colors_are_deterministic() {
        for scheme in [ColorScheme::Palette, ColorScheme::Spectrum] {
            assert_eq!(scheme.colors(15), scheme.colors(15));
        }
    }

    #[test]
    fn test_scheme_parses_and_displays() {
        assert_eq!("palette".parse::<ColorScheme>(), Ok(ColorScheme::Palette));
        assert_eq!(" Spectrum ".parse::<ColorScheme>(), Ok(ColorScheme::Spectrum));
        assert!("rainbow".parse::<ColorScheme>().is_err());
        assert_eq!(ColorScheme::Spectrum.to_string(), "spectrum");
        assert_eq!(ColorScheme::default(), ColorScheme::Palette);
    }
}
