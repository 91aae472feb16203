use serde::{Deserialize, Serialize};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xff) as f64 / 255.0,
            ((hex >> 8) & 0xff) as f64 / 255.0,
            (hex & 0xff) as f64 / 255.0,
        )
    }
}

/// Hue/saturation/lightness color, hue in degrees and the rest in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColor {
    /// Saturation/lightness used for word-cloud words.
    pub const WORD_CLOUD_SATURATION: f64 = 70.0;
    pub const WORD_CLOUD_LIGHTNESS: f64 = 50.0;

    #[must_use]
    pub const fn word_cloud(hue: f64) -> Self {
        Self {
            hue,
            saturation: Self::WORD_CLOUD_SATURATION,
            lightness: Self::WORD_CLOUD_LIGHTNESS,
        }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, HslColor};

    #[test]
    fn hex_literal_maps_to_normalized_channels() {
        let color = Color::from_rgb_hex(0xff8000);
        assert_eq!(color, Color::rgb(1.0, 128.0 / 255.0, 0.0));
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn word_cloud_hsl_formats_as_css() {
        assert_eq!(HslColor::word_cloud(137.5).to_css(), "hsl(137.5, 70%, 50%)");
    }
}
