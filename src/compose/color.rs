use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::Sampler;
use crate::UniformSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
}

impl Color {
    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// `rgb(r, g, b)`.
    pub fn to_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    pub fn format(self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Rgb => self.to_rgb(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<S: UniformSource> Sampler<S> {
    pub fn color(&self) -> Color {
        Color {
            red: self.byte(),
            green: self.byte(),
            blue: self.byte(),
        }
    }

    pub(crate) fn byte(&self) -> u8 {
        u8::try_from(self.int_between(0, 255)).unwrap_or(u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedSource;

    #[test]
    fn formats_channels() {
        let color = Color {
            red: 255,
            green: 8,
            blue: 0,
        };
        assert_eq!(color.to_hex(), "#ff0800");
        assert_eq!(color.to_string(), "#ff0800");
        assert_eq!(color.format(ColorFormat::Rgb), "rgb(255, 8, 0)");
    }

    #[test]
    fn channels_span_the_byte_range() {
        let sampler = Sampler::new(FixedSource::new([0.0, 0.5, 0.999_999]));
        assert_eq!(
            sampler.color(),
            Color {
                red: 0,
                green: 128,
                blue: 255
            }
        );
    }
}
