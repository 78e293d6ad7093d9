use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MotionError, MotionResult};

/// CSS color value emitted into chart configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: f64,
    },
    /// `#rrggbb`
    Hex { red: u8, green: u8, blue: u8 },
}

impl CssColor {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn hex(red: u8, green: u8, blue: u8) -> Self {
        Self::Hex { red, green, blue }
    }

    pub const WHITE: Self = Self::hex(0xff, 0xff, 0xff);

    /// Same channels with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        match self {
            Self::Rgba {
                red, green, blue, ..
            }
            | Self::Hex { red, green, blue } => Self::rgba(red, green, blue, alpha),
        }
    }

    pub fn validate(self) -> MotionResult<()> {
        match self {
            Self::Rgba { alpha, .. } if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) => {
                Err(MotionError::InvalidData(
                    "color alpha must be finite and in [0, 1]".to_owned(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Parses `rgba(r, g, b, a)` and `#rrggbb`.
    pub fn parse(input: &str) -> MotionResult<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex);
        }
        let inner = input
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| MotionError::InvalidData(format!("unsupported color `{input}`")))?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [red, green, blue, alpha] = parts.as_slice() else {
            return Err(MotionError::InvalidData(format!(
                "rgba color needs four channels: `{input}`"
            )));
        };
        let channel = |raw: &str| {
            raw.parse::<u8>()
                .map_err(|e| MotionError::InvalidData(format!("bad channel `{raw}`: {e}")))
        };
        let alpha = alpha
            .parse::<f64>()
            .map_err(|e| MotionError::InvalidData(format!("bad alpha `{alpha}`: {e}")))?;
        let color = Self::rgba(channel(red)?, channel(green)?, channel(blue)?, alpha);
        color.validate()?;
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> MotionResult<CssColor> {
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_owned(),
        _ => {
            return Err(MotionError::InvalidData(format!(
                "hex color must have 3 or 6 digits: `#{hex}`"
            )));
        }
    };
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .map_err(|e| MotionError::InvalidData(format!("bad hex color `#{hex}`: {e}")))
    };
    Ok(CssColor::hex(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => write!(f, "rgba({red}, {green}, {blue}, {alpha})"),
            Self::Hex { red, green, blue } if red == green && green == blue && red == 0xff => {
                f.write_str("#fff")
            }
            Self::Hex { red, green, blue } => write!(f, "#{red:02x}{green:02x}{blue:02x}"),
        }
    }
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_renders_like_css_source() {
        assert_eq!(
            CssColor::rgba(59, 130, 246, 0.7).to_string(),
            "rgba(59, 130, 246, 0.7)"
        );
        assert_eq!(
            CssColor::rgba(59, 130, 246, 1.0).to_string(),
            "rgba(59, 130, 246, 1)"
        );
        assert_eq!(CssColor::WHITE.to_string(), "#fff");
    }

    #[test]
    fn parse_accepts_rendered_output() {
        let color = CssColor::parse("rgba(16, 185, 129, 0.8)").expect("parse");
        assert_eq!(color, CssColor::rgba(16, 185, 129, 0.8));
        assert_eq!(CssColor::parse("#fff").expect("hex"), CssColor::WHITE);
        assert!(CssColor::parse("rgba(1, 2, 3, 1.5)").is_err());
        assert!(CssColor::parse("hsl(1, 2%, 3%)").is_err());
    }
}
