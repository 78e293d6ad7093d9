use serde::{Deserialize, Serialize};

/// Text rendering policy for an animated number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Truncated toward zero, no decimal separator.
    Integer,
    /// Exactly one decimal place.
    OneDecimal,
}

impl NumberFormat {
    /// Picks `OneDecimal` when `target` has a fractional part.
    ///
    /// `23.0` counts as whole and renders as `"23"`.
    #[must_use]
    pub fn for_target(target: f64) -> Self {
        if is_whole(target) {
            Self::Integer
        } else {
            Self::OneDecimal
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Integer => {
                let whole = value.trunc();
                // Keeps `-0.4` from rendering as `-0`.
                format!("{:.0}", if whole == 0.0 { 0.0 } else { whole })
            }
            Self::OneDecimal => format!("{value:.1}"),
        }
    }
}

#[must_use]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
