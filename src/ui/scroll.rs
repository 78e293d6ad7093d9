use serde::{Deserialize, Serialize};

use crate::core::dom::{NAV_SELECTOR, SHOW_CLASS, TO_TOP_ID};
use crate::render::{DomMutation, MutationBatch};

const NAV_BACKGROUND_SOLID: &str = "rgba(10, 15, 28, 0.95)";
const NAV_BACKGROUND_TRANSLUCENT: &str = "rgba(10, 15, 28, 0.8)";
const NAV_SHADOW: &str = "var(--shadow-sm)";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollThresholds {
    /// The back-to-top button shows strictly above this offset.
    pub to_top_px: f64,
    /// The navbar turns solid strictly above this offset.
    pub nav_solid_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            to_top_px: 600.0,
            nav_solid_px: 50.0,
        }
    }
}

/// Scroll-position driven affordances. Only state changes produce mutations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEffects {
    thresholds: ScrollThresholds,
    to_top_visible: Option<bool>,
    nav_solid: Option<bool>,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            to_top_visible: None,
            nav_solid: None,
        }
    }

    #[must_use]
    pub fn to_top_visible(&self) -> bool {
        self.to_top_visible.unwrap_or(false)
    }

    #[must_use]
    pub fn nav_solid(&self) -> bool {
        self.nav_solid.unwrap_or(false)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> MutationBatch {
        let mut batch = MutationBatch::new();

        let show = scroll_y > self.thresholds.to_top_px;
        if self.to_top_visible != Some(show) {
            self.to_top_visible = Some(show);
            batch.push(DomMutation::toggle_class(TO_TOP_ID, SHOW_CLASS, show));
        }

        let solid = scroll_y > self.thresholds.nav_solid_px;
        if self.nav_solid != Some(solid) {
            self.nav_solid = Some(solid);
            let (background, shadow) = if solid {
                (NAV_BACKGROUND_SOLID, NAV_SHADOW)
            } else {
                (NAV_BACKGROUND_TRANSLUCENT, "none")
            };
            batch.push(DomMutation::set_style(NAV_SELECTOR, "background", background));
            batch.push(DomMutation::set_style(NAV_SELECTOR, "box-shadow", shadow));
        }
        batch
    }
}

/// In-page anchor target for smooth scrolling; `#` alone and non-anchor
/// hrefs are left to the browser.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Smooth scroll to `selector`.
#[must_use]
pub fn scroll_to(selector: &str) -> DomMutation {
    DomMutation::ScrollIntoView {
        selector: selector.to_owned(),
    }
}
