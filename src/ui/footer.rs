use chrono::{DateTime, Datelike, Utc};

use crate::core::dom::YEAR_ID;
use crate::render::DomMutation;

/// Writes the current year into the footer.
#[must_use]
pub fn footer_year(now: DateTime<Utc>) -> DomMutation {
    DomMutation::set_text(YEAR_ID, now.year().to_string())
}
