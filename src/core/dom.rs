//! Element ids, class names and attributes shared with the page markup.
//!
//! These strings are the contract between markup and behavior; changing any
//! of them breaks the existing page.

pub const HAMBURGER_ID: &str = "hamburger";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const TO_TOP_ID: &str = "toTop";
pub const YEAR_ID: &str = "year";
pub const BOOK_BUTTON_ID: &str = "bookBtn";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";
pub const STATS_SECTION_ID: &str = "stats-ii";
pub const CONTACT_ANCHOR: &str = "#contact";

pub const CLIENT_GROWTH_CANVAS_ID: &str = "clientGrowthChart";
pub const TAX_SAVINGS_CANVAS_ID: &str = "taxSavingsChart";
pub const INDUSTRY_CANVAS_ID: &str = "industryChart";
pub const EFFICIENCY_CANVAS_ID: &str = "efficiencyChart";

pub const NAV_SELECTOR: &str = ".nav";
pub const FORM_BUTTON_SELECTOR: &str = ".form-btn";

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const COUNT_CLASS: &str = "count";
pub const STAT_CARD_CLASS: &str = "stat-card";
pub const KPI_NUMBER_CLASS: &str = "kpi-number";
pub const CIRCULAR_PROGRESS_CLASS: &str = "circular-progress";
pub const PROGRESS_RING_CLASS: &str = "progress-ring-progress";
pub const PROGRESS_NUMBER_CLASS: &str = "progress-number";
pub const BAR_FILL_CLASS: &str = "bar-fill";
pub const INDUSTRY_BAR_CLASS: &str = "industry-bar";
pub const DARK_CLASS: &str = "dark";
pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";
pub const FORM_STATUS_CLASS: &str = "form-status";

pub const DATA_TARGET: &str = "data-target";
pub const DATA_PERCENTAGE: &str = "data-percentage";
pub const DATA_WIDTH: &str = "data-width";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
