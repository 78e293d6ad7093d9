//! Page glue outside the visibility engine: theme, navigation, scroll
//! affordances, footer and the contact form.

pub mod contact_form;
pub mod footer;
pub mod menu;
pub mod scroll;
pub mod swipe;
pub mod theme;

pub use contact_form::{
    ContactFields, ContactForm, FormRejection, FormStatus, FormTiming, SimulatedEndpoint,
    StatusKind, SubmitEndpoint, SubmitOutcome, is_valid_email,
};
pub use footer::footer_year;
pub use menu::MobileMenu;
pub use scroll::{ScrollEffects, ScrollThresholds, anchor_target, scroll_to};
pub use swipe::{SwipeDirection, SwipeTracker};
pub use theme::ThemeState;
