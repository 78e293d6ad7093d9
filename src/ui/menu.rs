use crate::core::dom::{
    ACTIVE_CLASS, ARIA_EXPANDED, ARIA_HIDDEN, HAMBURGER_ID, MOBILE_MENU_ID, OPEN_CLASS,
};
use crate::render::{DomMutation, MutationBatch};

/// Hamburger-driven mobile navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> MutationBatch {
        self.open = !self.open;
        self.sync()
    }

    /// Click anywhere inside the menu; only links close it.
    pub fn on_menu_click(&mut self, target_tag: &str) -> MutationBatch {
        if !target_tag.eq_ignore_ascii_case("a") {
            return MutationBatch::new();
        }
        self.open = false;
        self.sync()
    }

    fn sync(self) -> MutationBatch {
        let open = self.open;
        MutationBatch::from_iter([
            DomMutation::toggle_class(MOBILE_MENU_ID, OPEN_CLASS, open),
            DomMutation::toggle_class(HAMBURGER_ID, ACTIVE_CLASS, open),
            DomMutation::set_attribute(HAMBURGER_ID, ARIA_EXPANDED, open.to_string()),
            DomMutation::set_attribute(MOBILE_MENU_ID, ARIA_HIDDEN, (!open).to_string()),
        ])
    }
}
