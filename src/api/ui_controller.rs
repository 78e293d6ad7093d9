use tracing::{debug, trace};

use crate::charts::ChartBackend;
use crate::core::Millis;
use crate::core::dom::CONTACT_ANCHOR;
use crate::render::{DomMutation, MutationBatch};
use crate::ui::{ContactFields, SubmitOutcome, SwipeDirection, anchor_target, scroll_to};

use super::PageController;

impl<B: ChartBackend> PageController<B> {
    pub fn on_scroll(&mut self, scroll_y: f64) -> MutationBatch {
        self.scroll.on_scroll(scroll_y)
    }

    pub fn on_hamburger_click(&mut self) -> MutationBatch {
        let batch = self.menu.toggle();
        debug!(open = self.menu.is_open(), "mobile menu toggled");
        batch
    }

    /// Click inside the mobile menu; `target_tag` is the clicked element's
    /// tag name.
    pub fn on_menu_click(&mut self, target_tag: &str) -> MutationBatch {
        self.menu.on_menu_click(target_tag)
    }

    /// Click on an `a[href^="#"]`. `Some` means the host must prevent the
    /// default navigation and apply the returned scroll.
    #[must_use]
    pub fn on_anchor_click(&self, href: &str) -> Option<DomMutation> {
        anchor_target(href).map(scroll_to)
    }

    /// Call-to-action button: always scrolls to the contact section.
    #[must_use]
    pub fn on_book_click(&self) -> DomMutation {
        scroll_to(CONTACT_ANCHOR)
    }

    pub fn on_color_scheme_change(&mut self, prefers_dark: bool) -> MutationBatch {
        self.theme.on_system_change(prefers_dark)
    }

    pub fn on_touch_start(&mut self, client_y: f64) {
        self.swipe.on_touch_start(client_y);
    }

    /// Reports vertical swipes; no navigation is bound to them.
    pub fn on_touch_end(&mut self, client_y: f64) -> Option<SwipeDirection> {
        let swipe = self.swipe.on_touch_end(client_y);
        if let Some(direction) = swipe {
            trace!(?direction, "swipe detected");
        }
        swipe
    }

    pub fn submit_contact(
        &mut self,
        fields: ContactFields,
        button_text: &str,
        now_ms: Millis,
    ) -> (SubmitOutcome, MutationBatch) {
        self.form.submit(fields, button_text, now_ms)
    }
}
