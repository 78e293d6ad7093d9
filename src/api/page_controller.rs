use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::animation::{
    AnimationScheduler, CounterAnimation, CounterPreset, StaggerSchedule, parse_target,
};
use crate::charts::{ChartBackend, ChartRegistry};
use crate::core::Millis;
use crate::error::MotionResult;
use crate::render::MutationBatch;
use crate::ui::{
    ContactForm, MobileMenu, ScrollEffects, SubmitEndpoint, SwipeTracker, ThemeState, footer_year,
};
use crate::visibility::VisibilityWatcher;

use super::{NumericElement, PageConfig, PageMarkup};

/// Single owner of all page behavior state.
///
/// The controller never touches the DOM: every handler returns the mutations
/// the host must apply, and time only advances through the timestamps the
/// host passes in.
pub struct PageController<B: ChartBackend> {
    pub(super) backend: B,
    pub(super) config: PageConfig,
    pub(super) markup: PageMarkup,
    pub(super) reveal: VisibilityWatcher,
    pub(super) stat_cards: VisibilityWatcher,
    pub(super) stats_section: VisibilityWatcher,
    pub(super) charts: ChartRegistry,
    pub(super) counters: AnimationScheduler,
    pub(super) stagger: Option<StaggerSchedule>,
    pub(super) stats_animated: bool,
    pub(super) theme: ThemeState,
    pub(super) menu: MobileMenu,
    pub(super) scroll: ScrollEffects,
    pub(super) swipe: SwipeTracker,
    pub(super) form: ContactForm,
    pub(super) started: bool,
}

impl<B: ChartBackend> PageController<B> {
    pub fn new(
        backend: B,
        config: PageConfig,
        markup: PageMarkup,
        endpoint: Box<dyn SubmitEndpoint>,
    ) -> MotionResult<Self> {
        config.validate()?;

        let mut reveal = VisibilityWatcher::new(config.reveal_threshold)?;
        for element in &markup.reveal {
            reveal.register(element.clone());
        }
        let mut stat_cards = VisibilityWatcher::new(config.stat_card_threshold)?;
        for card in &markup.stat_cards {
            stat_cards.register(card.card.clone());
        }
        let mut stats_section = VisibilityWatcher::new(config.stats_section_threshold)?;
        if let Some(section) = &markup.stats_section {
            stats_section.register(section.clone());
        }

        let charts = ChartRegistry::with_site_charts(config.chart_style.clone())?;
        let scroll = ScrollEffects::new(config.scroll);
        let form = ContactForm::new(config.form, endpoint);

        debug!(
            reveal = markup.reveal.len(),
            counters = markup.counters.len(),
            stat_cards = markup.stat_cards.len(),
            kpi_numbers = markup.kpi_numbers.len(),
            progress_rings = markup.progress_rings.len(),
            "page controller created"
        );

        Ok(Self {
            backend,
            config,
            markup,
            reveal,
            stat_cards,
            stats_section,
            charts,
            counters: AnimationScheduler::new(),
            stagger: None,
            stats_animated: false,
            theme: ThemeState::default(),
            menu: MobileMenu::default(),
            scroll,
            swipe: SwipeTracker::default(),
            form,
            started: false,
        })
    }

    /// Page-load work: theme from the system preference, footer year and the
    /// `.count` counters. Runs once; later calls return nothing.
    pub fn start(
        &mut self,
        now_ms: Millis,
        prefers_dark: bool,
        today: DateTime<Utc>,
    ) -> MutationBatch {
        let mut batch = MutationBatch::new();
        if self.started {
            return batch;
        }
        self.started = true;

        let (theme, theme_batch) = ThemeState::from_system(prefers_dark);
        self.theme = theme;
        batch.extend(theme_batch);
        batch.push(footer_year(today));

        let counters = self.markup.counters.clone();
        for counter in &counters {
            self.start_counter(counter, CounterPreset::Count, now_ms);
        }
        batch
    }

    /// Starts a count-up for `element`; malformed targets are skipped and the
    /// element keeps its markup text.
    pub(super) fn start_counter(
        &mut self,
        element: &NumericElement,
        preset: CounterPreset,
        now_ms: Millis,
    ) {
        let Some(target) = parse_numeric(element) else {
            return;
        };
        let duration_ms = match preset {
            CounterPreset::Count => self.config.count_duration_ms,
            CounterPreset::Kpi => self.config.kpi_duration_ms,
            CounterPreset::ProgressNumber => self.config.progress_number_duration_ms,
        };
        let mut spec = preset.spec(target, duration_ms);
        if preset == CounterPreset::Count {
            spec = spec.with_integer_bias(self.config.count_integer_bias);
        }
        match CounterAnimation::new(spec) {
            Ok(animation) => {
                self.counters.start(element.element.clone(), animation, now_ms);
            }
            Err(err) => warn!(element = %element.element, error = %err, "skipping counter"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    #[must_use]
    pub fn counters(&self) -> &AnimationScheduler {
        &self.counters
    }

    /// `true` once the stats section choreography has been triggered.
    #[must_use]
    pub fn stats_animated(&self) -> bool {
        self.stats_animated
    }

    #[must_use]
    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    #[must_use]
    pub fn menu(&self) -> MobileMenu {
        self.menu
    }

    #[must_use]
    pub fn scroll_effects(&self) -> &ScrollEffects {
        &self.scroll
    }

    #[must_use]
    pub fn contact_form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}

pub(super) fn parse_numeric(element: &NumericElement) -> Option<f64> {
    match parse_target(&element.raw_value) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                element = %element.element,
                error = %err,
                "ignoring element with bad numeric attribute"
            );
            None
        }
    }
}
