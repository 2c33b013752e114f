use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::scrollspy::Scrollspy;
use crate::{Section, SectionId};

/// A callback fired when a scrollspy state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback<I> = Arc<dyn Fn(&Scrollspy<I>, bool) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `Scrollspy::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Scrollspy`].
///
/// This type is designed to be cheap to clone: the `on_change` callback is stored in an `Arc` so
/// adapters can update a few fields and call `Scrollspy::set_options` without reallocating
/// closures.
pub struct ScrollspyOptions<I = SectionId> {
    /// The ordered section registry. Registry order is page order and the tie-break order for
    /// active-section selection. Replaced wholesale via `Scrollspy::set_sections`, never mutated
    /// incrementally.
    pub sections: Vec<Section<I>>,

    /// Enables/disables the engine. When disabled, query methods return defaults and scroll
    /// events are ignored.
    pub enabled: bool,

    /// The initial viewport height applied at construction.
    pub initial_viewport: Option<u32>,

    /// Initial scroll offset (e.g. restored from a previous session).
    pub initial_offset: InitialOffset,

    /// Height of the sticky navigation bar. Scroll targets are computed as the section's start
    /// minus this offset, so a section heading is not hidden beneath the bar.
    pub nav_offset: u32,

    /// Narrows the observed region from the top of the viewport.
    ///
    /// Margins bias active-section selection toward sections nearer the top and reduce flicker
    /// when several sections are partially visible at once.
    pub observe_margin_top: u32,

    /// Narrows the observed region from the bottom of the viewport.
    pub observe_margin_bottom: u32,

    /// Minimum fraction of a section's height that must be visible inside the observed region
    /// before the section qualifies for selection. `0.0` means any overlap qualifies.
    pub visibility_threshold: f32,

    /// Scroll offset beyond which a back-to-top control should be shown. Strict: at exactly this
    /// offset the control stays hidden.
    pub back_to_top_threshold: u64,

    /// Optional callback fired when the engine's internal state changes.
    ///
    /// The `sync` argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback<I>>,

    /// Determines whether to use a native scrollend event to detect when scrolling has stopped.
    ///
    /// In this crate, scrolling state is driven by your adapter via
    /// `set_is_scrolling`/`notify_scroll_event`/`update_scrolling`.
    pub use_scrollend_event: bool,

    /// Debounced fallback duration for resetting `is_scrolling` when `use_scrollend_event` is
    /// false.
    pub is_scrolling_reset_delay_ms: u64,
}

impl<I> Clone for ScrollspyOptions<I>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        Self {
            sections: self.sections.clone(),
            enabled: self.enabled,
            initial_viewport: self.initial_viewport,
            initial_offset: self.initial_offset.clone(),
            nav_offset: self.nav_offset,
            observe_margin_top: self.observe_margin_top,
            observe_margin_bottom: self.observe_margin_bottom,
            visibility_threshold: self.visibility_threshold,
            back_to_top_threshold: self.back_to_top_threshold,
            on_change: self.on_change.clone(),
            use_scrollend_event: self.use_scrollend_event,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
        }
    }
}

impl<I> ScrollspyOptions<I> {
    /// Creates options for the given ordered section registry.
    ///
    /// Defaults: enabled, no margins, any overlap qualifies, back-to-top at 300 px, no nav
    /// offset. Layout-specific values (nav bar height, observer bias) are expected to be set via
    /// the `with_*` builders.
    pub fn new(sections: Vec<Section<I>>) -> Self {
        Self {
            sections,
            enabled: true,
            initial_viewport: None,
            initial_offset: InitialOffset::default(),
            nav_offset: 0,
            observe_margin_top: 0,
            observe_margin_bottom: 0,
            visibility_threshold: 0.0,
            back_to_top_threshold: 300,
            on_change: None,
            use_scrollend_event: false,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the initial viewport height.
    pub fn with_initial_viewport(mut self, initial_viewport: Option<u32>) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_nav_offset(mut self, nav_offset: u32) -> Self {
        self.nav_offset = nav_offset;
        self
    }

    pub fn with_observe_margins(mut self, top: u32, bottom: u32) -> Self {
        self.observe_margin_top = top;
        self.observe_margin_bottom = bottom;
        self
    }

    pub fn with_visibility_threshold(mut self, visibility_threshold: f32) -> Self {
        self.visibility_threshold = visibility_threshold;
        self
    }

    pub fn with_back_to_top_threshold(mut self, back_to_top_threshold: u64) -> Self {
        self.back_to_top_threshold = back_to_top_threshold;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Scrollspy<I>, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_use_scrollend_event(mut self, use_scrollend_event: bool) -> Self {
        self.use_scrollend_event = use_scrollend_event;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl<I: core::fmt::Debug> core::fmt::Debug for ScrollspyOptions<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollspyOptions")
            .field("sections", &self.sections)
            .field("enabled", &self.enabled)
            .field("initial_viewport", &self.initial_viewport)
            .field("initial_offset", &self.initial_offset)
            .field("nav_offset", &self.nav_offset)
            .field("observe_margin_top", &self.observe_margin_top)
            .field("observe_margin_bottom", &self.observe_margin_bottom)
            .field("visibility_threshold", &self.visibility_threshold)
            .field("back_to_top_threshold", &self.back_to_top_threshold)
            .field("use_scrollend_event", &self.use_scrollend_event)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
