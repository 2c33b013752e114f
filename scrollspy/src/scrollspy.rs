use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::section::SectionKey;
use crate::{
    InitialOffset, PageState, ScrollState, ScrollspyOptions, Section, SectionBounds, SectionId,
    ViewportState,
};

/// A headless scroll-spy engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport height, content height, scroll offsets, and
///   measured section anchor positions.
/// - Presentation state is exposed via query methods (`active_id`, `scroll_progress`,
///   `back_to_top_visible`, `scroll_target`).
///
/// For smooth-scroll navigation, frame coalescing, and persisted preferences, see the
/// `scrollspy-adapter` crate.
#[derive(Clone, Debug)]
pub struct Scrollspy<I = SectionId> {
    options: ScrollspyOptions<I>,
    viewport_size: u32,
    content_size: u64,
    scroll_offset: u64,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,

    bounds: Vec<Option<SectionBounds>>, // anchor geometry, indexed like the registry
    active_index: usize,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<I: SectionKey> Scrollspy<I> {
    /// Creates a new engine from options.
    ///
    /// If `options.initial_viewport` and/or `options.initial_offset` are set, those values are
    /// applied immediately, so a page mounted mid-scroll selects the correct section as soon as
    /// the first measurement batch arrives.
    pub fn new(options: ScrollspyOptions<I>) -> Self {
        let viewport_size = options.initial_viewport.unwrap_or_default();
        let scroll_offset = options.initial_offset.resolve();
        spy_debug!(
            sections = options.sections.len(),
            enabled = options.enabled,
            "Scrollspy::new"
        );
        let mut bounds = Vec::new();
        bounds.resize(options.sections.len(), None);
        let mut s = Self {
            viewport_size,
            content_size: 0,
            scroll_offset,
            is_scrolling: false,
            last_scroll_event_ms: None,
            bounds,
            active_index: 0,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        s.refresh_active();
        s
    }

    pub fn options(&self) -> &ScrollspyOptions<I> {
        &self.options
    }

    fn reset_to_initial(&mut self) {
        self.viewport_size = self.options.initial_viewport.unwrap_or_default();
        self.content_size = 0;
        self.scroll_offset = self.options.initial_offset.resolve();
        self.is_scrolling = false;
        self.last_scroll_event_ms = None;
        self.active_index = 0;
    }

    fn clear_to_disabled(&mut self) {
        self.viewport_size = 0;
        self.content_size = 0;
        self.scroll_offset = self.options.initial_offset.resolve();
        self.is_scrolling = false;
        self.last_scroll_event_ms = None;
        self.active_index = 0;
    }

    pub fn set_options(&mut self, options: ScrollspyOptions<I>) {
        let was_enabled = self.options.enabled;
        let sections_changed = self.options.sections != options.sections;
        let prev_active = self.active_id().cloned();
        self.options = options;
        spy_trace!(
            sections = self.options.sections.len(),
            enabled = self.options.enabled,
            "Scrollspy::set_options"
        );

        if !self.options.enabled {
            self.clear_to_disabled();
        } else if !was_enabled {
            self.reset_to_initial();
        }
        if sections_changed {
            self.apply_section_reset(prev_active);
        }

        self.refresh_active();
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    ///
    /// This is useful when you want to update multiple options at once while letting the engine
    /// decide what needs to be reset (registry replacement, enable/disable transitions).
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollspyOptions<I>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Scrollspy<I>, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_initial_offset(&mut self, initial_offset: u64) {
        self.options.initial_offset = InitialOffset::Value(initial_offset);
        self.notify();
    }

    pub fn set_initial_offset_provider(
        &mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) {
        self.options.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self.notify();
    }

    pub fn set_use_scrollend_event(&mut self, use_scrollend_event: bool) {
        self.options.use_scrollend_event = use_scrollend_event;
        self.notify();
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.options.is_scrolling_reset_delay_ms = delay_ms;
        self.notify();
    }

    pub fn set_nav_offset(&mut self, nav_offset: u32) {
        if self.options.nav_offset == nav_offset {
            return;
        }
        self.options.nav_offset = nav_offset;
        self.notify();
    }

    pub fn set_observe_margins(&mut self, top: u32, bottom: u32) {
        if self.options.observe_margin_top == top && self.options.observe_margin_bottom == bottom {
            return;
        }
        self.options.observe_margin_top = top;
        self.options.observe_margin_bottom = bottom;
        self.refresh_active();
        self.notify();
    }

    pub fn set_visibility_threshold(&mut self, visibility_threshold: f32) {
        if self.options.visibility_threshold == visibility_threshold {
            return;
        }
        self.options.visibility_threshold = visibility_threshold;
        self.refresh_active();
        self.notify();
    }

    pub fn set_back_to_top_threshold(&mut self, back_to_top_threshold: u64) {
        if self.options.back_to_top_threshold == back_to_top_threshold {
            return;
        }
        self.options.back_to_top_threshold = back_to_top_threshold;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// This is recommended for UI adapters: on a typical frame, you might update the viewport,
    /// content height, and scroll offset together. Without batching, each setter may trigger
    /// `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    // --- Section registry ---

    pub fn sections(&self) -> &[Section<I>] {
        &self.options.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section<I>> {
        self.options.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.options.sections.len()
    }

    /// Returns the registry index for `id`. The first match wins.
    pub fn section_index(&self, id: &I) -> Option<usize> {
        self.options.sections.iter().position(|s| &s.id == id)
    }

    /// Replaces the section registry wholesale (e.g. on a locale switch).
    ///
    /// All measurements are discarded; stale geometry from the previous layout must never
    /// select a section of the new registry. The active section is carried over by id when the
    /// new registry still contains it; otherwise it resets to the first section.
    pub fn set_sections(&mut self, sections: Vec<Section<I>>) {
        let prev_active = self.active_id().cloned();
        spy_debug!(sections = sections.len(), "set_sections");
        self.options.sections = sections;
        self.apply_section_reset(prev_active);
        self.notify();
    }

    fn apply_section_reset(&mut self, prev_active: Option<I>) {
        self.bounds.clear();
        self.bounds.resize(self.options.sections.len(), None);
        self.active_index = prev_active
            .and_then(|id| self.section_index(&id))
            .unwrap_or(0);
    }

    // --- Active section ---

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_id(&self) -> Option<&I> {
        self.active_section().map(|s| &s.id)
    }

    pub fn active_section(&self) -> Option<&Section<I>> {
        self.options.sections.get(self.active_index)
    }

    /// Sets the active section directly (e.g. an optimistic update when a navigation item is
    /// clicked, ahead of the next geometry-driven confirmation). Out-of-range indexes are
    /// ignored.
    pub fn set_active_index(&mut self, index: usize) {
        if index >= self.options.sections.len() {
            spy_debug!(index, "set_active_index: out of range");
            return;
        }
        if self.active_index == index {
            return;
        }
        self.active_index = index;
        self.notify();
    }

    /// Sets the active section by id. Returns `false` (and mutates nothing) when the id is not
    /// in the registry.
    pub fn set_active_id(&mut self, id: &I) -> bool {
        let Some(index) = self.section_index(id) else {
            spy_debug!(id = ?id, "set_active_id: unknown section");
            return false;
        };
        self.set_active_index(index);
        true
    }

    /// Reselects the active section from current geometry.
    ///
    /// When no measured section intersects the observed region, the previous active section is
    /// retained; the highlight never clears to "none".
    fn refresh_active(&mut self) {
        if !self.options.enabled {
            return;
        }
        let Some(index) = self.selected_index() else {
            return;
        };
        if index != self.active_index {
            spy_trace!(index, "active section changed");
            self.active_index = index;
        }
    }

    /// Selection rule: among measured sections sufficiently visible inside the observed region
    /// (the viewport narrowed by the observe margins), pick the one whose top edge is nearest
    /// the top of the region. Exact ties resolve to the earliest registry index.
    fn selected_index(&self) -> Option<usize> {
        let region_top = self
            .scroll_offset
            .saturating_add(self.options.observe_margin_top as u64);
        let region_bottom = self
            .scroll_offset
            .saturating_add(self.viewport_size as u64)
            .saturating_sub(self.options.observe_margin_bottom as u64);
        if region_bottom <= region_top {
            return None;
        }

        let threshold = self.options.visibility_threshold.clamp(0.0, 1.0);
        let mut best: Option<(usize, u64)> = None;
        for (index, bounds) in self.bounds.iter().enumerate() {
            let Some(bounds) = bounds else {
                continue;
            };
            if !Self::qualifies(*bounds, region_top, region_bottom, threshold) {
                continue;
            }
            let distance = bounds.start.abs_diff(region_top);
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }

    fn qualifies(
        bounds: SectionBounds,
        region_top: u64,
        region_bottom: u64,
        threshold: f32,
    ) -> bool {
        if bounds.size == 0 {
            // Zero-height anchors qualify when their edge lies inside the region.
            return (region_top..region_bottom).contains(&bounds.start);
        }
        let overlap_start = bounds.start.max(region_top);
        let overlap_end = bounds.end().min(region_bottom);
        if overlap_end <= overlap_start {
            return false;
        }
        let overlap = overlap_end - overlap_start;
        overlap as f32 >= threshold * bounds.size as f32
    }

    // --- Enablement ---

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.clear_to_disabled();
        } else {
            self.reset_to_initial();
            self.refresh_active();
        }
        self.notify();
    }

    // --- Scrolling state ---

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        if self.options.use_scrollend_event {
            return;
        }
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    // --- Geometry ---

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        if self.viewport_size == size {
            return;
        }
        self.viewport_size = size;
        self.refresh_active();
        self.notify();
    }

    /// Total scrollable content height (the document height, not the viewport).
    pub fn content_size(&self) -> u64 {
        self.content_size
    }

    pub fn set_content_size(&mut self, size: u64) {
        if self.content_size == size {
            return;
        }
        self.content_size = size;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        self.scroll_offset = offset;
        self.refresh_active();
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag), and marks the engine
    /// as scrolling. Ignored while disabled.
    pub fn apply_scroll_offset_event(&mut self, offset: u64, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        spy_trace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|s| {
            s.set_scroll_offset(offset);
            s.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_offset_event`, but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: u64, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        spy_trace!(offset, now_ms, "apply_scroll_offset_event_clamped");
        self.batch_update(|s| {
            s.set_scroll_offset_clamped(offset);
            s.notify_scroll_event(now_ms);
        });
    }

    /// Applies viewport, content, and scroll offset in a single coalesced update.
    ///
    /// This is the recommended entry point for UI adapters that receive scroll events along with
    /// updated page geometry.
    pub fn apply_scroll_frame(&mut self, viewport: u32, content: u64, offset: u64, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        spy_trace!(viewport, content, offset, now_ms, "apply_scroll_frame");
        self.batch_update(|s| {
            s.set_viewport_size(viewport);
            s.set_content_size(content);
            s.set_scroll_offset(offset);
            s.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_frame`, but clamps the offset.
    pub fn apply_scroll_frame_clamped(
        &mut self,
        viewport: u32,
        content: u64,
        offset: u64,
        now_ms: u64,
    ) {
        if !self.options.enabled {
            return;
        }
        spy_trace!(viewport, content, offset, now_ms, "apply_scroll_frame_clamped");
        self.batch_update(|s| {
            s.set_viewport_size(viewport);
            s.set_content_size(content);
            s.set_scroll_offset_clamped(offset);
            s.notify_scroll_event(now_ms);
        });
    }

    // --- Measurements ---

    /// Records the measured anchor geometry for the section at `index`.
    ///
    /// This is how intersection-observer callbacks and layout passes feed the engine. Indexes
    /// outside the registry are ignored; re-measuring identical bounds is a no-op and does not
    /// notify.
    pub fn measure_section(&mut self, index: usize, bounds: SectionBounds) {
        if index >= self.bounds.len() {
            return;
        }
        if self.bounds[index] == Some(bounds) {
            return;
        }
        spy_trace!(index, start = bounds.start, size = bounds.size, "measure_section");
        self.bounds[index] = Some(bounds);
        self.refresh_active();
        self.notify();
    }

    /// Records measured anchor geometry by section id. Returns `false` when the id is not in
    /// the registry.
    pub fn measure_section_by_id(&mut self, id: &I, bounds: SectionBounds) -> bool {
        let Some(index) = self.section_index(id) else {
            spy_debug!(id = ?id, "measure_section_by_id: unknown section");
            return false;
        };
        self.measure_section(index, bounds);
        true
    }

    /// Records a batch of measurements with a single coalesced notification.
    pub fn measure_many(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, SectionBounds)>,
    ) {
        let mut changed = false;
        for (index, bounds) in measurements {
            if index >= self.bounds.len() {
                continue;
            }
            if self.bounds[index] == Some(bounds) {
                continue;
            }
            self.bounds[index] = Some(bounds);
            changed = true;
        }
        if !changed {
            return;
        }
        self.refresh_active();
        self.notify();
    }

    pub fn section_bounds(&self, index: usize) -> Option<SectionBounds> {
        self.bounds.get(index).copied().flatten()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.section_bounds(index).is_some()
    }

    /// Discards all measurements (e.g. before a full relayout).
    pub fn reset_measurements(&mut self) {
        for b in &mut self.bounds {
            *b = None;
        }
        self.notify();
    }

    // --- Derived presentation state ---

    /// Scroll progress through the page as a percentage in `[0, 100]`.
    ///
    /// Returns `0.0` whenever the content fits inside the viewport (never NaN or infinite), and
    /// clamps overshoot from elastic scrolling.
    pub fn scroll_progress(&self) -> f32 {
        if !self.options.enabled {
            return 0.0;
        }
        let max = self.max_scroll_offset();
        if max == 0 {
            return 0.0;
        }
        let progress = (self.scroll_offset as f32 / max as f32) * 100.0;
        progress.clamp(0.0, 100.0)
    }

    /// Whether a back-to-top control should be shown. Strict: `false` at exactly the threshold.
    pub fn back_to_top_visible(&self) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.scroll_offset > self.options.back_to_top_threshold
    }

    pub fn max_scroll_offset(&self) -> u64 {
        if !self.options.enabled {
            return self.options.initial_offset.resolve();
        }
        self.content_size.saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    // --- Navigation targets ---

    /// Computes the scroll offset that brings the section at `index` under the sticky nav bar:
    /// the section's start minus `nav_offset`, saturating at zero and clamped to the maximum
    /// scroll offset.
    ///
    /// Returns `None` while disabled, for out-of-range indexes, and for unmeasured sections;
    /// navigating to a missing anchor is a silent no-op.
    pub fn scroll_target(&self, index: usize) -> Option<u64> {
        if !self.options.enabled {
            return None;
        }
        let bounds = self.section_bounds(index)?;
        let target = bounds.start.saturating_sub(self.options.nav_offset as u64);
        Some(self.clamp_scroll_offset(target))
    }

    pub fn scroll_target_for_id(&self, id: &I) -> Option<u64> {
        let index = self.section_index(id)?;
        self.scroll_target(index)
    }

    // --- Snapshots ---

    /// Returns a lightweight snapshot of the current viewport state.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            height: self.viewport_size,
        }
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of viewport + scroll + active-section state.
    pub fn page_state(&self) -> PageState<I> {
        PageState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
            active: self.active_id().cloned(),
        }
    }

    /// Restores viewport geometry from a previously captured snapshot.
    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.set_viewport_size(viewport.height);
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// The offset is applied as-is: content height is usually unknown at restore time, so
    /// clamping happens on the next clamped geometry update instead. When `scroll.is_scrolling`
    /// is `true`, the internal scrolling timers are updated as if a scroll event happened at
    /// `now_ms`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState, now_ms: u64) {
        if scroll.is_scrolling {
            self.apply_scroll_offset_event(scroll.offset, now_ms);
            return;
        }
        self.batch_update(|s| {
            s.set_scroll_offset(scroll.offset);
            s.set_is_scrolling(false);
        });
    }

    /// Restores viewport, scroll, and active-section state from a previously captured snapshot.
    ///
    /// The active id is re-resolved against the live registry; ids no longer present are
    /// ignored. Typically called on a fresh mount before any measurements arrive, so the
    /// restored highlight holds until geometry confirms or corrects it.
    pub fn restore_page_state(&mut self, page: PageState<I>, now_ms: u64) {
        self.batch_update(|s| {
            s.set_viewport_size(page.viewport.height);
            s.restore_scroll_state(page.scroll, now_ms);
            if let Some(id) = &page.active {
                s.set_active_id(id);
            }
        });
    }
}
