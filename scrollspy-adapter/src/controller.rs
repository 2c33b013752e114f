use scrollspy::{Scrollspy, ScrollspyOptions, SectionKey};

use crate::{NavOptions, Tween};

/// A framework-neutral controller that wraps a `scrollspy::Scrollspy` and provides the common
/// adapter workflows (nav-click smooth scrolling, scroll event forwarding).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_content_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for animated scrolling and `is_scrolling` debouncing)
///
/// For UI scroll containers (e.g. DOM), you can use the returned offset from `tick()` to set the
/// real scroll position, while keeping the engine state in sync.
#[derive(Clone, Debug)]
pub struct Controller<I = scrollspy::SectionId> {
    spy: Scrollspy<I>,
    nav: NavOptions,
    tween: Option<Tween>,
}

impl<I: SectionKey> Controller<I> {
    pub fn new(options: ScrollspyOptions<I>) -> Self {
        Self::with_nav_options(options, NavOptions::default())
    }

    pub fn with_nav_options(options: ScrollspyOptions<I>, nav: NavOptions) -> Self {
        Self {
            spy: Scrollspy::new(options),
            nav,
            tween: None,
        }
    }

    pub fn from_scrollspy(spy: Scrollspy<I>) -> Self {
        Self {
            spy,
            nav: NavOptions::default(),
            tween: None,
        }
    }

    pub fn scrollspy(&self) -> &Scrollspy<I> {
        &self.spy
    }

    pub fn scrollspy_mut(&mut self) -> &mut Scrollspy<I> {
        &mut self.spy
    }

    pub fn into_scrollspy(self) -> Scrollspy<I> {
        self.spy
    }

    pub fn nav_options(&self) -> NavOptions {
        self.nav
    }

    pub fn set_nav_options(&mut self, nav: NavOptions) {
        self.nav = nav;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset the running animation is heading to, if any.
    pub fn animation_target(&self) -> Option<u64> {
        self.tween.map(|t| t.to)
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_size(&mut self, height: u32) {
        self.spy.set_viewport_size(height);
    }

    pub fn on_content_size(&mut self, content_size: u64) {
        self.spy.set_content_size(content_size);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any running animation: user input wins.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        if self.tween.is_some() {
            nav_trace!(scroll_offset, "user scroll cancels animation");
        }
        self.cancel_animation();
        self.spy.apply_scroll_offset_event(scroll_offset, now_ms);
    }

    /// Advances the controller.
    ///
    /// - If an animation is running, updates `scroll_offset` and returns the new offset.
    /// - Otherwise, runs `is_scrolling` debouncing and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let Some(tween) = self.tween else {
            self.spy.update_scrolling(now_ms);
            return None;
        };

        let off = tween.sample(now_ms);
        self.spy.apply_scroll_offset_event_clamped(off, now_ms);

        if tween.is_done(now_ms) {
            self.tween = None;
            self.spy.set_is_scrolling(false);
        }

        Some(self.spy.scroll_offset())
    }

    /// Handles a nav click: highlights the section immediately and starts a smooth scroll
    /// toward its anchor.
    ///
    /// Returns the clamped target offset. An unknown `id` changes nothing and returns `None`.
    /// A known but unmeasured section keeps the highlight and returns `None` without scrolling;
    /// the observer takes back over once real geometry and scroll events arrive.
    pub fn navigate_to(&mut self, id: &I, now_ms: u64) -> Option<u64> {
        let Some(index) = self.spy.section_index(id) else {
            nav_debug!(?id, "navigate_to: unknown section id");
            return None;
        };
        self.spy.set_active_index(index);
        let Some(target) = self.spy.scroll_target(index) else {
            nav_debug!(?id, "navigate_to: section not measured, highlight only");
            return None;
        };
        Some(self.start_animation(target, now_ms))
    }

    /// Smooth-scrolls back to the top of the page.
    ///
    /// The active section is not written here; the observer updates it as the page scrolls
    /// back past the sections.
    pub fn navigate_to_top(&mut self, now_ms: u64) -> u64 {
        self.start_animation(0, now_ms)
    }

    /// Applies a scroll-to-offset immediately (no animation).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: u64, now_ms: u64) -> u64 {
        self.cancel_animation();
        self.spy.apply_scroll_offset_event_clamped(offset, now_ms);
        self.spy.scroll_offset()
    }

    fn start_animation(&mut self, target: u64, now_ms: u64) -> u64 {
        let to = self.spy.clamp_scroll_offset(target);
        let from = self.spy.scroll_offset();
        nav_trace!(from, to, now_ms, "start scroll animation");
        self.tween = Some(Tween::new(
            from,
            to,
            now_ms,
            self.nav.duration_ms,
            self.nav.easing,
        ));
        to
    }
}
