use crate::*;

use alloc::vec::Vec;

use scrollspy::{Scrollspy, ScrollspyOptions, Section, SectionBounds};

fn sections(ids: &[&'static str]) -> Vec<Section<&'static str>> {
    ids.iter().map(|id| Section::new(*id, *id)).collect()
}

/// A four-section page: starts 0 / 900 / 2000 / 3400, content size 4100.
fn measured_controller(
    viewport: u32,
    nav_offset: u32,
    heights: &[u32],
) -> Controller<&'static str> {
    let ids = ["about", "skills", "projects", "contact"];
    assert_eq!(heights.len(), ids.len());
    let options = ScrollspyOptions::new(sections(&ids)).with_nav_offset(nav_offset);
    let mut c = Controller::new(options);
    c.on_viewport_size(viewport);

    let mut top = 0u64;
    let mut measurements = Vec::new();
    for (index, height) in heights.iter().enumerate() {
        measurements.push((index, SectionBounds::new(top, *height)));
        top += u64::from(*height);
    }
    c.on_content_size(top);
    c.scrollspy_mut().measure_many(measurements);
    c
}

#[test]
fn navigate_highlights_immediately_and_animates_to_the_anchor() {
    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);

    let to = c.navigate_to(&"projects", 0);
    assert_eq!(to, Some(1_920));
    // The highlight moves before the first animation frame runs.
    assert_eq!(c.scrollspy().active_id(), Some(&"projects"));
    assert!(c.is_animating());
    assert_eq!(c.animation_target(), Some(1_920));

    let mut now_ms = 0u64;
    let mut last = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let off = c.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert_eq!(c.scrollspy().scroll_offset(), 1_920);
    assert!(!c.scrollspy().is_scrolling());
    assert_eq!(c.scrollspy().active_id(), Some(&"projects"));
}

#[test]
fn navigate_to_unknown_id_changes_nothing() {
    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);
    c.on_scroll(1_000, 0);
    let active_before = c.scrollspy().active_index();

    assert_eq!(c.navigate_to(&"blog", 16), None);
    assert!(!c.is_animating());
    assert_eq!(c.scrollspy().active_index(), active_before);
    assert_eq!(c.scrollspy().scroll_offset(), 1_000);
}

#[test]
fn navigate_to_unmeasured_section_highlights_without_scrolling() {
    let options = ScrollspyOptions::new(sections(&["about", "skills", "projects", "contact"]))
        .with_nav_offset(80);
    let mut c = Controller::new(options);
    c.on_viewport_size(800);
    c.on_content_size(2_000);
    // Layout has only reported the first two sections so far.
    c.scrollspy_mut().measure_many([
        (0usize, SectionBounds::new(0, 900)),
        (1, SectionBounds::new(900, 1_100)),
    ]);

    assert_eq!(c.navigate_to(&"contact", 0), None);
    assert_eq!(c.scrollspy().active_id(), Some(&"contact"));
    assert!(!c.is_animating());
    assert_eq!(c.scrollspy().scroll_offset(), 0);
}

#[test]
fn user_scroll_interrupts_the_animation() {
    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);
    c.navigate_to(&"contact", 0);
    c.tick(16);
    c.tick(32);
    assert!(c.is_animating());

    // The user grabs the wheel mid-flight.
    c.on_scroll(500, 40);
    assert!(!c.is_animating());
    assert_eq!(c.scrollspy().scroll_offset(), 500);
    assert!(c.scrollspy().is_scrolling());

    // Later ticks only run the is_scrolling debounce.
    assert_eq!(c.tick(56), None);
    assert!(c.scrollspy().is_scrolling());
    assert_eq!(c.tick(40 + 150), None);
    assert!(!c.scrollspy().is_scrolling());
}

#[test]
fn renavigation_continues_from_the_current_position() {
    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);
    c.navigate_to(&"contact", 0);

    let mut mid = 0u64;
    for now_ms in [16u64, 32, 48, 64] {
        mid = c.tick(now_ms).unwrap();
    }
    assert!(mid > 0);

    // A second nav click replaces the animation without snapping back.
    let to = c.navigate_to(&"skills", 64);
    assert_eq!(to, Some(820));
    assert_eq!(c.animation_target(), Some(820));
    assert_eq!(c.tick(64), Some(mid));
}

#[test]
fn navigate_to_top_does_not_touch_the_active_section() {
    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);
    c.scroll_to_offset(3_300, 0);
    assert_eq!(c.scrollspy().active_id(), Some(&"contact"));

    let to = c.navigate_to_top(16);
    assert_eq!(to, 0);
    // No optimistic write here, unlike navigate_to.
    assert_eq!(c.scrollspy().active_id(), Some(&"contact"));

    let mut now_ms = 16u64;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    assert_eq!(c.scrollspy().scroll_offset(), 0);
    // The observer walked the highlight back up as the page scrolled.
    assert_eq!(c.scrollspy().active_id(), Some(&"about"));
}

#[test]
fn scroll_to_offset_jumps_and_cancels_animation() {
    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);
    c.navigate_to(&"projects", 0);
    assert!(c.is_animating());

    assert_eq!(c.scroll_to_offset(u64::MAX, 16), 3_300);
    assert!(!c.is_animating());
    assert_eq!(c.scrollspy().scroll_offset(), 3_300);
}

#[test]
fn tween_retarget_preserves_the_current_position() {
    let mut t = Tween::new(0, 1_000, 0, 200, Easing::SmoothStep);
    assert_eq!(t.sample(100), 500);

    t.retarget(100, 0, 200);
    assert_eq!(t.sample(100), 500);
    assert_eq!(t.sample(300), 0);
    assert!(t.is_done(300));
}

#[test]
fn tween_lands_exactly_and_clamps_degenerate_durations() {
    let t = Tween::new(100, 40, 0, 0, Easing::Linear);
    assert_eq!(t.sample(0), 100);
    assert!(t.is_done(1));
    assert_eq!(t.sample(1), 40);

    assert_eq!(Tween::new(10, 0, 0, 100, Easing::Linear).sample(100), 0);
}

#[test]
fn easing_curves_are_bounded_and_monotone() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mut last = 0.0f32;
        for i in 0..=100u32 {
            let v = easing.sample(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&v));
            assert!(v >= last);
            last = v;
        }
    }
}

#[test]
fn frame_slot_coalesces_bursts_into_one_callback() {
    let mut slot = FrameSlot::new();
    assert!(!slot.is_scheduled());

    let first = slot.schedule();
    let second = slot.schedule();
    let third = slot.schedule();
    assert!(slot.is_scheduled());

    // Only the latest token fires, and only once.
    assert!(!slot.try_fire(first));
    assert!(!slot.try_fire(second));
    assert!(slot.try_fire(third));
    assert!(!slot.try_fire(third));
    assert!(!slot.is_scheduled());
}

#[test]
fn frame_slot_cancel_drops_the_pending_token() {
    let mut slot = FrameSlot::new();
    let token = slot.schedule();
    slot.cancel();
    assert!(!slot.is_scheduled());
    assert!(!slot.try_fire(token));

    let token = slot.schedule();
    assert!(slot.try_fire(token));
}

#[test]
fn preferences_fall_back_when_missing_or_malformed() {
    let prefs = Preferences::load(MemoryStorage::new(), true, "en");
    assert!(prefs.dark_mode());
    assert_eq!(prefs.locale(), "en");

    let mut storage = MemoryStorage::new();
    storage.set(DARK_MODE_KEY, "yes");
    let prefs = Preferences::load(storage, false, "en");
    assert!(!prefs.dark_mode());

    let mut storage = MemoryStorage::new();
    storage.set(DARK_MODE_KEY, "0");
    storage.set(LOCALE_KEY, "th");
    let prefs = Preferences::load(storage, true, "en");
    assert!(!prefs.dark_mode());
    assert_eq!(prefs.locale(), "th");
}

#[test]
fn preferences_write_through_survives_a_reload() {
    let mut prefs = Preferences::load(MemoryStorage::new(), false, "en");
    assert!(prefs.toggle_dark_mode());
    prefs.set_locale("th");

    let storage = prefs.into_storage();
    assert_eq!(storage.get(DARK_MODE_KEY).as_deref(), Some("1"));
    assert_eq!(storage.get(LOCALE_KEY).as_deref(), Some("th"));

    // Reload with opposite defaults: the stored values win.
    let prefs = Preferences::load(storage, false, "en");
    assert!(prefs.dark_mode());
    assert_eq!(prefs.locale(), "th");
}

#[test]
fn preferences_honor_custom_keys() {
    let mut storage = MemoryStorage::new();
    storage.set("app.dark", "1");
    storage.set("app.lang", "th");
    let mut prefs = Preferences::load_with_keys(storage, "app.dark", "app.lang", false, "en");
    assert!(prefs.dark_mode());
    assert_eq!(prefs.locale(), "th");

    prefs.set_dark_mode(false);
    assert_eq!(prefs.storage().get("app.dark").as_deref(), Some("0"));
    assert_eq!(prefs.storage().get(DARK_MODE_KEY), None);
}

#[test]
fn controller_wraps_and_releases_the_engine() {
    let spy = Scrollspy::new(ScrollspyOptions::new(sections(&["about", "contact"])));
    let mut c = Controller::from_scrollspy(spy);
    assert_eq!(c.nav_options(), NavOptions::default());

    c.set_nav_options(NavOptions {
        duration_ms: 100,
        easing: Easing::Linear,
    });
    assert_eq!(c.nav_options().duration_ms, 100);

    let spy = c.into_scrollspy();
    assert_eq!(spy.section_count(), 2);
}

#[test]
fn example_page_sim_smoke() {
    let mut storage = MemoryStorage::new();
    storage.set(LOCALE_KEY, "th");
    let mut prefs = Preferences::load(storage, false, "en");
    assert_eq!(prefs.locale(), "th");

    let mut c = measured_controller(800, 80, &[900, 1_100, 1_400, 700]);
    let mut slot = FrameSlot::new();

    // A burst of wheel events coalesces into one engine update.
    let mut pending_offset = 0u64;
    let mut token = None;
    for offset in [120u64, 240, 360] {
        pending_offset = offset;
        token = Some(slot.schedule());
    }
    if let Some(token) = token {
        if slot.try_fire(token) {
            c.on_scroll(pending_offset, 0);
        }
    }
    assert_eq!(c.scrollspy().scroll_offset(), 360);

    // Nav click, then ride the animation to the end.
    let to = c.navigate_to(&"projects", 0).unwrap();
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    assert_eq!(c.scrollspy().scroll_offset(), to);
    assert!(c.scrollspy().back_to_top_visible());

    // The floating buttons: back to top plus a theme flip.
    c.navigate_to_top(now_ms);
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    assert!(!c.scrollspy().back_to_top_visible());
    assert!(prefs.toggle_dark_mode());
}
