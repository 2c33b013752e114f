// Example: a complete single-page resume simulation.
//
// Wires every piece together the way a real adapter would: preferences restored
// from storage, a locale-dependent section registry, coalesced scroll bursts,
// nav-click smooth scrolling, a back-to-top button, and the hero typewriter.
use scrollspy::{ScrollspyOptions, Section, SectionBounds, Typewriter};
use scrollspy_adapter::{
    Controller, FrameSlot, LOCALE_KEY, MemoryStorage, PreferenceStorage, Preferences,
};

const IDS: [&str; 8] = [
    "about",
    "skills",
    "projects",
    "education",
    "experience",
    "internship",
    "interests",
    "contact",
];
const LABELS_EN: [&str; 8] = [
    "About",
    "Skills",
    "Projects",
    "Education",
    "Experience",
    "Internship",
    "Interests",
    "Contact",
];
const LABELS_TH: [&str; 8] = [
    "เกี่ยวกับ",
    "ทักษะ",
    "โปรเจกต์",
    "การศึกษา",
    "ประสบการณ์",
    "ฝึกงาน",
    "ความสนใจ",
    "ติดต่อ",
];
const ROLES_EN: [&str; 5] = [
    "AI Engineer",
    "Software Engineer",
    "Backend Developer",
    "DevOps",
    "Frontend Developer",
];
const ROLES_TH: [&str; 5] = [
    "วิศวกร AI",
    "วิศวกรซอฟต์แวร์",
    "นักพัฒนา Backend",
    "DevOps",
    "นักพัฒนา Frontend",
];

fn registry(labels: &[&str; 8]) -> Vec<Section<&'static str>> {
    IDS.iter()
        .zip(labels.iter())
        .map(|(id, label)| Section::new(*id, *label))
        .collect()
}

fn roles(locale: &str) -> [&'static str; 5] {
    if locale == "th" { ROLES_TH } else { ROLES_EN }
}

fn measure(c: &mut Controller<&'static str>, heights: &[u32; 8]) {
    let mut top = 0u64;
    let mut measurements = Vec::new();
    for (index, height) in heights.iter().enumerate() {
        measurements.push((index, SectionBounds::new(top, *height)));
        top += u64::from(*height);
    }
    c.on_content_size(top);
    c.scrollspy_mut().measure_many(measurements);
}

fn main() {
    // The previous visit left Thai selected.
    let mut storage = MemoryStorage::new();
    storage.set(LOCALE_KEY, "th");
    let mut prefs = Preferences::load(storage, false, "en");
    println!("restored: locale={} dark={}", prefs.locale(), prefs.dark_mode());

    let labels = if prefs.locale() == "th" { &LABELS_TH } else { &LABELS_EN };
    let mut c = Controller::new(
        ScrollspyOptions::new(registry(labels))
            .with_nav_offset(80)
            .with_visibility_threshold(0.3),
    );
    c.on_viewport_size(900);
    measure(&mut c, &[900, 1_200, 1_600, 800, 1_100, 600, 500, 700]);

    let mut tw = Typewriter::new(roles(prefs.locale())).with_prefix("> ");
    let mut slot = FrameSlot::new();
    let mut now_ms = 0u64;
    tw.start(now_ms);

    // The user wheels down for two seconds. Each frame delivers a burst of
    // scroll events; the slot collapses them into one engine update.
    let mut offset = 0u64;
    for _ in 0..125 {
        now_ms += 16;
        let mut pending = offset;
        let mut token = None;
        for step in [7u64, 8, 9] {
            pending = (pending + step).min(c.scrollspy().max_scroll_offset());
            token = Some(slot.schedule());
        }
        if let Some(token) = token {
            if slot.try_fire(token) {
                offset = pending;
                c.on_scroll(offset, now_ms);
            }
        }
        if tw.tick(now_ms) && now_ms.is_multiple_of(320) {
            println!("t={now_ms} hero={:?}", tw.display());
        }
    }
    println!(
        "after wheel: off={} active={:?} progress={:.1}% back_to_top={}",
        c.scrollspy().scroll_offset(),
        c.scrollspy().active_section().map(|s| s.label.as_str()),
        c.scrollspy().scroll_progress(),
        c.scrollspy().back_to_top_visible(),
    );

    // Language toggle: swap the registry and the hero phrases. The active id
    // survives, measurements do not, so the layout reports fresh geometry.
    prefs.set_locale("en");
    c.scrollspy_mut().set_sections(registry(&LABELS_EN));
    tw.set_phrases(roles(prefs.locale()), now_ms);
    measure(&mut c, &[920, 1_180, 1_620, 790, 1_080, 610, 520, 690]);
    println!(
        "after locale switch: active={:?}",
        c.scrollspy().active_section().map(|s| s.label.as_str()),
    );

    // Nav click on "experience", riding the animation to the end.
    let target = c.navigate_to(&"experience", now_ms);
    println!(
        "click 'experience': target={target:?} active={:?}",
        c.scrollspy().active_id()
    );
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        tw.tick(now_ms);
    }

    // Floating buttons: back to top and the theme toggle.
    c.navigate_to_top(now_ms);
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        tw.tick(now_ms);
    }
    let dark = prefs.toggle_dark_mode();
    println!(
        "done: off={} active={:?} dark={dark} hero={:?}",
        c.scrollspy().scroll_offset(),
        c.scrollspy().active_id(),
        tw.display(),
    );
}
