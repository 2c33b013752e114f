// Example: swapping the section registry when the page language changes.
//
// Ids are stable across locales; only the labels differ. The active section
// is carried over by id, while measurements are discarded because a language
// switch reflows the page.
use scrollspy::{Scrollspy, ScrollspyOptions, Section, SectionBounds};

fn registry(pairs: &[(&str, &str)]) -> Vec<Section> {
    pairs
        .iter()
        .map(|(id, label)| Section::new(String::from(*id), *label))
        .collect()
}

fn measure(spy: &mut Scrollspy, heights: &[u32]) {
    let mut top = 0u64;
    let mut measurements = Vec::new();
    for (index, height) in heights.iter().enumerate() {
        measurements.push((index, SectionBounds::new(top, *height)));
        top += u64::from(*height);
    }
    spy.set_content_size(top);
    spy.measure_many(measurements);
}

fn main() {
    let english = registry(&[
        ("about", "About"),
        ("skills", "Skills"),
        ("projects", "Projects"),
        ("contact", "Contact"),
    ]);
    let thai = registry(&[
        ("about", "เกี่ยวกับ"),
        ("skills", "ทักษะ"),
        ("projects", "โปรเจกต์"),
        ("contact", "ติดต่อ"),
    ]);

    let mut spy = Scrollspy::new(
        ScrollspyOptions::new(english).with_initial_viewport(Some(800)),
    );
    measure(&mut spy, &[900, 1_100, 1_400, 700]);

    spy.apply_scroll_offset_event(1_000, 0);
    println!("en: active={:?}", spy.active_id());

    // Switch to Thai. The highlight stays on the same id even though the
    // registry object changed and the layout is not measured yet.
    spy.set_sections(thai);
    println!(
        "th: active={:?} label={:?} measured={}",
        spy.active_id(),
        spy.active_section().map(|s| s.label.as_str()),
        spy.is_measured(1),
    );

    // The reflowed layout comes in and selection works again.
    measure(&mut spy, &[950, 1_150, 1_450, 750]);
    println!(
        "remeasured: active={:?} anchor={:?}",
        spy.active_id(),
        spy.active_section().map(|s| s.anchor_id()),
    );
}
