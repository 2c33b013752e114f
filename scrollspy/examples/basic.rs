// Example: section highlighting for a single-page resume layout.
use scrollspy::{Scrollspy, ScrollspyOptions, Section, SectionBounds};

fn main() {
    let sections = vec![
        Section::new(String::from("about"), "About"),
        Section::new(String::from("skills"), "Skills"),
        Section::new(String::from("projects"), "Projects"),
        Section::new(String::from("education"), "Education"),
        Section::new(String::from("experience"), "Experience"),
        Section::new(String::from("contact"), "Contact"),
    ];
    let options = ScrollspyOptions::new(sections)
        .with_initial_viewport(Some(900))
        .with_nav_offset(80)
        .with_visibility_threshold(0.3);
    let mut spy = Scrollspy::new(options);

    // Stack the sections top to bottom, like a layout pass would report them.
    let heights: [u32; 6] = [900, 1_200, 1_600, 800, 1_100, 700];
    let mut top = 0u64;
    let mut measurements = Vec::new();
    for (index, height) in heights.iter().enumerate() {
        measurements.push((index, SectionBounds::new(top, *height)));
        top += u64::from(*height);
    }
    spy.set_content_size(top);
    spy.measure_many(measurements);

    // Scroll through the page and watch the highlight follow.
    let mut now_ms = 0u64;
    for offset in (0..=spy.max_scroll_offset()).step_by(600) {
        spy.apply_scroll_offset_event(offset, now_ms);
        now_ms += 16;
        println!(
            "offset={:>5} active={:?} progress={:>5.1}% back_to_top={}",
            offset,
            spy.active_id(),
            spy.scroll_progress(),
            spy.back_to_top_visible(),
        );
    }

    // A nav click resolves to a scroll destination 80 px above the section.
    let target = spy.scroll_target_for_id(&String::from("projects"));
    println!("click 'projects' -> scroll to {:?}", target);
}
