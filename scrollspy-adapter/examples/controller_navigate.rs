use scrollspy::{ScrollspyOptions, Section, SectionBounds};
use scrollspy_adapter::Controller;

fn main() {
    // Example: nav-click smooth scrolling without holding any UI objects.
    //
    // An adapter would:
    // - call navigate_to(id, now_ms) when a nav link is clicked
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container
    // - call on_scroll(offset, now_ms) when the user scrolls, which cancels the animation
    let sections = vec![
        Section::new(String::from("about"), "About"),
        Section::new(String::from("skills"), "Skills"),
        Section::new(String::from("projects"), "Projects"),
        Section::new(String::from("contact"), "Contact"),
    ];
    let mut c = Controller::new(
        ScrollspyOptions::new(sections).with_nav_offset(80),
    );
    c.on_viewport_size(800);

    let heights: [u32; 4] = [900, 1_100, 1_400, 700];
    let mut top = 0u64;
    let mut measurements = Vec::new();
    for (index, height) in heights.iter().enumerate() {
        measurements.push((index, SectionBounds::new(top, *height)));
        top += u64::from(*height);
    }
    c.on_content_size(top);
    c.scrollspy_mut().measure_many(measurements);

    let target = c.navigate_to(&String::from("projects"), 0);
    println!(
        "click 'projects': target={target:?} active={:?}",
        c.scrollspy().active_id()
    );

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms.is_multiple_of(80) {
                println!("t={now_ms} off={off} active={:?}", c.scrollspy().active_id());
            }
        }

        // Halfway through, the user grabs the wheel. Their scroll wins.
        if now_ms == 192 {
            c.on_scroll(600, now_ms);
            println!("user scroll at t={now_ms}: animation cancelled");
        }
    }

    println!(
        "done: off={} active={:?} is_scrolling={}",
        c.scrollspy().scroll_offset(),
        c.scrollspy().active_id(),
        c.scrollspy().is_scrolling()
    );
}
