// Example: hero banner role cycler driven by a frame clock.
use scrollspy::{Typewriter, TypewriterTiming};

fn main() {
    let mut tw = Typewriter::new([
        "AI Engineer",
        "Software Engineer",
        "Backend Developer",
        "DevOps",
        "Frontend Developer",
    ])
    .with_prefix("> ")
    .with_timing(TypewriterTiming {
        type_ms: 150,
        delete_ms: 50,
        hold_full_ms: 4_000,
        hold_empty_ms: 1_000,
    });

    let mut now_ms = 0u64;
    tw.start(now_ms);

    // Simulate a 16 ms frame loop until the third role starts typing.
    let mut changes = 0u32;
    while tw.phrase_index() < 2 {
        now_ms += 16;
        if tw.tick(now_ms) {
            changes += 1;
            println!("{:>8} ms {:?} {:?}", now_ms, tw.phase(), tw.display());
        }
    }
    println!("display changed {changes} times over {now_ms} ms");
}
