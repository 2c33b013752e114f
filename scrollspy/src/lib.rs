//! A headless scroll-spy engine for single-page navigation.
//!
//! For adapter-level utilities (smooth-scroll navigation, frame coalescing, persisted
//! preferences), see the `scrollspy-adapter` crate.
//!
//! This crate focuses on the core state and math behind a sticky-nav single-page layout:
//! which section is active for the current scroll position, how far through the page the
//! reader is, whether a back-to-top control should show, and where navigation should scroll
//! to. It also ships a clock-driven [`Typewriter`] for cycling hero taglines.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport size (height)
//! - scroll offset and content height
//! - measured section anchor positions
//! - a monotonic millisecond clock for the scrolling debounce and the typewriter
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod scrollspy;
mod section;
mod state;
mod typewriter;
mod types;


pub use options::{InitialOffset, OnChangeCallback, ScrollspyOptions};
pub use scrollspy::Scrollspy;
pub use section::{Section, SectionKey};
pub use state::{PageState, ScrollState, ViewportState};
pub use typewriter::{Typewriter, TypewriterPhase, TypewriterTiming};
pub use types::{SectionBounds, SectionId};
