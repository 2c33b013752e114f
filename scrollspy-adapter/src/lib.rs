//! Adapter utilities for the `scrollspy` crate.
//!
//! The `scrollspy` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Nav-click smooth scrolling with optimistic highlighting ([`Controller`])
//! - Coalescing scroll/resize event bursts into one update per frame ([`FrameSlot`])
//! - Persisted UI preferences such as dark mode and locale ([`Preferences`])
//!
//! This crate is intentionally framework-agnostic (no DOM/winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod coalesce;
mod controller;
mod prefs;

#[cfg(test)]
mod tests;

pub use animation::{Easing, NavOptions, Tween};
pub use coalesce::{FrameSlot, FrameToken};
pub use controller::Controller;
pub use prefs::{DARK_MODE_KEY, LOCALE_KEY, MemoryStorage, PreferenceStorage, Preferences};
