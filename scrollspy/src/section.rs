use alloc::format;
use alloc::string::String;

/// Bound required of section identifiers.
///
/// Blanket-implemented; any cloneable, comparable, debuggable type works
/// (strings, integers, enums).
pub trait SectionKey: Clone + PartialEq + core::fmt::Debug {}
impl<I: Clone + PartialEq + core::fmt::Debug> SectionKey for I {}

/// A navigable section of the page: a stable identifier plus a
/// human-readable label for menus and headings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<I = crate::SectionId> {
    pub id: I,
    pub label: String,
}

impl<I> Section<I> {
    pub fn new(id: I, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl<I: core::fmt::Display> Section<I> {
    /// DOM-style anchor id for the section element (`section-<id>`).
    pub fn anchor_id(&self) -> String {
        format!("section-{}", self.id)
    }
}
