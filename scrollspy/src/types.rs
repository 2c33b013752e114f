use alloc::string::String;

/// Default section identifier type.
pub type SectionId = String;

/// Measured geometry of a section along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionBounds {
    /// Distance from the top of the content to the top of the section.
    pub start: u64,
    /// Height of the section.
    pub size: u32,
}

impl SectionBounds {
    pub const fn new(start: u64, size: u32) -> Self {
        Self { start, size }
    }

    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
