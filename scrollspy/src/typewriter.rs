use alloc::string::String;
use alloc::vec::Vec;

/// Timing knobs for [`Typewriter`], all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypewriterTiming {
    /// Delay between typed characters.
    pub type_ms: u64,
    /// Delay between deleted characters.
    pub delete_ms: u64,
    /// How long a fully typed phrase stays on screen.
    pub hold_full_ms: u64,
    /// How long the display stays empty before the next phrase starts.
    pub hold_empty_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 150,
            delete_ms: 50,
            hold_full_ms: 4000,
            hold_empty_ms: 1000,
        }
    }
}

/// Where the typewriter currently is in its type/hold/delete/hold cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypewriterPhase {
    /// Appending one character per tick.
    Typing,
    /// The full phrase is visible.
    HoldFull,
    /// Removing one character per tick.
    Deleting,
    /// The display is empty (prefix only).
    HoldEmpty,
}

/// A clock-driven typewriter that cycles through a list of phrases.
///
/// The engine never sleeps or spawns timers. Instead it publishes a deadline via
/// [`next_due_ms`](Typewriter::next_due_ms); the adapter arms a single timer for that instant
/// and calls [`tick`](Typewriter::tick) when it fires. Ticks that arrive early (or from a timer
/// armed for a superseded deadline) are ignored, so adapters never need to cancel timers.
///
/// Characters are counted as `char`s, not bytes, so multi-byte scripts type and delete one
/// visible character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    prefix: String,
    timing: TypewriterTiming,
    phase: TypewriterPhase,
    phrase_index: usize,
    char_count: usize,
    display: String,
    next_due_ms: Option<u64>,
}

impl Typewriter {
    /// Creates a stopped typewriter over `phrases`.
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        Self {
            phrases,
            prefix: String::new(),
            timing: TypewriterTiming::default(),
            phase: TypewriterPhase::Typing,
            phrase_index: 0,
            char_count: 0,
            display: String::new(),
            next_due_ms: None,
        }
    }

    /// Sets a constant prefix rendered before the animated text (e.g. a prompt like `"> "`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.rebuild_display();
        self
    }

    pub fn with_timing(mut self, timing: TypewriterTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Arms the first tick. With an empty phrase list the typewriter parks instead: the display
    /// shows the prefix only and no deadline is published.
    pub fn start(&mut self, now_ms: u64) {
        if self.phrases.is_empty() {
            self.next_due_ms = None;
            return;
        }
        self.next_due_ms = Some(now_ms.saturating_add(self.timing.type_ms));
    }

    /// Stops the cycle. The display keeps its current text.
    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// The absolute time of the next pending transition, or `None` when stopped or parked.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// The text to render right now: prefix plus the typed portion of the current phrase.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    /// Replaces the phrase list (e.g. on a locale switch) and restarts the cycle from the first
    /// phrase, empty. A running typewriter is re-armed immediately at `now_ms`; a stopped one
    /// stays stopped. An empty list parks the typewriter.
    pub fn set_phrases<S: Into<String>>(
        &mut self,
        phrases: impl IntoIterator<Item = S>,
        now_ms: u64,
    ) {
        let was_running = self.is_running();
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self.phase = TypewriterPhase::Typing;
        self.phrase_index = 0;
        self.char_count = 0;
        self.rebuild_display();
        if self.phrases.is_empty() || !was_running {
            self.next_due_ms = None;
        } else {
            self.next_due_ms = Some(now_ms);
        }
    }

    /// Advances the cycle if the pending deadline has been reached.
    ///
    /// Returns `true` when the display text changed. Ticks before the deadline, or while
    /// stopped, are no-ops; a tick at or past the deadline performs exactly one transition and
    /// arms the next deadline, so a late timer cannot fast-forward the animation.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        if self.phrases.is_empty() {
            self.next_due_ms = None;
            return false;
        }

        match self.phase {
            TypewriterPhase::Typing => {
                let len = self.current_len();
                let changed = self.char_count < len;
                if changed {
                    self.char_count += 1;
                    self.rebuild_display();
                }
                if self.char_count >= len {
                    self.phase = TypewriterPhase::HoldFull;
                    self.next_due_ms = Some(now_ms.saturating_add(self.timing.hold_full_ms));
                } else {
                    self.next_due_ms = Some(now_ms.saturating_add(self.timing.type_ms));
                }
                changed
            }
            TypewriterPhase::HoldFull => {
                self.phase = TypewriterPhase::Deleting;
                self.next_due_ms = Some(now_ms.saturating_add(self.timing.delete_ms));
                false
            }
            TypewriterPhase::Deleting => {
                let changed = self.char_count > 0;
                if changed {
                    self.char_count -= 1;
                    self.rebuild_display();
                }
                if self.char_count == 0 {
                    self.phase = TypewriterPhase::HoldEmpty;
                    self.next_due_ms = Some(now_ms.saturating_add(self.timing.hold_empty_ms));
                } else {
                    self.next_due_ms = Some(now_ms.saturating_add(self.timing.delete_ms));
                }
                changed
            }
            TypewriterPhase::HoldEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                let len = self.current_len();
                let changed = len > 0;
                self.char_count = if changed { 1 } else { 0 };
                self.rebuild_display();
                if self.char_count >= len {
                    self.phase = TypewriterPhase::HoldFull;
                    self.next_due_ms = Some(now_ms.saturating_add(self.timing.hold_full_ms));
                } else {
                    self.phase = TypewriterPhase::Typing;
                    self.next_due_ms = Some(now_ms.saturating_add(self.timing.type_ms));
                }
                changed
            }
        }
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    fn rebuild_display(&mut self) {
        self.display.clear();
        self.display.push_str(&self.prefix);
        if let Some(phrase) = self.phrases.get(self.phrase_index) {
            self.display.extend(phrase.chars().take(self.char_count));
        }
    }
}
