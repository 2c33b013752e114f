/// Handle for one scheduled frame callback of a [`FrameSlot`].
///
/// A token fires at most once, and only while it is still the slot's current token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(u64);

/// A single-slot frame scheduler for coalescing event bursts.
///
/// UI adapters typically receive many scroll or resize events per frame but only want to run the
/// engine update once. The pattern is: on every event call [`schedule`](Self::schedule) and hand
/// the token to the host's frame callback (e.g. `requestAnimationFrame`); in the callback, call
/// [`try_fire`](Self::try_fire) and do the work only when it returns `true`. Scheduling again
/// before the callback ran supersedes the earlier token, so a burst of events collapses into a
/// single update.
#[derive(Clone, Debug, Default)]
pub struct FrameSlot {
    counter: u64,
    pending: Option<u64>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules work for the next frame and returns its token.
    ///
    /// Any previously scheduled token is invalidated.
    pub fn schedule(&mut self) -> FrameToken {
        self.counter = self.counter.wrapping_add(1);
        self.pending = Some(self.counter);
        FrameToken(self.counter)
    }

    /// Drops the pending token, if any. Nothing fires until the next `schedule`.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes `token` if it is the slot's current one.
    ///
    /// Returns `true` exactly once per scheduled token. Superseded, cancelled, and already-fired
    /// tokens return `false`.
    pub fn try_fire(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
