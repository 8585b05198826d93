//! Display-frame coalescing.
//!
//! A pointer drag produces far more move events than the display shows
//! frames. The gate lets the first move in a frame ask the host for a frame
//! callback and folds every later move into that same callback.

/// What the host should do after reporting a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule one frame callback (e.g. the next vsync / animation tick).
    Schedule,
    /// A callback is already pending; nothing to do.
    Coalesced,
    /// No resize is active; the move was dropped.
    Ignored,
}

/// Tracks whether a frame callback is outstanding.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    scheduled: bool,
    coalesced: u64,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request for the next frame.
    pub fn request(&mut self) -> FrameRequest {
        if self.scheduled {
            self.coalesced += 1;
            FrameRequest::Coalesced
        } else {
            self.scheduled = true;
            FrameRequest::Schedule
        }
    }

    /// Consume the pending frame. Returns `false` if none was scheduled.
    pub fn fire(&mut self) -> bool {
        let was_scheduled = self.scheduled;
        self.scheduled = false;
        if was_scheduled && self.coalesced > 0 {
            log::trace!("[frame] coalesced {} moves", self.coalesced);
        }
        self.coalesced = 0;
        was_scheduled
    }

    /// Drop any pending frame without running it.
    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.coalesced = 0;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Moves folded into the pending frame so far.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_asks_for_one_frame() {
        let mut gate = FrameGate::new();
        assert_eq!(gate.request(), FrameRequest::Schedule);
        assert_eq!(gate.request(), FrameRequest::Coalesced);
        assert_eq!(gate.request(), FrameRequest::Coalesced);
        assert_eq!(gate.coalesced(), 2);

        assert!(gate.fire());
        assert!(!gate.fire());
        assert_eq!(gate.request(), FrameRequest::Schedule);
    }
}
