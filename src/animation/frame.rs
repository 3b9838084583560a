//! Next-frame callback slots addressed by cancellable tokens.
//!
//! This is the crate's stand-in for `requestAnimationFrame`: a component asks
//! for "run me on the next display refresh", keeps the returned token, and
//! either cancels it or receives it back from [`FrameScheduler::begin_frame`].
//! Owners dispatch due tokens to themselves, which keeps all mutation on the
//! single frame timeline without shared ownership.

/// Opaque handle to one pending next-frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

/// Queue of next-frame requests.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<FrameToken>,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request for the next frame.
    pub fn request(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending.push(token);
        token
    }

    /// Drop a pending request. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, token: FrameToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| *t != token);
        self.pending.len() != before
    }

    /// Number of outstanding requests.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Start a frame: hand back every token due now, in request order.
    ///
    /// Requests made while the returned tokens are being handled land in the
    /// following frame.
    pub fn begin_frame(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_fire_once_in_request_order() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        let b = frames.request();
        assert_eq!(frames.begin_frame(), vec![a, b]);
        assert!(frames.begin_frame().is_empty());
    }

    #[test]
    fn cancelled_token_never_fires() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        let b = frames.request();
        assert!(frames.cancel(a));
        assert!(!frames.cancel(a));
        assert_eq!(frames.pending_len(), 1);
        assert_eq!(frames.begin_frame(), vec![b]);
    }

    #[test]
    fn rescheduling_lands_in_next_frame() {
        let mut frames = FrameScheduler::new();
        let _ = frames.request();
        let due = frames.begin_frame();
        assert_eq!(due.len(), 1);
        let again = frames.request();
        assert_ne!(due[0], again);
        assert_eq!(frames.pending_len(), 1);
        assert_eq!(frames.begin_frame(), vec![again]);
    }
}
