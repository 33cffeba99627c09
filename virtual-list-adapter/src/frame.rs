use virtual_list::FrameScheduler;

/// A [`FrameScheduler`] for hosts that drive their own frame loop.
///
/// Requests are latched and consumed by `poll`. With a minimum interval, `poll` also acts as
/// the fixed-interval timer fallback for platforms without a next-paint primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameQueue {
    requested: bool,
    min_interval_ms: Option<u64>,
    last_frame_ms: Option<u64>,
    frames: u64,
}

impl FrameQueue {
    /// A queue whose frames are due on the very next poll.
    pub fn next_frame() -> Self {
        Self::default()
    }

    /// A queue that runs at most one frame every `interval_ms`.
    pub fn with_min_interval(interval_ms: u64) -> Self {
        Self {
            min_interval_ms: Some(interval_ms.max(1)),
            ..Self::default()
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Number of frames handed out so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns `true` (and clears the request) when a requested frame is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.requested {
            return false;
        }
        if let (Some(interval), Some(last)) = (self.min_interval_ms, self.last_frame_ms) {
            if now_ms.saturating_sub(last) < interval {
                return false;
            }
        }
        self.requested = false;
        self.last_frame_ms = Some(now_ms);
        self.frames = self.frames.saturating_add(1);
        true
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}
