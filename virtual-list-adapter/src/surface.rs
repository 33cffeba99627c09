use virtual_list::{ScrollBehavior, ScrollCommand, ScrollSurface, geometry};

use crate::{Easing, Tween};

/// An in-memory scroll container for hosts without a native one (TUIs, tests, simulations).
///
/// It behaves like a browser scroll element:
/// - commands are clamped to `[0, content_height - viewport_height]`;
/// - `Smooth` commands animate over time, starting at the first `tick` after the command, and a
///   new command retargets a running animation;
/// - offset changes are not reported synchronously: `tick` returns them as scroll events.
#[derive(Clone, Debug)]
pub struct SimulatedSurface {
    offset: u64,
    left: u64,
    content_height: u64,
    viewport_height: u32,
    tween: Option<Tween>,
    // The tween waits for the next tick to learn its start time.
    tween_unstarted: bool,
    smooth_duration_ms: u64,
    easing: Easing,
    now_ms: u64,
    reported: u64,
}

impl SimulatedSurface {
    pub fn new(smooth_duration_ms: u64) -> Self {
        Self {
            offset: 0,
            left: 0,
            content_height: 0,
            viewport_height: 0,
            tween: None,
            tween_unstarted: false,
            smooth_duration_ms,
            easing: Easing::default(),
            now_ms: 0,
            reported: 0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn left(&self) -> u64 {
        self.left
    }

    pub fn content_height(&self) -> u64 {
        self.content_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u64 {
        geometry::max_scroll_offset(self.content_height, self.viewport_height)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether the offset moved since the last reported scroll event.
    pub fn has_unreported_scroll(&self) -> bool {
        self.offset != self.reported
    }

    pub fn set_content_height(&mut self, content_height: u64) {
        self.content_height = content_height;
        self.reclamp();
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
        self.reclamp();
    }

    /// Simulates a user-driven scroll (wheel, drag). Cancels any running animation.
    pub fn user_scroll(&mut self, offset: u64) {
        self.tween = None;
        self.tween_unstarted = false;
        self.offset = offset.min(self.max_offset());
    }

    /// Advances animations to `now_ms`.
    ///
    /// Returns the new offset when it changed since the last report; the caller should forward
    /// it as a scroll event.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.now_ms = self.now_ms.max(now_ms);
        if self.tween_unstarted {
            self.tween_unstarted = false;
            if let Some(tween) = &mut self.tween {
                tween.start_ms = self.now_ms;
            }
        }
        if let Some(tween) = self.tween {
            self.offset = tween.sample(self.now_ms).min(self.max_offset());
            if tween.is_done(self.now_ms) {
                self.tween = None;
            }
        }
        if !self.has_unreported_scroll() {
            return None;
        }
        self.reported = self.offset;
        Some(self.offset)
    }

    fn reclamp(&mut self) {
        let max = self.max_offset();
        if self.offset > max {
            vtrace!(offset = self.offset, max, "SimulatedSurface: clamping offset");
            self.offset = max;
        }
        if let Some(tween) = &mut self.tween {
            tween.to = tween.to.min(max);
        }
    }
}

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self::new(240)
    }
}

impl ScrollSurface for SimulatedSurface {
    fn scroll_to(&mut self, command: ScrollCommand) {
        if let Some(left) = command.left {
            self.left = left;
        }
        let Some(top) = command.top else {
            return;
        };
        let to = top.min(self.max_offset());
        vtrace!(to, behavior = ?command.behavior, "SimulatedSurface::scroll_to");

        match command.behavior {
            ScrollBehavior::Auto => {
                self.tween = None;
                self.tween_unstarted = false;
                self.offset = to;
            }
            ScrollBehavior::Smooth => match &mut self.tween {
                Some(tween) if self.tween_unstarted => tween.to = to,
                Some(tween) => tween.retarget(self.now_ms, to),
                None if to != self.offset => {
                    self.tween = Some(Tween::new(
                        self.offset,
                        to,
                        self.now_ms,
                        self.smooth_duration_ms,
                        self.easing,
                    ));
                    self.tween_unstarted = true;
                }
                None => {}
            },
        }
    }
}
