/// Interpolates a scroll offset over time for smooth scrolling.
///
/// Offsets are interpolated in `f64` so positions deep into very long lists keep pixel
/// precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Offset at `now_ms`. Exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = elapsed as f64 / self.duration_ms as f64;
        let eased = self.easing.sample(t.clamp(0.0, 1.0));

        let from = self.from as f64;
        let delta = self.to as f64 - from;
        // `as` saturates, so a negative intermediate maps to 0.
        (from + delta * eased + 0.5) as u64
    }

    /// Restarts towards `new_to` from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, self.duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutCubic,
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
