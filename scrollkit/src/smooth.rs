use crate::ScrollMetrics;

/// Animated scrolling for hosts without a native smooth scroll.
///
/// Requests made while an animation runs accumulate: the new target is the previous target
/// plus the new delta, clamped to the scroll range, and the glide restarts from the offset
/// reached so far. User scrolling (wheel, drag) should call [`SmoothScroll::cancel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    glide: Option<Glide>,
    duration_ms: u64,
}

/// One in-flight scroll from `from` to `to`, started at `started_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Glide {
    from: f64,
    to: f64,
    started_ms: u64,
}

impl Glide {
    fn progress(&self, now_ms: u64, duration_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        (elapsed as f64 / duration_ms as f64).min(1.0)
    }

    fn offset_at(&self, now_ms: u64, duration_ms: u64) -> f64 {
        let eased = ease_in_out(self.progress(now_ms, duration_ms));
        self.from + (self.to - self.from) * eased
    }
}

/// Cubic ease-in-out, close to the browser's default smooth scroll curve.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t.powi(3)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_MS)
    }
}

impl SmoothScroll {
    pub const DEFAULT_DURATION_MS: u64 = 300;

    pub fn new(duration_ms: u64) -> Self {
        Self {
            glide: None,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    pub fn target(&self) -> Option<f64> {
        self.glide.map(|g| g.to)
    }

    /// Starts or extends a glide by `delta`. Returns the clamped target offset.
    pub fn scroll_by(&mut self, metrics: ScrollMetrics, delta: f64, now_ms: u64) -> f64 {
        let (from, base) = match self.glide {
            Some(g) => (g.offset_at(now_ms, self.duration_ms), g.to),
            None => (metrics.scroll_left, metrics.scroll_left),
        };
        let to = metrics.clamp_scroll_left(base + delta);
        ktrace!(from, to, now_ms, "SmoothScroll::scroll_by");
        self.glide = Some(Glide {
            from,
            to,
            started_ms: now_ms,
        });
        to
    }

    /// Advances the animation.
    ///
    /// Returns the offset to apply, or `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let glide = self.glide?;
        if glide.progress(now_ms, self.duration_ms) >= 1.0 {
            self.glide = None;
            return Some(glide.to);
        }
        Some(glide.offset_at(now_ms, self.duration_ms))
    }

    /// Drops a running animation. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_animating = self.glide.take().is_some();
        if was_animating {
            kdebug!("SmoothScroll::cancel");
        }
        was_animating
    }
}
