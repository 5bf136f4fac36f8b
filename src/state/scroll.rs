// Scroll state - viewport offset tracking and the eased scroll animation
use crate::layout;
use std::time::{Duration, Instant};

/// Tracks the page's vertical scroll offset, fed once per frame from the
/// scroll area's output. The navigation bar reads `past_threshold` to
/// switch between its transparent and opaque looks.
pub struct ScrollObserver {
    offset: f32,
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    pub fn note_offset(&mut self, y: f32) {
        self.offset = y;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Strictly greater than the threshold; no hysteresis band.
    pub fn past_threshold(&self) -> bool {
        self.offset > layout::NAV_SOLID_THRESHOLD
    }
}

/// One in-flight animated scroll. A new navigation replaces the whole
/// animation, retargeting from wherever the offset currently is.
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
            duration,
        }
    }

    /// Zero-duration animation: lands on the target on its first frame.
    pub fn instant(to: f32) -> Self {
        Self::new(to, to, Duration::ZERO)
    }

    pub fn offset_now(&self) -> f32 {
        self.sample(self.progress())
    }

    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased offset at progress `t` in `[0, 1]`.
    pub fn sample(&self, t: f32) -> f32 {
        self.from + (self.to - self.from) * ease_in_out(t)
    }
}

/// Cubic ease-in-out over `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let mut observer = ScrollObserver::new();
        assert!(!observer.past_threshold());

        observer.note_offset(50.0);
        assert!(!observer.past_threshold());

        observer.note_offset(51.0);
        assert!(observer.past_threshold());

        observer.note_offset(50.0);
        assert!(!observer.past_threshold());
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_sample_endpoints() {
        let anim = ScrollAnimation::new(100.0, 900.0, Duration::from_millis(400));
        assert_eq!(anim.sample(0.0), 100.0);
        assert_eq!(anim.sample(1.0), 900.0);
    }

    #[test]
    fn test_instant_animation_is_finished() {
        let anim = ScrollAnimation::instant(300.0);
        assert!(anim.finished());
        assert_eq!(anim.offset_now(), 300.0);
    }
}
