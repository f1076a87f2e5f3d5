//! Eased count-up for the live totals.
//!
//! Intermediate values are for display only. The store's counts stay
//! authoritative.

use std::time::{Duration, Instant};

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone)]
pub struct CountAnimator {
    from: usize,
    target: usize,
    displayed: usize,
    started: Option<Instant>,
    duration: Duration,
}

impl CountAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: 0,
            target: 0,
            displayed: 0,
            started: None,
            duration,
        }
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.started.is_some()
    }

    /// Start moving from whatever is on screen now toward `target`.
    pub fn retarget(&mut self, target: usize, now: Instant) {
        self.target = target;
        if self.displayed == target {
            self.started = None;
            return;
        }
        self.from = self.displayed;
        self.started = Some(now);
    }

    /// Advance to `now`. Returns whether the displayed value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        let previous = self.displayed;

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(started).as_secs_f64() / self.duration.as_secs_f64()
        };
        if progress >= 1.0 {
            self.displayed = self.target;
            self.started = None;
        } else {
            let from = self.from as f64;
            let delta = self.target as f64 - from;
            let value = (from + delta * ease_out_cubic(progress)).round();
            self.displayed = value.max(0.0) as usize;
        }
        self.displayed != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_SECOND: Duration = Duration::from_millis(500);

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_counts_up_monotonically() {
        let start = Instant::now();
        let mut anim = CountAnimator::new(HALF_SECOND);
        anim.retarget(40, start);

        let mut last = 0;
        for ms in (0..=550).step_by(50) {
            anim.tick(start + Duration::from_millis(ms));
            assert!(anim.displayed() >= last);
            last = anim.displayed();
        }
        assert_eq!(anim.displayed(), 40);
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_eased_midpoint() {
        let start = Instant::now();
        let mut anim = CountAnimator::new(HALF_SECOND);
        anim.retarget(8, start);
        anim.tick(start + Duration::from_millis(250));
        assert_eq!(anim.displayed(), 7);
    }

    #[test]
    fn test_counts_down() {
        let start = Instant::now();
        let mut anim = CountAnimator::new(HALF_SECOND);
        anim.retarget(10, start);
        anim.tick(start + HALF_SECOND);
        anim.retarget(4, start + HALF_SECOND);
        anim.tick(start + HALF_SECOND * 3);
        assert_eq!(anim.displayed(), 4);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_screen() {
        let start = Instant::now();
        let mut anim = CountAnimator::new(HALF_SECOND);
        anim.retarget(100, start);
        anim.tick(start + Duration::from_millis(100));
        let shown = anim.displayed();
        assert!(shown > 0 && shown < 100);

        anim.retarget(101, start + Duration::from_millis(100));
        anim.tick(start + Duration::from_millis(100));
        assert_eq!(anim.displayed(), shown);
    }

    #[test]
    fn test_same_target_is_noop() {
        let start = Instant::now();
        let mut anim = CountAnimator::new(HALF_SECOND);
        anim.retarget(0, start);
        assert!(!anim.is_animating());
        assert!(!anim.tick(start + HALF_SECOND));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let start = Instant::now();
        let mut anim = CountAnimator::new(Duration::ZERO);
        anim.retarget(5, start);
        assert!(anim.tick(start));
        assert_eq!(anim.displayed(), 5);
    }
}
