//! Animated stat counter model.
//!
//! A counter climbs from zero in fixed steps and snaps exactly to its target.
//! The model is pure; the GUI drives it from a per-element async tick loop,
//! and dropping that loop cancels the animation. Starting a new animation for
//! the same element replaces the loop, so a stale timer can never race a
//! newer one.

/// Number of ticks a full animation takes.
pub const TICKS: u64 = 60;
/// Delay between ticks, in milliseconds.
pub const TICK_MS: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    current: u64,
    target: u64,
    step: u64,
}

impl Counter {
    /// Counter for `target`, stepping so the climb finishes in `TICKS` ticks.
    pub fn new(target: u64) -> Self {
        let step = target.div_ceil(TICKS).max(1);
        Counter { current: 0, target, step }
    }

    /// Advance one tick and return the value to display. Snaps exactly to
    /// the target on the final tick; further ticks are no-ops.
    pub fn tick(&mut self) -> u64 {
        if self.current < self.target {
            self.current = self.current.saturating_add(self.step).min(self.target);
        }
        self.current
    }

    /// True once the target value is reached (immediately for target 0).
    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_target_is_done_immediately() {
        let c = Counter::new(0);
        assert!(c.done());
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn reaches_target_exactly_and_stops() {
        let mut c = Counter::new(1000);
        let mut last = 0;
        let mut ticks = 0;
        while !c.done() {
            last = c.tick();
            ticks += 1;
            assert!(ticks <= TICKS + 1, "animation never settled");
        }
        assert_eq!(last, 1000);
        // Further ticks must not move the value.
        assert_eq!(c.tick(), 1000);
        assert_eq!(c.tick(), 1000);
    }

    #[test]
    fn small_targets_step_by_one() {
        let mut c = Counter::new(3);
        assert_eq!(c.tick(), 1);
        assert_eq!(c.tick(), 2);
        assert_eq!(c.tick(), 3);
        assert!(c.done());
    }

    #[test]
    fn never_overshoots() {
        let mut c = Counter::new(1_234_567);
        let mut prev = 0;
        while !c.done() {
            let v = c.tick();
            assert!(v > prev || v == c.target());
            assert!(v <= c.target());
            prev = v;
        }
    }
}
