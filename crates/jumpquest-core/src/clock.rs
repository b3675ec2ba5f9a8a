use std::thread;
use std::time::{Duration, Instant};

/// Paces the frame loop to a fixed rate by sleeping off whatever is left of
/// each frame's budget. This is the loop's only suspension point.
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_budget: frame_budget(fps),
            last_tick: Instant::now(),
        }
    }

    /// Whether a tick took more than two frame budgets.
    pub fn is_overrun(&self, elapsed: Duration) -> bool {
        elapsed > self.frame_budget * 2
    }

    /// Block until one frame budget has passed since the previous tick.
    /// Returns the time that elapsed between ticks, sleep included.
    pub fn tick(&mut self) -> Duration {
        let busy = self.last_tick.elapsed();
        let sleep = remaining_budget(busy, self.frame_budget);
        if sleep > Duration::ZERO {
            thread::sleep(sleep);
        }
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}

/// Duration of one frame at `fps` (treated as 1 when zero).
pub fn frame_budget(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

/// Time left in the budget after `busy`; zero once over budget.
pub fn remaining_budget(busy: Duration, budget: Duration) -> Duration {
    budget.saturating_sub(busy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_at_sixty_fps() {
        let budget = frame_budget(60);
        assert!(budget > Duration::from_micros(16_600));
        assert!(budget < Duration::from_micros(16_700));
        assert_eq!(frame_budget(0), Duration::from_secs(1));
    }

    #[test]
    fn no_sleep_when_over_budget() {
        let budget = frame_budget(60);
        assert_eq!(remaining_budget(Duration::from_millis(20), budget), Duration::ZERO);
        assert!(remaining_budget(Duration::from_millis(5), budget) > Duration::ZERO);
    }

    #[test]
    fn overrun_means_more_than_two_budgets() {
        let clock = FrameClock::new(100);
        assert!(!clock.is_overrun(Duration::from_millis(10)));
        assert!(!clock.is_overrun(Duration::from_millis(19)));
        assert!(clock.is_overrun(Duration::from_millis(21)));
    }

    #[test]
    fn tick_waits_out_the_frame() {
        let mut clock = FrameClock::new(200);
        clock.tick();
        let elapsed = clock.tick();
        assert!(elapsed >= Duration::from_millis(5));
    }
}
