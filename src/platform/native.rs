//! Native wall-clock timing

use std::time::{Duration, Instant};

use super::FrameClock;

/// Sleeps out the remainder of each frame budget
#[derive(Debug, Default)]
pub struct ThrottledClock {
    last: Option<Instant>,
}

impl ThrottledClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for ThrottledClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let Some(last) = self.last else {
            // First frame has nothing to measure against
            self.last = Some(Instant::now());
            return Duration::ZERO;
        };

        let budget = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        let spent = last.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }

        let now = Instant::now();
        self.last = Some(now);
        now - last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttles_to_frame_budget() {
        let mut clock = ThrottledClock::new();
        assert_eq!(clock.tick(100), Duration::ZERO);

        let dt = clock.tick(100);
        assert!(dt >= Duration::from_millis(10));
    }
}
