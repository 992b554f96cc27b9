//! Scenario countdown clock.
//!
//! The engine does not own a timer; an external collaborator calls
//! [`SimulationEngine::countdown_tick`](crate::engine::SimulationEngine::countdown_tick)
//! once per second and the clock only counts those calls.

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The clock is not running.
    Inactive,
    /// Seconds remaining after this tick.
    Running(u32),
    /// This tick reached zero. The clock stops itself; subsequent ticks
    /// report `Inactive`.
    Expired,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    remaining: Option<u32>,
}

impl Countdown {
    /// Start (or restart) the clock.
    pub fn start(&mut self, secs: u32) {
        self.remaining = Some(secs);
    }

    /// Stop the clock. Stopping an already-stopped clock is a no-op.
    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TickResult {
        match self.remaining {
            None => TickResult::Inactive,
            Some(secs) => {
                let next = secs.saturating_sub(1);
                if next == 0 {
                    self.remaining = None;
                    TickResult::Expired
                } else {
                    self.remaining = Some(next);
                    TickResult::Running(next)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut clock = Countdown::default();
        clock.start(3);
        assert_eq!(clock.tick(), TickResult::Running(2));
        assert_eq!(clock.tick(), TickResult::Running(1));
        assert_eq!(clock.tick(), TickResult::Expired);
        assert_eq!(clock.tick(), TickResult::Inactive);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut clock = Countdown::default();
        clock.start(10);
        clock.stop();
        clock.stop();
        assert_eq!(clock.tick(), TickResult::Inactive);
    }

    #[test]
    fn test_restart_resets_remaining() {
        let mut clock = Countdown::default();
        clock.start(5);
        clock.tick();
        clock.start(5);
        assert_eq!(clock.remaining_secs(), Some(5));
    }
}
