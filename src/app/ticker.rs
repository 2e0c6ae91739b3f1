//! Periodic trigger for indicator ticks
//!
//! Polled from the UI loop; the console itself never schedules anything.

use std::time::{Duration, Instant};

pub struct Ticker {
    interval: Duration,
    next: Instant,
    running: bool,
}

impl Ticker {
    /// Running ticker whose first tick is one interval after `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
            running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or stop ticking. Restarting waits a full interval.
    pub fn set_running(&mut self, running: bool, now: Instant) {
        if running && !self.running {
            self.next = now + self.interval;
        }
        self.running = running;
    }

    /// True when a tick is due at `now`. Missed ticks are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running || now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(SECOND, start);

        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + SECOND));
        assert!(!ticker.poll(start + SECOND));
        assert!(ticker.poll(start + SECOND * 2));
    }

    #[test]
    fn test_missed_ticks_collapse() {
        let start = Instant::now();
        let mut ticker = Ticker::new(SECOND, start);

        assert!(ticker.poll(start + SECOND * 5));
        assert!(!ticker.poll(start + SECOND * 5 + Duration::from_millis(500)));
    }

    #[test]
    fn test_stopped_never_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::new(SECOND, start);
        ticker.set_running(false, start);

        assert!(!ticker.poll(start + SECOND * 3));

        ticker.set_running(true, start + SECOND * 3);
        assert!(!ticker.poll(start + SECOND * 3));
        assert!(ticker.poll(start + SECOND * 4));
    }
}
