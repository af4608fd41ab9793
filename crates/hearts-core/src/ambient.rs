use std::time::Duration;

/// Fires once per elapsed interval of accumulated frame time.
///
/// At most one pulse is reported per `tick`, so a long stall (a hidden tab,
/// a debugger pause) yields a single pulse rather than a burst.
#[derive(Clone, Debug)]
pub struct AmbientPulse {
    interval: Duration,
    elapsed: Duration,
}

impl AmbientPulse {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.interval.is_zero() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        let rest = self.elapsed - self.interval;
        self.elapsed = if rest >= self.interval {
            Duration::ZERO
        } else {
            rest
        };
        true
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
