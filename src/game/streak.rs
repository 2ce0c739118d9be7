//! Win streak for the lifetime of the process

/// Current and best streak at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSnapshot {
    pub current: u32,
    pub best: u32,
}

/// Counts consecutive wins; never persisted
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    current: u32,
    best: u32,
}

impl StreakTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: 0,
            best: 0,
        }
    }

    /// Record a win; returns true when it sets a new best
    pub fn increment(&mut self) -> bool {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }

    /// Record a loss or a give-up
    pub fn reset(&mut self) {
        self.current = 0;
    }

    #[must_use]
    pub const fn snapshot(&self) -> StreakSnapshot {
        StreakSnapshot {
            current: self.current,
            best: self.best,
        }
    }
}
