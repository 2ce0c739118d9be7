//! Hint budget and reveal order

use rand::Rng;

use crate::core::Hint;

/// Hints of the current word, split into not-yet-revealed and revealed
///
/// Every hint lives in exactly one of the two lists. A hint moves from
/// `available` to `revealed` at most once and never comes back.
#[derive(Debug, Clone)]
pub struct HintPool {
    available: Vec<Hint>,
    revealed: Vec<Hint>,
    max_hints: usize,
}

impl HintPool {
    #[must_use]
    pub fn new(hints: Vec<Hint>, max_hints: usize) -> Self {
        Self {
            available: hints,
            revealed: Vec::new(),
            max_hints,
        }
    }

    fn can_reveal(&self) -> bool {
        self.revealed.len() < self.max_hints && !self.available.is_empty()
    }

    /// Reveal the first hint in word order
    ///
    /// Returns the revealed hint, or `None` if the budget is spent or no hint
    /// is left.
    pub fn reveal_first(&mut self) -> Option<&Hint> {
        if !self.can_reveal() {
            return None;
        }
        let hint = self.available.remove(0);
        self.revealed.push(hint);
        self.revealed.last()
    }

    /// Reveal a uniformly random hint among the available ones
    pub fn reveal_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Hint> {
        if !self.can_reveal() {
            return None;
        }
        let index = rng.random_range(0..self.available.len());
        let hint = self.available.remove(index);
        self.revealed.push(hint);
        self.revealed.last()
    }

    /// Hints still allowed by the budget
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_hints.saturating_sub(self.revealed.len())
    }

    /// No further reveal is possible
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.can_reveal()
    }

    /// Budget spent, as opposed to running out of hints
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.revealed.len() >= self.max_hints
    }

    /// Revealed hints, oldest first
    #[must_use]
    pub fn revealed(&self) -> &[Hint] {
        &self.revealed
    }

    #[must_use]
    pub fn available(&self) -> &[Hint] {
        &self.available
    }

    #[must_use]
    pub const fn max_hints(&self) -> usize {
        self.max_hints
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.available.len() + self.revealed.len()
    }
}
