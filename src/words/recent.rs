//! Recently played word ids

use std::collections::VecDeque;

use crate::core::WordId;

/// Default number of recent words excluded from the next draw
pub const RECENT_WORDS: usize = 3;

/// Bounded list of the last played ids, most recent first
#[derive(Debug, Clone)]
pub struct RecencyWindow {
    ids: VecDeque<WordId>,
    capacity: usize,
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::new(RECENT_WORDS)
    }
}

impl RecencyWindow {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: VecDeque::new(),
            capacity,
        }
    }

    /// Move `id` to the front, dropping the oldest id past capacity
    pub fn remember(&mut self, id: WordId) {
        self.ids.retain(|&existing| existing != id);
        self.ids.push_front(id);
        self.ids.truncate(self.capacity);
    }

    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.ids.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_recent_first() {
        let mut window = RecencyWindow::new(3);
        for id in 1..=4 {
            window.remember(WordId(id));
        }
        assert_eq!(
            window.iter().collect::<Vec<_>>(),
            vec![WordId(4), WordId(3), WordId(2)]
        );
        assert!(!window.contains(WordId(1)));
    }

    #[test]
    fn remembering_again_moves_to_front() {
        let mut window = RecencyWindow::default();
        window.remember(WordId(1));
        window.remember(WordId(2));
        window.remember(WordId(1));

        assert_eq!(window.len(), 2);
        assert_eq!(window.iter().next(), Some(WordId(1)));
    }

    #[test]
    fn zero_capacity_remembers_nothing() {
        let mut window = RecencyWindow::new(0);
        window.remember(WordId(1));
        assert!(window.is_empty());
    }

    #[test]
    fn unbounded_capacity_is_accepted() {
        let mut window = RecencyWindow::new(usize::MAX);
        for id in 1..=50 {
            window.remember(WordId(id));
        }
        assert_eq!(window.len(), 50);
        assert!(window.contains(WordId(1)));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut window = RecencyWindow::default();
        window.remember(WordId(5));
        window.clear();
        assert!(!window.contains(WordId(5)));
    }
}
