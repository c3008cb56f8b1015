use std::num::NonZeroUsize;

use crate::entry::ScoreEntry;

/// Capacity used by the leaderboard service when none is configured.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => unreachable!(),
};

/// What happened to an entry passed to [`BoundedTopStore::insert`].
#[derive(Clone, Debug, PartialEq)]
pub enum InsertOutcome {
    /// The store had room and the entry was added.
    Added,
    /// The store was full; the entry displaced the previous minimum.
    Replaced(ScoreEntry),
    /// The store was full and the entry did not beat the minimum.
    Discarded(ScoreEntry),
}

impl InsertOutcome {
    /// Returns `true` if the entry is now on the board.
    pub fn is_retained(&self) -> bool {
        !matches!(self, Self::Discarded(_))
    }
}

/// Fixed-capacity min-heap over [`ScoreEntry`] values keyed on score.
///
/// The heap is stored as an implicit binary tree in a contiguous `Vec`: the
/// children of slot `i` live at `2i + 1` and `2i + 2`. Every parent's score is
/// less than or equal to its children's, so `entries[0]` is always the lowest
/// retained score.
///
/// The store is not synchronized. When shared between threads, wrap the whole
/// structure in a single lock; `insert` reorders several slots and a reader
/// could otherwise see a half-sifted array.
#[derive(Clone, Debug)]
pub struct BoundedTopStore {
    capacity: NonZeroUsize,
    entries: Vec<ScoreEntry>,
}

impl BoundedTopStore {
    /// Create an empty store holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.get()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity.get()
    }

    /// Lowest score currently on the board, if any.
    pub fn min_score(&self) -> Option<f64> {
        self.entries.first().map(|e| e.score)
    }

    /// Offer an entry to the board.
    ///
    /// Below capacity the entry is always added. At capacity it replaces the
    /// current minimum only if its score is strictly greater; an entry that
    /// ties the minimum is discarded, so earlier entries keep their place.
    pub fn insert(&mut self, entry: ScoreEntry) -> InsertOutcome {
        if self.entries.len() < self.capacity.get() {
            self.entries.push(entry);
            self.sift_up(self.entries.len() - 1);
            return InsertOutcome::Added;
        }

        if entry.score > self.entries[0].score {
            let evicted = std::mem::replace(&mut self.entries[0], entry);
            self.sift_down(0);
            InsertOutcome::Replaced(evicted)
        } else {
            InsertOutcome::Discarded(entry)
        }
    }

    /// Insert every entry of `entries`, in iteration order.
    ///
    /// Returns how many of them were retained at the time they were offered.
    pub fn replay<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = ScoreEntry>,
    {
        entries
            .into_iter()
            .map(|entry| self.insert(entry))
            .filter(InsertOutcome::is_retained)
            .count()
    }

    /// All entries, highest score first.
    ///
    /// Entries with equal scores come out in no particular order. The heap
    /// itself is left untouched.
    pub fn sorted_scores(&self) -> Vec<ScoreEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        sorted
    }

    /// Remove every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].score > self.entries[idx].score {
                self.entries.swap(parent, idx);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let smaller = if right < len && self.entries[right].score < self.entries[left].score {
                right
            } else {
                left
            };

            if self.entries[smaller].score < self.entries[idx].score {
                self.entries.swap(smaller, idx);
                idx = smaller;
            } else {
                break;
            }
        }
    }
}

impl Default for BoundedTopStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Extend<ScoreEntry> for BoundedTopStore {
    fn extend<I: IntoIterator<Item = ScoreEntry>>(&mut self, iter: I) {
        self.replay(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn assert_heap(store: &BoundedTopStore) {
        let e = &store.entries;
        for i in 0..e.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < e.len() {
                    assert!(
                        e[i].score <= e[child].score,
                        "slot {i} ({}) > child {child} ({})",
                        e[i].score,
                        e[child].score
                    );
                }
            }
        }
    }

    fn names(entries: &[ScoreEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    // -----------------------------------------------------------------------
    // Insert / eviction
    // -----------------------------------------------------------------------

    #[test]
    fn evicts_global_minimum() {
        let mut store = BoundedTopStore::new(cap(3));
        store.insert(ScoreEntry::new("A", 10.0));
        store.insert(ScoreEntry::new("B", 20.0));
        store.insert(ScoreEntry::new("C", 5.0));
        let outcome = store.insert(ScoreEntry::new("D", 15.0));

        assert_eq!(outcome, InsertOutcome::Replaced(ScoreEntry::new("C", 5.0)));
        assert_eq!(
            store.sorted_scores(),
            vec![
                ScoreEntry::new("B", 20.0),
                ScoreEntry::new("D", 15.0),
                ScoreEntry::new("A", 10.0),
            ]
        );
    }

    #[test]
    fn equal_scores_below_capacity_both_kept() {
        let mut store = BoundedTopStore::new(cap(2));
        store.insert(ScoreEntry::new("A", 50.0));
        store.insert(ScoreEntry::new("B", 50.0));

        let sorted = store.sorted_scores();
        assert_eq!(sorted.len(), 2);
        let mut got = names(&sorted);
        got.sort();
        assert_eq!(got, vec!["A", "B"]);
    }

    #[test]
    fn tie_with_minimum_at_capacity_is_discarded() {
        let mut store = BoundedTopStore::new(cap(2));
        store.insert(ScoreEntry::new("A", 10.0));
        store.insert(ScoreEntry::new("B", 20.0));
        let before = store.sorted_scores();

        let outcome = store.insert(ScoreEntry::new("late", 10.0));
        assert_eq!(outcome, InsertOutcome::Discarded(ScoreEntry::new("late", 10.0)));
        assert_eq!(store.sorted_scores(), before);
    }

    #[test]
    fn lower_than_minimum_at_capacity_is_discarded() {
        let mut store = BoundedTopStore::new(cap(1));
        store.insert(ScoreEntry::new("A", 3.0));
        assert!(!store.insert(ScoreEntry::new("B", 1.0)).is_retained());
        assert_eq!(names(&store.sorted_scores()), vec!["A"]);
    }

    #[test]
    fn capacity_one_keeps_running_maximum() {
        let mut store = BoundedTopStore::new(cap(1));
        for (i, score) in [4.0, 9.0, 2.0, 9.0, 11.0].into_iter().enumerate() {
            store.insert(ScoreEntry::new(format!("p{i}"), score));
        }
        assert_eq!(store.sorted_scores(), vec![ScoreEntry::new("p4", 11.0)]);
    }

    #[test]
    fn duplicate_entries_permitted() {
        let mut store = BoundedTopStore::new(cap(3));
        store.insert(ScoreEntry::new("A", 1.0));
        store.insert(ScoreEntry::new("A", 1.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn min_score_tracks_root() {
        let mut store = BoundedTopStore::new(cap(3));
        assert_eq!(store.min_score(), None);
        store.insert(ScoreEntry::new("A", 30.0));
        store.insert(ScoreEntry::new("B", 10.0));
        store.insert(ScoreEntry::new("C", 20.0));
        assert_eq!(store.min_score(), Some(10.0));
        assert!(store.is_full());
        store.insert(ScoreEntry::new("D", 25.0));
        assert_eq!(store.min_score(), Some(20.0));
    }

    // -----------------------------------------------------------------------
    // Reads / clear / replay
    // -----------------------------------------------------------------------

    #[test]
    fn sorted_read_is_idempotent_and_pure() {
        let mut store = BoundedTopStore::new(cap(5));
        for (i, score) in [7.0, 3.0, 9.0, 1.0].into_iter().enumerate() {
            store.insert(ScoreEntry::new(format!("p{i}"), score));
        }
        let heap_before = store.entries.clone();
        let first = store.sorted_scores();
        let second = store.sorted_scores();
        assert_eq!(first, second);
        assert_eq!(store.entries, heap_before);
    }

    #[test]
    fn clear_resets_to_fresh_state() {
        let mut store = BoundedTopStore::new(cap(2));
        store.insert(ScoreEntry::new("A", 10.0));
        store.insert(ScoreEntry::new("B", 20.0));
        store.clear();

        assert!(store.sorted_scores().is_empty());
        assert_eq!(store.capacity(), 2);

        // A low score that would have been discarded before clear now fits.
        assert_eq!(store.insert(ScoreEntry::new("C", 1.0)), InsertOutcome::Added);
        assert_eq!(store.sorted_scores(), vec![ScoreEntry::new("C", 1.0)]);
    }

    #[test]
    fn replay_counts_retained() {
        let mut store = BoundedTopStore::new(cap(2));
        let retained = store.replay(vec![
            ScoreEntry::new("A", 5.0),
            ScoreEntry::new("B", 6.0),
            ScoreEntry::new("C", 5.0),
            ScoreEntry::new("D", 7.0),
        ]);
        assert_eq!(retained, 3);
        assert_eq!(names(&store.sorted_scores()), vec!["D", "B"]);
    }

    #[test]
    fn extend_replays_in_order() {
        let mut store = BoundedTopStore::new(cap(1));
        store.extend([ScoreEntry::new("first", 1.0), ScoreEntry::new("second", 1.0)]);
        assert_eq!(names(&store.sorted_scores()), vec!["first"]);
    }

    #[test]
    fn default_capacity_is_hundred() {
        assert_eq!(BoundedTopStore::default().capacity(), 100);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn heap_and_size_invariants_hold(
            capacity in 1usize..16,
            scores in proptest::collection::vec(0u8..=100, 0..64),
        ) {
            let mut store = BoundedTopStore::new(cap(capacity));
            for (i, s) in scores.iter().enumerate() {
                store.insert(ScoreEntry::new(format!("p{i}"), f64::from(*s)));
                prop_assert!(store.len() <= capacity);
                assert_heap(&store);
            }
        }

        #[test]
        fn retains_highest_scores(
            capacity in 1usize..16,
            scores in proptest::collection::vec(0u8..=100, 0..64),
        ) {
            let mut store = BoundedTopStore::new(cap(capacity));
            for (i, s) in scores.iter().enumerate() {
                store.insert(ScoreEntry::new(format!("p{i}"), f64::from(*s)));
            }

            let mut expected: Vec<f64> = scores.iter().map(|s| f64::from(*s)).collect();
            expected.sort_by(|a, b| b.total_cmp(a));
            expected.truncate(capacity);

            let got: Vec<f64> = store.sorted_scores().iter().map(|e| e.score).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
