//! Counting sort, one placement per step
//!
//! The histogram and the inclusive prefix sums are built up front when the
//! sorter is created. Each step then places one source element, scanning the
//! source right to left so equal values keep their relative order, and
//! publishes the whole output buffer to the display.
//!
//! Both directions share the same placement code. Values are mapped to a
//! key in `[0, max - min]`:
//!
//! ```text
//! ascending:  key = value - min
//! descending: key = max - value
//! ```
//!
//! and the output is always built in ascending key order, so every write
//! lands inside `[0, n)`.
//!
//! Ranges wider than [`MAX_DENSE_BUCKETS`] keys (up to the full `i64` span)
//! key each value by its rank among the distinct values instead, which bounds
//! the histogram by the array length.

use super::{highlight_move, Direction, Highlight, StepSort};
use crate::display::DisplayState;

/// Largest value range histogrammed densely, one bucket per value
pub const MAX_DENSE_BUCKETS: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct CountingSort {
    direction: Direction,
    min_value: i64,
    max_value: i64,
    /// Sorted distinct values when the range is too wide for dense buckets
    ranks: Option<Vec<i64>>,
    source: Vec<i64>,
    output: Vec<i64>,
    counts: Vec<usize>,
    tally: Vec<usize>,
    /// Working copy of `tally`; `cursor[key]` is one past the next slot for `key`
    cursor: Vec<usize>,
    /// Number of source elements still to place; the next one is at
    /// `remaining - 1`
    remaining: usize,
}

impl CountingSort {
    /// Snapshot `values` and build the histogram and cumulative tally.
    ///
    /// Accepts any `i64` values. When `max - min + 1` exceeds
    /// [`MAX_DENSE_BUCKETS`], keys are ranks among the distinct values rather
    /// than offsets from `min`.
    pub fn new(values: &[i64], direction: Direction) -> Self {
        let min_value = values.iter().copied().min().unwrap_or(0);
        let max_value = values.iter().copied().max().unwrap_or(0);

        let dense_buckets = usize::try_from(max_value.abs_diff(min_value))
            .ok()
            .and_then(|range| range.checked_add(1))
            .filter(|&buckets| buckets <= MAX_DENSE_BUCKETS);

        let (buckets, ranks) = match dense_buckets {
            _ if values.is_empty() => (0, None),
            Some(buckets) => (buckets, None),
            None => {
                let mut distinct = values.to_vec();
                distinct.sort_unstable();
                distinct.dedup();
                (distinct.len(), Some(distinct))
            }
        };

        let mut sorter = CountingSort {
            direction,
            min_value,
            max_value,
            ranks,
            source: values.to_vec(),
            output: values.to_vec(),
            counts: vec![0; buckets],
            tally: Vec::new(),
            cursor: Vec::new(),
            remaining: values.len(),
        };

        for &value in values {
            let key = sorter.key(value);
            sorter.counts[key] += 1;
        }

        sorter.tally = sorter
            .counts
            .iter()
            .scan(0, |running, &count| {
                *running += count;
                Some(*running)
            })
            .collect();
        sorter.cursor = sorter.tally.clone();

        sorter
    }

    fn key(&self, value: i64) -> usize {
        if let Some(ranks) = &self.ranks {
            // Every source value is present in `ranks`
            let rank = ranks.binary_search(&value).unwrap_or_else(|slot| slot);
            return match self.direction {
                Direction::Ascending => rank,
                Direction::Descending => ranks.len() - 1 - rank,
            };
        }

        match self.direction {
            Direction::Ascending => value.abs_diff(self.min_value) as usize,
            Direction::Descending => self.max_value.abs_diff(value) as usize,
        }
    }

    /// Histogram of the source, indexed by key
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Inclusive prefix sums of [`counts`](Self::counts)
    pub fn tally(&self) -> &[usize] {
        &self.tally
    }

    /// The output buffer as placed so far
    pub fn output(&self) -> &[i64] {
        &self.output
    }
}

impl StepSort for CountingSort {
    fn step(&mut self, display: &mut DisplayState) -> Option<Highlight> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let source_index = self.remaining;
        let value = self.source[source_index];
        let key = self.key(value);

        self.cursor[key] -= 1;
        let destination = self.cursor[key];
        self.output[destination] = value;

        display.set_array(self.output.clone());
        Some(highlight_move(destination, Some(source_index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_histogram_and_tally() {
        let sorter = CountingSort::new(&[2, 0, 1], Direction::Ascending);
        assert_eq!(sorter.counts(), &[1, 1, 1]);
        assert_eq!(sorter.tally(), &[1, 2, 3]);
    }

    #[test]
    fn test_counting_step_count_equals_length() {
        let values = vec![3, 1, 2, 3, 0, 1];
        let mut state = DisplayState::new(800, 600, values.clone());
        let mut sorter = CountingSort::new(&values, Direction::Ascending);

        let mut steps = 0;
        while sorter.step(&mut state).is_some() {
            steps += 1;
        }
        assert_eq!(steps, values.len());
        assert_eq!(state.values(), &[0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_counting_descending_never_leaves_bounds() {
        let values = vec![0, 5, 5, 2, 9, 0];
        let mut state = DisplayState::new(800, 600, values.clone());
        let mut sorter = CountingSort::new(&values, Direction::Descending);
        while sorter.step(&mut state).is_some() {}
        assert_eq!(state.values(), &[9, 5, 5, 2, 0, 0]);
    }

    #[test]
    fn test_counting_negative_values() {
        let values = vec![-3, 4, 0, -3, 1];
        let mut state = DisplayState::new(800, 600, values.clone());
        let mut sorter = CountingSort::new(&values, Direction::Ascending);
        while sorter.step(&mut state).is_some() {}
        assert_eq!(state.values(), &[-3, -3, 0, 1, 4]);
    }

    #[test]
    fn test_counting_full_i64_range() {
        let values = vec![i64::MAX, 0, i64::MIN, -1, i64::MAX];
        for direction in [Direction::Ascending, Direction::Descending] {
            let mut state = DisplayState::new(800, 600, values.clone());
            let mut sorter = CountingSort::new(&values, direction);
            assert_eq!(sorter.counts().len(), 4);

            let mut steps = 0;
            while sorter.step(&mut state).is_some() {
                steps += 1;
            }
            assert_eq!(steps, values.len());
            assert!(direction.is_sorted(state.values()));
        }
    }

    #[test]
    fn test_counting_wide_range_uses_ranks() {
        let sorter = CountingSort::new(&[0, MAX_DENSE_BUCKETS as i64, 0], Direction::Ascending);
        assert_eq!(sorter.counts(), &[2, 1]);
        assert_eq!(sorter.tally(), &[2, 3]);

        let sorter = CountingSort::new(&[0, MAX_DENSE_BUCKETS as i64 - 1], Direction::Ascending);
        assert_eq!(sorter.counts().len(), MAX_DENSE_BUCKETS);
    }

    #[test]
    fn test_counting_empty() {
        let mut state = DisplayState::new(800, 600, Vec::new());
        let mut sorter = CountingSort::new(&[], Direction::Ascending);
        assert!(sorter.step(&mut state).is_none());
    }
}
