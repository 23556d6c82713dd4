//! Step-wise sorting algorithms
//!
//! Each algorithm is an explicit state machine implementing [`StepSort`]. A
//! call to [`StepSort::step`] performs exactly one elementary mutation of the
//! [`DisplayState`] array and returns the indices it touched, or `None` once
//! the array is sorted. The event loop calls it once per frame.
//!
//! - [`bubble`]: adjacent swaps, early exit on a clean pass
//! - [`insertion`]: one shift of the key per step
//! - [`selection`]: one swap per outer position, no-op positions skipped
//! - [`counting`]: one placement per step, array replaced wholesale
//!
//! # Direction
//!
//! All four share [`Direction::out_of_order`], so descending order is the
//! ascending comparison with its operands flipped.

pub mod bubble;
pub mod counting;
pub mod insertion;
pub mod selection;

use crate::display::DisplayState;
use rustc_hash::FxHashMap;
use std::fmt;

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;

/// Requested ordering of the sorted array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Non-decreasing
    #[default]
    Ascending,
    /// Non-increasing
    Descending,
}

impl Direction {
    /// True when `before` must not precede `after` in this direction
    pub fn out_of_order(self, before: i64, after: i64) -> bool {
        match self {
            Direction::Ascending => before > after,
            Direction::Descending => before < after,
        }
    }

    /// Whether `values` is already ordered in this direction
    pub fn is_sorted(self, values: &[i64]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a highlighted bar took part in the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Destination of the moved value
    MovedIn,
    /// Where the moved value came from
    MovedFrom,
}

/// Index → mark overrides for the frame after a step
pub type Highlight = FxHashMap<usize, Mark>;

/// Build a highlight for a single move from `from` into `to`
pub fn highlight_move(to: usize, from: Option<usize>) -> Highlight {
    let mut highlight = Highlight::default();
    if let Some(from) = from {
        highlight.insert(from, Mark::MovedFrom);
    }
    highlight.insert(to, Mark::MovedIn);
    highlight
}

/// A sorting algorithm that advances one mutation at a time
pub trait StepSort {
    /// Perform the next mutation.
    ///
    /// Returns `None` once the array is sorted; every later call returns
    /// `None` as well.
    fn step(&mut self, display: &mut DisplayState) -> Option<Highlight>;
}

/// The algorithms the visualizer offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Counting,
    Selection,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Counting,
        Algorithm::Selection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }

    /// Begin sorting the current contents of `display`
    pub fn start(self, display: &DisplayState, direction: Direction) -> Box<dyn StepSort> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(direction)),
            Algorithm::Insertion => Box::new(InsertionSort::new(direction)),
            Algorithm::Counting => Box::new(CountingSort::new(display.values(), direction)),
            Algorithm::Selection => Box::new(SelectionSort::new(direction)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drive `sorter` until it is exhausted, returning the number of steps taken
pub fn run_to_end(sorter: &mut dyn StepSort, display: &mut DisplayState) -> usize {
    let mut steps = 0;
    while sorter.step(display).is_some() {
        steps += 1;
    }
    steps
}
