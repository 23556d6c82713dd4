// Selection sort, one swap per outer position

use super::{highlight_move, Direction, Highlight, StepSort};
use crate::display::DisplayState;

/// Resumable selection sort.
///
/// Each step scans for the extreme element of the unsorted remainder and
/// swaps it into `position`. Positions that already hold their element are
/// skipped without producing a step.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    direction: Direction,
    position: usize,
}

impl SelectionSort {
    pub fn new(direction: Direction) -> Self {
        SelectionSort {
            direction,
            position: 0,
        }
    }
}

impl StepSort for SelectionSort {
    fn step(&mut self, display: &mut DisplayState) -> Option<Highlight> {
        let values = display.values_mut();
        let n = values.len();

        while self.position + 1 < n {
            let j = self.position;
            self.position += 1;

            let mut best = j;
            for i in (j + 1)..n {
                if self.direction.out_of_order(values[best], values[i]) {
                    best = i;
                }
            }

            if best != j {
                values.swap(j, best);
                return Some(highlight_move(best, Some(j)));
            }
        }

        None
    }
}
