// Bubble sort, one adjacent swap per step

use super::{highlight_move, Direction, Highlight, StepSort};
use crate::display::DisplayState;

/// Resumable bubble sort.
///
/// `pass` is the outer index `i`, `index` the inner `j`. A pass that makes no
/// swap ends the sort early.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    direction: Direction,
    pass: usize,
    index: usize,
    swapped_this_pass: bool,
    done: bool,
}

impl BubbleSort {
    pub fn new(direction: Direction) -> Self {
        BubbleSort {
            direction,
            pass: 0,
            index: 0,
            swapped_this_pass: false,
            done: false,
        }
    }
}

impl StepSort for BubbleSort {
    fn step(&mut self, display: &mut DisplayState) -> Option<Highlight> {
        let values = display.values_mut();
        let n = values.len();

        while !self.done {
            if self.pass + 1 >= n {
                self.done = true;
                break;
            }

            if self.index + 1 + self.pass >= n {
                // End of pass
                if !self.swapped_this_pass {
                    self.done = true;
                    break;
                }
                self.pass += 1;
                self.index = 0;
                self.swapped_this_pass = false;
                continue;
            }

            let j = self.index;
            self.index += 1;

            if self.direction.out_of_order(values[j], values[j + 1]) {
                values.swap(j, j + 1);
                self.swapped_this_pass = true;
                return Some(highlight_move(j, Some(j + 1)));
            }
        }

        None
    }
}
