// Insertion sort, one shift per step

use super::{highlight_move, Direction, Highlight, StepSort};
use crate::display::DisplayState;

/// Resumable insertion sort.
///
/// The key being inserted always sits at `key_position`; each step shifts
/// its predecessor right by swapping the two.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    direction: Direction,
    next: usize,
    key_position: Option<usize>,
    done: bool,
}

impl InsertionSort {
    pub fn new(direction: Direction) -> Self {
        InsertionSort {
            direction,
            next: 1,
            key_position: None,
            done: false,
        }
    }
}

impl StepSort for InsertionSort {
    fn step(&mut self, display: &mut DisplayState) -> Option<Highlight> {
        let values = display.values_mut();

        while !self.done {
            match self.key_position {
                None => {
                    if self.next >= values.len() {
                        self.done = true;
                    } else {
                        self.key_position = Some(self.next);
                        self.next += 1;
                    }
                }
                Some(pos) if pos > 0 && self.direction.out_of_order(values[pos - 1], values[pos]) => {
                    values.swap(pos - 1, pos);
                    let key = pos - 1;
                    self.key_position = Some(key);
                    return Some(highlight_move(key, Some(pos)));
                }
                Some(_) => {
                    // Key is in place
                    self.key_position = None;
                }
            }
        }

        None
    }
}
