//! Display state: the array being sorted and the bar geometry derived from it
//!
//! All coordinates are logical pixels on a fixed-size window (800×600 by
//! default). The renderer projects them onto whatever terminal it gets.
//!
//! # Geometry
//!
//! ```text
//! bar_width        = round((width - SIDE_PAD) / count)
//! bar_unit_height  = floor((height - TOP_PAD) / (max - min))
//! origin_x         = SIDE_PAD / 2
//! ```
//!
//! A zero value range uses a unit height of 1, and every bar is at least
//! [`MIN_BAR_HEIGHT`] tall.

use crate::config::{MIN_BAR_HEIGHT, SIDE_PAD, TOP_PAD};

/// Axis-aligned rectangle in logical pixels, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LogicalRect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// The array plus everything needed to lay it out as bars.
///
/// Outside the crate the array can only be replaced wholesale, which keeps
/// min/max in step with the values:
///
/// ```compile_fail
/// let mut state = sortviz::display::DisplayState::new(800, 600, vec![1, 2]);
/// state.values_mut()[0] = 99;
/// ```
#[derive(Debug, Clone)]
pub struct DisplayState {
    width: u32,
    height: u32,
    values: Vec<i64>,
    min_value: i64,
    max_value: i64,
    bar_width: u32,
    bar_unit_height: u32,
    origin_x: u32,
}

impl DisplayState {
    /// Create a display for a `width`×`height` window holding `values`
    pub fn new(width: u32, height: u32, values: Vec<i64>) -> Self {
        let mut state = DisplayState {
            width,
            height,
            values: Vec::new(),
            min_value: 0,
            max_value: 0,
            bar_width: 0,
            bar_unit_height: 1,
            origin_x: SIDE_PAD / 2,
        };
        state.set_array(values);
        state
    }

    /// Replace the array and recompute the geometry
    pub fn set_array(&mut self, values: Vec<i64>) {
        self.min_value = values.iter().copied().min().unwrap_or(0);
        self.max_value = values.iter().copied().max().unwrap_or(0);

        let drawable_width = self.width.saturating_sub(SIDE_PAD);
        let drawable_height = self.height.saturating_sub(TOP_PAD);

        self.bar_width = if values.is_empty() {
            0
        } else {
            let count = values.len() as u64;
            let rounded = (drawable_width as f64 / count as f64).round() as u64;
            // Rounding up must not push the last bar past the padding
            if rounded * count > drawable_width as u64 {
                (drawable_width as u64 / count) as u32
            } else {
                rounded as u32
            }
        };

        let range = self.max_value.abs_diff(self.min_value);
        self.bar_unit_height = if range == 0 {
            1
        } else {
            (drawable_height as u64 / range) as u32
        };

        self.origin_x = SIDE_PAD / 2;
        self.values = values;
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Mutable access for the in-place sorters. They only permute the
    /// values, so min/max and the geometry stay valid.
    pub(crate) fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn bar_width(&self) -> u32 {
        self.bar_width
    }

    pub fn bar_unit_height(&self) -> u32 {
        self.bar_unit_height
    }

    pub fn origin_x(&self) -> u32 {
        self.origin_x
    }

    /// Region below the header and inside the side padding
    pub fn plot_area(&self) -> LogicalRect {
        LogicalRect {
            x: SIDE_PAD / 2,
            y: TOP_PAD.min(self.height),
            width: self.width.saturating_sub(SIDE_PAD),
            height: self.height.saturating_sub(TOP_PAD),
        }
    }

    /// Logical rectangle of the bar at `index`, anchored to the bottom edge
    pub fn bar_rect(&self, index: usize) -> Option<LogicalRect> {
        let value = *self.values.get(index)?;
        let scaled = value.abs_diff(self.min_value) * self.bar_unit_height as u64;
        let max_height = self.height.saturating_sub(TOP_PAD) as u64;
        let height = scaled.max(MIN_BAR_HEIGHT as u64).min(max_height) as u32;

        Some(LogicalRect {
            x: self.origin_x + index as u32 * self.bar_width,
            y: self.height - height,
            width: self.bar_width,
            height,
        })
    }
}
