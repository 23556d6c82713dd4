//! Bar chart rendering
//!
//! Bars are laid out in logical pixels by [`DisplayState`] and projected onto
//! the terminal here. The whole frame stands for the logical window, so a
//! bar at logical `x` lands in column `x * cols / width`.
//!
//! Every bar covers at least one cell in each direction once it has a
//! non-zero logical size, so narrow terminals still show all of them.

use crate::display::{DisplayState, LogicalRect};
use crate::sort::Highlight;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, Widget},
};

/// Project a logical rectangle of a `surface_width`×`surface_height` window
/// onto `area`
pub fn project(rect: LogicalRect, surface_width: u32, surface_height: u32, area: Rect) -> Rect {
    if surface_width == 0 || surface_height == 0 || rect.width == 0 || rect.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let scale = |value: u32, cells: u16, logical: u32| -> u16 {
        let scaled = value as u64 * cells as u64 / logical as u64;
        scaled.min(cells as u64) as u16
    };

    let mut left = scale(rect.x, area.width, surface_width);
    let mut right = scale(rect.right(), area.width, surface_width);
    let mut top = scale(rect.y, area.height, surface_height);
    let bottom = scale(rect.bottom(), area.height, surface_height);

    if right <= left {
        if left >= area.width {
            left = area.width.saturating_sub(1);
        }
        right = left + 1;
    }
    // Bars grow upward from the bottom edge
    if bottom <= top {
        top = bottom.saturating_sub(1);
    }
    let bottom = bottom.max(top + 1).min(area.height);

    Rect::new(
        area.x + left,
        area.y + top,
        right.saturating_sub(left),
        bottom.saturating_sub(top),
    )
}

/// Draw every bar of `display` into `buf`.
///
/// With `clear_background` only the plotting region is wiped first, leaving
/// the header untouched.
pub fn draw_bars(
    buf: &mut Buffer,
    area: Rect,
    display: &DisplayState,
    highlight: &Highlight,
    clear_background: bool,
) {
    let (width, height) = (display.width(), display.height());

    if clear_background {
        let plot = project(display.plot_area(), width, height, area);
        Clear.render(plot, buf);
        buf.set_style(plot, Style::default().bg(DEFAULT_THEME.bg));
    }

    for index in 0..display.len() {
        let Some(rect) = display.bar_rect(index) else {
            continue;
        };
        let cells = project(rect, width, height, area);
        let color = DEFAULT_THEME.bar_color(index, highlight.get(&index).copied());
        buf.set_style(cells, Style::default().bg(color));
    }
}
