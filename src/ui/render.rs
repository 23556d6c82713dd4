//! Frame composition
//!
//! [`draw`] paints one complete frame: background, header, status line and
//! the bar chart. The terminal backend diffs frames itself, so the header is
//! repainted on sorting frames too; only the plotting region is explicitly
//! cleared there.

use super::app::Mode;
use super::panes;
use crate::config::TOP_PAD;
use crate::display::{DisplayState, LogicalRect};
use crate::sort::{Algorithm, Direction, Highlight};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Everything needed to paint one frame
pub struct FrameView<'a> {
    pub display: &'a DisplayState,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub mode: Mode,
    pub finished: bool,
    pub steps: usize,
    pub highlight: &'a Highlight,
}

/// Paint a full frame
pub fn draw(frame: &mut Frame, view: &FrameView<'_>) {
    let area = frame.area();
    let display = view.display;

    frame.render_widget(Block::default().style(Style::default().bg(DEFAULT_THEME.bg)), area);

    let header_logical = LogicalRect {
        x: 0,
        y: 0,
        width: display.width(),
        height: TOP_PAD.min(display.height()),
    };
    let header_area = panes::project(header_logical, display.width(), display.height(), area);

    let header_rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(header_area);

    panes::render_header(frame, header_rows[0], view.algorithm, view.direction);
    panes::render_status_bar(
        frame,
        header_rows[1],
        view.mode,
        view.finished,
        view.steps,
        display.len(),
    );

    panes::draw_bars(
        frame.buffer_mut(),
        area,
        display,
        view.highlight,
        view.mode == Mode::Sorting,
    );
}
