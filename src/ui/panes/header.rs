//! Header rendering: active algorithm, direction, and the key legend

use crate::sort::{Algorithm, Direction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const CONTROLS_LEGEND: &str = "R - Reset | Space - Sorting | A - Ascending | D - Descending";
pub const ALGORITHM_LEGEND: &str =
    "I - Insertion Sort | B - Bubble Sort | C - Counting Sort | S - Selection Sort";

/// Title line, e.g. `Bubble Sort : Ascending`
pub fn title(algorithm: Algorithm, direction: Direction) -> String {
    format!("{} : {}", algorithm.name(), direction)
}

/// Render the header lines centered in `area`
pub fn render_header(frame: &mut Frame, area: Rect, algorithm: Algorithm, direction: Direction) {
    let text_style = Style::default().fg(DEFAULT_THEME.fg).bg(DEFAULT_THEME.bg);

    let lines = vec![
        Line::styled(
            title(algorithm, direction),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .bg(DEFAULT_THEME.bg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(CONTROLS_LEGEND, text_style),
        Line::styled(ALGORITHM_LEGEND, text_style),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
