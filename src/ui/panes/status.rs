//! Status line with mode badge and step counter

use crate::ui::app::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status line.
///
/// `finished` marks an idle display whose last session ran to completion.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    finished: bool,
    steps: usize,
    array_len: usize,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_bg) = match mode {
        Mode::Sorting => (" SORTING ", DEFAULT_THEME.title),
        Mode::Idle if finished => (" DONE ", DEFAULT_THEME.success),
        Mode::Idle => (" IDLE ", DEFAULT_THEME.key_bg),
    };

    let plain = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep),
        Span::styled(format!(" Steps: {} ", steps), plain),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(DEFAULT_THEME.status_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    let right_spans = vec![
        Span::styled(format!(" {} bars ", array_len), plain),
        Span::styled("│", sep),
        Span::styled(" q ", Style::default().bg(DEFAULT_THEME.key_bg).fg(Color::Black)),
        Span::styled(" quit ", plain),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(DEFAULT_THEME.status_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}
