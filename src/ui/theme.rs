use crate::sort::Mark;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,      // Blue
    pub comment: Color,    // Grey
    pub success: Color,    // Green
    pub status_bg: Color,
    pub key_bg: Color,
    pub gradient: [Color; 3], // Cyclic bar shades
    pub moved_in: Color,   // Blue
    pub moved_from: Color, // Red
}

impl Theme {
    /// Colour of the bar at `index`, honouring a highlight mark if present
    pub fn bar_color(&self, index: usize, mark: Option<Mark>) -> Color {
        match mark {
            Some(Mark::MovedIn) => self.moved_in,
            Some(Mark::MovedFrom) => self.moved_from,
            None => self.gradient[index % self.gradient.len()],
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(0, 0, 0),
    title: Color::Rgb(0, 0, 255),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(64, 160, 43),
    status_bg: Color::Rgb(230, 230, 235),
    key_bg: Color::Rgb(160, 160, 170),
    gradient: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    moved_in: Color::Rgb(0, 0, 255),
    moved_from: Color::Rgb(255, 0, 0),
};
