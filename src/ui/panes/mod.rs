//! Render functions for each region of the screen
//!
//! - [`header`]: algorithm and direction title plus the key legend
//! - [`status`]: mode badge and step counter
//! - [`chart`]: the bars themselves, projected from logical pixels
//!
//! Each module exports a stateless `render_*` or `draw_*` function; the
//! frame composition lives in [`crate::ui::render`].

pub mod chart;
pub mod header;
pub mod status;

pub use chart::{draw_bars, project};
pub use header::render_header;
pub use status::render_status_bar;
