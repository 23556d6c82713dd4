//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — application state, command handling, fixed-rate event loop
//! - **[`render`]** — composes one frame from the panes
//! - **[`panes`]** — stateless render functions for the header, status line and chart
//! - **[`surface`]** — owns the terminal and restores it on drop
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`VisualizerConfig`] and call [`App::run`] to start the event loop.
//!
//! [`VisualizerConfig`]: crate::config::VisualizerConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod render;
pub mod surface;
pub mod theme;

pub use app::{App, Command, Mode};
pub use surface::RenderContext;
