//! # Introduction
//!
//! sortviz animates classic sorting algorithms over a random integer array,
//! drawing every swap, shift and placement as a bar chart in the terminal
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Generator → DisplayState → StepSort (one mutation per frame) → Renderer
//! ```
//!
//! 1. [`generator`] — draws the random array.
//! 2. [`display`] — owns the array and derives bar geometry in logical
//!    pixels on a fixed 800×600 window.
//! 3. [`sort`] — bubble, insertion, counting and selection sort as resumable
//!    step machines sharing the [`sort::StepSort`] trait.
//! 4. [`ui`] — the event loop, which pulls one step per frame, and the panes
//!    that render it.
//!
//! [`config`], [`error`] and [`logging`] hold the constants, the error type
//! and the optional file logger.
//!
//! ## Keys
//!
//! `r` reset, space start, `a`/`d` ascending/descending,
//! `b`/`i`/`c`/`s` bubble/insertion/counting/selection, `q` quit.

pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod logging;
pub mod sort;
pub mod ui;
