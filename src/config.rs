// Constants and startup configuration for the visualizer

use crate::error::{Result, VisualizerError};
use std::time::Duration;

/// Logical window width in pixels
pub const WINDOW_WIDTH: u32 = 800;

/// Logical window height in pixels
pub const WINDOW_HEIGHT: u32 = 600;

/// Horizontal padding, split evenly between the left and right edges
pub const SIDE_PAD: u32 = 100;

/// Vertical space reserved for the header text
pub const TOP_PAD: u32 = 150;

/// Smallest height a bar is drawn with, so the minimum value stays visible
pub const MIN_BAR_HEIGHT: u32 = 4;

pub const DEFAULT_COUNT: usize = 50;
pub const DEFAULT_MIN_VALUE: i64 = 0;
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Frames per second the event loop aims for
pub const TARGET_FPS: u32 = 60;

/// Environment variable naming the log file. Logging is off when unset.
pub const LOG_FILE_ENV: &str = "SORTVIZ_LOG";

/// Window title shown by terminals that support it
pub const WINDOW_TITLE: &str = "Sorting Algorithm Visualizer";

/// Startup parameters of a visualizer session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub width: u32,
    pub height: u32,
    pub count: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub fps: u32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            count: DEFAULT_COUNT,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            fps: TARGET_FPS,
        }
    }
}

impl VisualizerConfig {
    /// Check that the parameters describe a drawable, generatable array
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(VisualizerError::invalid_config("array length must be at least 1"));
        }
        if self.min_value > self.max_value {
            return Err(VisualizerError::invalid_config(format!(
                "value range is empty: {} > {}",
                self.min_value, self.max_value
            )));
        }
        if self.width <= SIDE_PAD || self.height <= TOP_PAD {
            return Err(VisualizerError::invalid_config(format!(
                "window {}x{} leaves no room for the chart",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(VisualizerError::invalid_config("frame rate must be positive"));
        }
        Ok(())
    }

    /// Time budget of a single frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
