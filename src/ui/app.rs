//! Application state and the fixed-rate event loop

use crate::config::VisualizerConfig;
use crate::display::DisplayState;
use crate::error::Result;
use crate::generator::generate;
use crate::sort::{Algorithm, Direction, Highlight, StepSort};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::render::{draw, FrameView};

/// What the event loop is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for commands; the chart is static
    Idle,
    /// One sorting step per frame
    Sorting,
}

/// Keyboard commands understood by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Start,
    Ascending,
    Descending,
    Select(Algorithm),
    Quit,
}

impl Command {
    /// Map a key press to a command
    pub fn from_key(key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
            KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Ascending),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Descending),
            KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::Select(Algorithm::Bubble)),
            KeyCode::Char('i') | KeyCode::Char('I') => {
                Some(Command::Select(Algorithm::Insertion))
            }
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Select(Algorithm::Counting)),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Command::Select(Algorithm::Selection))
            }
            _ => None,
        }
    }
}

/// An algorithm in flight
struct SortSession {
    sorter: Box<dyn StepSort>,
    algorithm: Algorithm,
    direction: Direction,
    steps: usize,
}

/// The main application state
pub struct App<R: Rng = StdRng> {
    config: VisualizerConfig,
    rng: R,

    /// Array and bar geometry
    pub display: DisplayState,

    /// Algorithm started by the next `Start`
    pub algorithm: Algorithm,

    /// Direction used by the next `Start`
    pub direction: Direction,

    session: Option<SortSession>,

    /// Marks from the step taken this frame; empty on idle frames
    highlight: Highlight,

    /// Step count of the last completed session
    last_steps: usize,

    /// Whether the last session ran to completion on the current array
    finished: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App<StdRng> {
    /// Create an app seeded from system entropy
    pub fn new(config: VisualizerConfig) -> Result<Self> {
        App::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> App<R> {
    /// Create an app drawing its arrays from `rng`
    pub fn with_rng(config: VisualizerConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let values = generate(&mut rng, config.count, config.min_value, config.max_value);
        let display = DisplayState::new(config.width, config.height, values);

        Ok(App {
            config,
            rng,
            display,
            algorithm: Algorithm::default(),
            direction: Direction::default(),
            session: None,
            highlight: Highlight::default(),
            last_steps: 0,
            finished: false,
            should_quit: false,
        })
    }

    pub fn mode(&self) -> Mode {
        if self.session.is_some() {
            Mode::Sorting
        } else {
            Mode::Idle
        }
    }

    /// Steps taken by the running session, or by the last one when idle
    pub fn steps(&self) -> usize {
        self.session
            .as_ref()
            .map_or(self.last_steps, |session| session.steps)
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Apply a command. Returns `false` when it was rejected.
    ///
    /// Configuration commands are rejected while sorting; `Reset` and `Quit`
    /// are always accepted.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                self.should_quit = true;
                true
            }
            Command::Reset => {
                self.reset();
                true
            }
            _ if self.session.is_some() => {
                debug!(?command, "command ignored while sorting");
                false
            }
            Command::Start => {
                self.start();
                true
            }
            Command::Ascending => {
                self.direction = Direction::Ascending;
                true
            }
            Command::Descending => {
                self.direction = Direction::Descending;
                true
            }
            Command::Select(algorithm) => {
                self.algorithm = algorithm;
                true
            }
        }
    }

    /// Replace the array and drop any running session
    fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                algorithm = session.algorithm.name(),
                direction = %session.direction,
                steps = session.steps,
                "sort cancelled"
            );
        }

        let values = generate(
            &mut self.rng,
            self.config.count,
            self.config.min_value,
            self.config.max_value,
        );
        self.display.set_array(values);
        self.highlight.clear();
        self.last_steps = 0;
        self.finished = false;
        debug!(len = self.display.len(), "array regenerated");
    }

    fn start(&mut self) {
        info!(
            algorithm = self.algorithm.name(),
            direction = %self.direction,
            len = self.display.len(),
            "sort started"
        );
        self.session = Some(SortSession {
            sorter: self.algorithm.start(&self.display, self.direction),
            algorithm: self.algorithm,
            direction: self.direction,
            steps: 0,
        });
        self.finished = false;
    }

    /// Advance one frame: take one step if sorting
    pub fn tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.highlight.clear();
            return;
        };

        match session.sorter.step(&mut self.display) {
            Some(highlight) => {
                session.steps += 1;
                self.highlight = highlight;
            }
            None => {
                info!(
                    algorithm = session.algorithm.name(),
                    direction = %session.direction,
                    steps = session.steps,
                    "sort finished"
                );
                self.last_steps = session.steps;
                self.finished = true;
                self.session = None;
                self.highlight.clear();
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let view = FrameView {
            display: &self.display,
            algorithm: self.algorithm,
            direction: self.direction,
            mode: self.mode(),
            finished: self.finished,
            steps: self.steps(),
            highlight: &self.highlight,
        };
        draw(frame, &view);
    }

    /// Run the event loop until a quit command
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame_duration = self.config.frame_duration();

        loop {
            let frame_start = Instant::now();

            self.tick();
            terminal.draw(|f| self.render(f))?;

            // Spend the rest of the frame handling input
            loop {
                let remaining = frame_duration.saturating_sub(frame_start.elapsed());
                if remaining == Duration::ZERO || !event::poll(remaining)? {
                    break;
                }
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(command) = Command::from_key(key) {
                            self.handle_command(command);
                        }
                    }
                }
                if self.should_quit {
                    break;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
