// Event loop state machine and rendering tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use sortviz::config::VisualizerConfig;
use sortviz::sort::{Algorithm, Direction, Mark};
use sortviz::ui::theme::DEFAULT_THEME;
use sortviz::ui::{App, Command, Mode};

fn app_with_seed(seed: u64) -> App<StdRng> {
    App::with_rng(VisualizerConfig::default(), StdRng::seed_from_u64(seed))
        .expect("Default config is valid")
}

fn run_until_idle(app: &mut App<StdRng>) -> usize {
    let mut frames = 0;
    while app.mode() == Mode::Sorting {
        app.tick();
        frames += 1;
        assert!(frames < 100_000, "Sort never finished");
    }
    frames
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.content[buffer.index_of(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_starts_idle_with_default_array() {
    let app = app_with_seed(1);
    assert_eq!(app.mode(), Mode::Idle);
    assert_eq!(app.display.len(), 50);
    assert!(app.display.values().iter().all(|v| (0..=100).contains(v)));
    assert_eq!(app.algorithm, Algorithm::Bubble);
    assert_eq!(app.direction, Direction::Ascending);
}

#[test]
fn test_sort_session_runs_to_completion() {
    let mut app = app_with_seed(2);
    app.handle_command(Command::Select(Algorithm::Insertion));
    app.handle_command(Command::Descending);

    assert!(app.handle_command(Command::Start));
    assert_eq!(app.mode(), Mode::Sorting);

    run_until_idle(&mut app);

    assert!(app.finished());
    assert!(Direction::Descending.is_sorted(app.display.values()));
    assert!(app.highlight().is_empty());
}

#[test]
fn test_one_step_per_frame() {
    let mut app = app_with_seed(3);
    app.handle_command(Command::Select(Algorithm::Counting));
    app.handle_command(Command::Start);

    // Counting sort takes exactly one step per element, plus the frame that
    // discovers exhaustion
    let frames = run_until_idle(&mut app);
    assert_eq!(frames, 51);
    assert_eq!(app.steps(), 50);
}

#[test]
fn test_configuration_rejected_while_sorting() {
    let mut app = app_with_seed(4);
    app.display.set_array(vec![5, 4, 3, 2, 1]);
    app.handle_command(Command::Start);

    assert!(!app.handle_command(Command::Descending));
    assert!(!app.handle_command(Command::Select(Algorithm::Selection)));
    assert!(!app.handle_command(Command::Start));
    assert_eq!(app.direction, Direction::Ascending);
    assert_eq!(app.algorithm, Algorithm::Bubble);

    run_until_idle(&mut app);
    assert!(app.handle_command(Command::Descending));
    assert_eq!(app.direction, Direction::Descending);
}

#[test]
fn test_reset_cancels_session() {
    let mut app = app_with_seed(5);
    app.handle_command(Command::Start);
    app.tick();
    app.tick();

    let before = app.display.values().to_vec();
    assert!(app.handle_command(Command::Reset));

    assert_eq!(app.mode(), Mode::Idle);
    assert!(!app.finished());
    assert_eq!(app.steps(), 0);
    assert_eq!(app.display.len(), 50);
    assert_ne!(app.display.values(), before.as_slice());

    // The abandoned session does not touch the new array
    let fresh = app.display.values().to_vec();
    app.tick();
    assert_eq!(app.display.values(), fresh.as_slice());
}

#[test]
fn test_reset_from_idle() {
    let mut app = app_with_seed(6);
    let before = app.display.values().to_vec();
    app.handle_command(Command::Reset);
    assert_eq!(app.mode(), Mode::Idle);
    assert_ne!(app.display.values(), before.as_slice());
}

#[test]
fn test_quit_is_always_accepted() {
    let mut app = app_with_seed(7);
    app.handle_command(Command::Start);
    assert!(app.handle_command(Command::Quit));
    assert!(app.should_quit);
}

#[test]
fn test_key_bindings() {
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    assert_eq!(Command::from_key(key(KeyCode::Char('r'))), Some(Command::Reset));
    assert_eq!(Command::from_key(key(KeyCode::Char(' '))), Some(Command::Start));
    assert_eq!(Command::from_key(key(KeyCode::Char('a'))), Some(Command::Ascending));
    assert_eq!(Command::from_key(key(KeyCode::Char('d'))), Some(Command::Descending));
    assert_eq!(
        Command::from_key(key(KeyCode::Char('b'))),
        Some(Command::Select(Algorithm::Bubble))
    );
    assert_eq!(
        Command::from_key(key(KeyCode::Char('i'))),
        Some(Command::Select(Algorithm::Insertion))
    );
    assert_eq!(
        Command::from_key(key(KeyCode::Char('c'))),
        Some(Command::Select(Algorithm::Counting))
    );
    assert_eq!(
        Command::from_key(key(KeyCode::Char('s'))),
        Some(Command::Select(Algorithm::Selection))
    );
    assert_eq!(Command::from_key(key(KeyCode::Char('q'))), Some(Command::Quit));
    assert_eq!(Command::from_key(key(KeyCode::Esc)), Some(Command::Quit));
    assert_eq!(
        Command::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Command::Quit)
    );
    assert_eq!(Command::from_key(key(KeyCode::Char('x'))), None);
}

#[test]
fn test_render_idle_frame() {
    let mut app = app_with_seed(8);
    app.handle_command(Command::Select(Algorithm::Selection));
    app.handle_command(Command::Descending);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();

    let header: String = (0..6).map(|y| row_text(buffer, y)).collect();
    assert!(header.contains("Selection Sort : Descending"));
    assert!(header.contains("IDLE"));

    // Every bar reaches the bottom row; the first uses the first gradient shade
    let first_bar = buffer.content[buffer.index_of(5, 23)].bg;
    assert_eq!(first_bar, DEFAULT_THEME.gradient[0]);
}

#[test]
fn test_render_highlights_step() {
    let mut app = app_with_seed(9);
    app.display.set_array(vec![2, 1]);
    app.handle_command(Command::Start);
    app.tick();

    assert_eq!(app.display.values(), &[1, 2]);
    assert_eq!(app.highlight().get(&0), Some(&Mark::MovedIn));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();

    // Two bars of 350 logical px: columns 5..40 and 40..75
    assert_eq!(buffer.content[buffer.index_of(5, 23)].bg, DEFAULT_THEME.moved_in);
    assert_eq!(buffer.content[buffer.index_of(40, 23)].bg, DEFAULT_THEME.moved_from);

    let header: String = (0..6).map(|y| row_text(buffer, y)).collect();
    assert!(header.contains("SORTING"));
}

#[test]
fn test_render_degenerate_array() {
    let mut app = app_with_seed(10);
    app.display.set_array(vec![4, 4, 4]);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();

    // Minimum-height bars still occupy the bottom row
    assert_eq!(buffer.content[buffer.index_of(5, 23)].bg, DEFAULT_THEME.gradient[0]);
    assert_eq!(buffer.content[buffer.index_of(5, 22)].bg, DEFAULT_THEME.bg);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = VisualizerConfig {
        min_value: 5,
        max_value: 1,
        ..VisualizerConfig::default()
    };
    assert!(App::with_rng(config, StdRng::seed_from_u64(0)).is_err());
}
