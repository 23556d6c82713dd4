// sortviz: step-by-step sorting visualizer

use sortviz::config::{VisualizerConfig, WINDOW_TITLE};
use sortviz::error::Result;
use sortviz::logging;
use sortviz::ui::{App, RenderContext};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    if let Some(path) = logging::init_from_env()? {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let config = VisualizerConfig::default();
    let mut app = App::new(config)?;

    // Dropping the context restores the terminal, including on error
    let mut context = RenderContext::new(WINDOW_TITLE)?;
    app.run(context.terminal_mut())?;
    drop(context);

    tracing::info!("exited cleanly");
    Ok(())
}
