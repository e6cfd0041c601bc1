//! Terminal demo for the tabslide tab strip.
//!
//! Runs a full-screen host with five tabs. Switch with Left/Right or
//! the digit keys and watch the highlight slide; quit with `q`, Esc,
//! or Ctrl+C.

mod demo_tabs;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tabslide_core::config::parse_color;
use tabslide_core::{InputEvent, StripConfig};
use tabslide_ui::Shell;
use tracing_subscriber::EnvFilter;

use crate::demo_tabs::DemoAdapter;

/// Poll timeout while a slide is in flight.
const ANIMATION_TICK: Duration = Duration::from_millis(5);
/// Poll timeout while the strip is idle.
const IDLE_TICK: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "tabslide", version, about = "Animated tab strip demo")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slide duration in milliseconds
    #[arg(long)]
    duration: Option<u64>,

    /// Highlight color, named or #rrggbb
    #[arg(long)]
    highlight: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let mut shell = Shell::new(config);
    shell
        .set_adapter(&DemoAdapter)
        .map_err(|e| eyre!("failed to build tabs: {e}"))?;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut shell);
    restore_terminal(&mut terminal)?;

    result
}

/// Logs to the file named by `TABSLIDE_LOG`; stays silent otherwise.
fn init_tracing() -> Result<()> {
    if let Ok(path) = std::env::var("TABSLIDE_LOG") {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

/// Config file first, then command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<StripConfig> {
    let mut config = match &cli.config {
        Some(path) => StripConfig::load(path)?,
        None => StripConfig::default(),
    };

    if let Some(duration) = cli.duration {
        config.duration_ms = duration;
    }
    if let Some(color) = &cli.highlight {
        config.highlight = parse_color(color).map_err(|e| eyre!(e))?;
    }

    Ok(config)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, shell: &mut Shell) -> Result<()> {
    loop {
        terminal.draw(|frame| shell.render(frame))?;

        let timeout = if shell.is_animating() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };
        if event::poll(timeout)? {
            shell.handle(InputEvent::from(event::read()?));
        }

        if shell.should_quit() {
            break;
        }

        shell.tick(Instant::now());
    }

    Ok(())
}
