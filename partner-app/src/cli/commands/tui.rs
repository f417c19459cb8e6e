use anyhow::Result;
use clap::Args;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::tui::{RuntimeConfig, Shell};

#[derive(Args)]
pub struct TuiCommands {
    /// Screen to open on start (repeatable, pushed in order)
    #[arg(long = "open", value_name = "KEY")]
    pub open: Vec<String>,

    /// Use the fast transition duration
    #[arg(long)]
    pub fast: bool,
}

pub async fn tui_command(args: TuiCommands, config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    crate::init_runtime_config(RuntimeConfig::from_config(&config, args.fast));
    launch_tui(&args.open).await
}

async fn launch_tui(deep_links: &[String]) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut shell = Shell::new(crate::global_runtime_config(), Instant::now());
    let queued = shell.open_deep_links(deep_links);
    if queued > 0 {
        info!("Queued {} deep link(s)", queued);
    }

    // Run the TUI loop
    let result = run_tui(&mut terminal, &mut shell).await;
    shell.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(terminal: &mut Terminal<B>, shell: &mut Shell) -> Result<()> {
    let tick_rate = crate::global_runtime_config().tick_rate;

    loop {
        let frame_start = Instant::now();

        // Process all pending events first for minimal input latency
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                debug!("Key {:?} {:?}", key.code, key.modifiers);
                shell.handle_key(key, Instant::now());
                if shell.should_quit() {
                    return Ok(());
                }
            }
        }

        shell.tick(Instant::now());
        if shell.should_quit() {
            return Ok(());
        }

        terminal.draw(|frame| shell.render(frame))?;

        // Sleep for the remainder of the frame
        if let Some(remaining) = tick_rate.checked_sub(frame_start.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
    }
}
