use std::{io, fs::{File, OpenOptions}, io::Write, path::{Path, PathBuf}, time::{Duration, Instant}};
use anyhow::{Result, Context};
use clap::Parser;
use once_cell::sync::OnceCell;
use ratatui::{backend::CrosstermBackend, Terminal};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use vidboard_core::{BoardManifest, default_manifest_path};

mod app;
mod commands;
mod events;
mod sink;
mod ui;

use app::App;
use events::event_utils;

/// Terminal board that switches an embedded video player between preset videos
#[derive(Parser, Debug)]
#[command(name = "vidboard", version)]
struct Args {
    /// Board manifest (TOML). Defaults to <config dir>/vidboard/board.toml
    manifest: Option<PathBuf>,

    /// Embed provider host, overriding the manifest's `provider`
    #[arg(long)]
    host: Option<String>,

    /// File that receives the timestamped debug log
    #[arg(long, default_value = "vidboard_debug.log")]
    log_file: PathBuf,
}

static DEBUG_LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

// stderr is hidden behind the alternate screen, so lifecycle events go to a file
fn debug_log(message: &str) {
    let Some(path) = DEBUG_LOG_PATH.get() else {
        return;
    };
    if let Ok(mut file) = open_log_file(path) {
        let datetime = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", datetime, message);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log records share the debug log file; stderr would draw over the board
    let log_target = open_log_file(&args.log_file)
        .with_context(|| format!("Failed to open log file {}", args.log_file.display()))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_target)))
        .init();
    let _ = DEBUG_LOG_PATH.set(args.log_file.clone());
    debug_log("Application starting");

    let manifest_path = match args.manifest {
        Some(path) => path,
        None => default_manifest_path().context("No manifest given and no default location")?,
    };
    let manifest = BoardManifest::load(&manifest_path)
        .with_context(|| format!("Failed to load board from {}", manifest_path.display()))?;
    debug_log(&format!("Loaded manifest {}", manifest_path.display()));

    let mut app = App::from_manifest(&manifest, args.host.as_deref());
    debug_log(&format!(
        "Board bound: {}",
        app.board.as_ref().map_or(0, |board| board.len())
    ));

    // Set up clean terminal restoration on panic
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        debug_log(&format!("PANIC: {}", panic_info));
        orig_hook(panic_info);
    }));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to create terminal");
        }
    };

    debug_log("Entering main loop");
    let result = run(&mut terminal, &mut app);

    debug_log("CLEANUP: Starting terminal cleanup sequence");
    let cleanup_result = (|| -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ).context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    })();

    if let Err(e) = cleanup_result {
        debug_log(&format!("Error during cleanup: {}", e));
        eprintln!("Error during cleanup: {}", e);
    }

    if let Some(board) = &app.board {
        log::info!("Last source: {}", board.player().source);
    }
    debug_log("Application terminated");
    result
}

/// Event loop: every input is handled to completion before the next one is read
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    while !app.should_quit {
        if dirty || last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| {
                if let Err(e) = ui::draw_ui(f, app) {
                    debug_log(&format!("ERROR: UI draw function error: {}", e));
                }
            })?;
            last_tick = Instant::now();
            dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            if event_utils::is_terminate_event(&event) {
                debug_log("ACTION: Quit key pressed");
                app.should_quit = true;
                break;
            }
            match event {
                Event::Key(key) => {
                    if let Err(e) = app.handle_key_event(key) {
                        debug_log(&format!("Key handler error: {}", e));
                    }
                }
                Event::Mouse(mouse) => {
                    if let Err(e) = app.handle_mouse_event(mouse) {
                        debug_log(&format!("ERROR: Mouse handler error: {}", e));
                    }
                }
                Event::Resize(w, h) => {
                    debug_log(&format!("Resize event: {}x{}", w, h));
                }
                _ => {}
            }
            dirty = true;
        }

        app.update()?;
    }

    Ok(())
}
