mod app;
mod config;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use config::{init_logging, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{format_time, TaskList, TimerPhase, TimerState};
use notifications::TerminalCue;
use persistence::{
    init_local_dir, load_tasks, load_timer, save_tasks, FileStore, KeyValueStore, MemoryStore,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "stargaze")]
#[command(about = "A calm terminal focus timer with a persisted task checklist", long_about = None)]
struct Cli {
    /// Data directory (defaults to the nearest .stargaze, then ~/.stargaze)
    #[arg(long, global = true, env = "STARGAZE_DIR")]
    dir: Option<PathBuf>,

    /// Don't ring the terminal bell when the countdown finishes
    #[arg(long, global = true)]
    no_sound: bool,

    /// Keep timer, tasks and theme in memory only for this session
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .stargaze directory in the current directory
    Init,
    /// Print the timer state and task summary
    Status,
    /// Add a task without opening the UI
    Add {
        /// Task text
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let dir = init_local_dir(&std::env::current_dir()?)?;
        println!("Initialized stargaze directory: {}", dir.display());
        println!();
        println!("Stargaze will now keep its timer and tasks in this directory.");
        return Ok(());
    }

    let config = Config::resolve(cli.dir.as_deref(), cli.no_sound)?;
    init_logging(&config)?;
    tracing::info!(data_dir = %config.data_dir.display(), "stargaze starting");

    match cli.command {
        Some(Commands::Status) => {
            let store = FileStore::open(&config.data_dir)?;
            print_status(&load_timer(&store), &load_tasks(&store));
            Ok(())
        }
        Some(Commands::Add { text }) => {
            let mut store = FileStore::open(&config.data_dir)?;
            let mut tasks = load_tasks(&store);
            match tasks.add(&text) {
                Some(_) => {
                    save_tasks(&mut store, &tasks);
                    println!("Added: {}", text.trim());
                }
                None => println!("Nothing to add"),
            }
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(&config, cli.ephemeral),
    }
}

fn print_status(timer: &TimerState, tasks: &TaskList) {
    let state = match timer.phase() {
        TimerPhase::Idle => "idle",
        TimerPhase::Running => "running",
        TimerPhase::Paused => "paused",
        TimerPhase::Finished => "finished",
    };
    println!(
        "Timer: {} / {} ({})",
        format_time(timer.remaining_secs),
        format_time(timer.preset_secs),
        state
    );
    println!("Tasks: {}/{} done", tasks.done_count(), tasks.len());
    for task in tasks.tasks() {
        let mark = if task.done { "x" } else { " " };
        println!("  [{}] {}", mark, task.text);
    }
}

fn run_tui(config: &Config, ephemeral: bool) -> Result<()> {
    let store: Box<dyn KeyValueStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::open(&config.data_dir)?)
    };
    let cue = TerminalCue::new(config.sound);
    let mut app = AppState::new(
        store,
        Box::new(cue),
        StdRng::from_entropy(),
        Instant::now(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the countdown schedule and flush state
    app.shutdown();
    tracing::info!("stargaze stopped");

    if let Err(err) = &result {
        tracing::error!(error = %err, "ui loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &Config,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(config.poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        app.on_tick(Instant::now());
    }
}
