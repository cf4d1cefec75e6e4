mod app;
mod controllers;
mod domain;
mod input;
mod logging;
mod notice;
mod persistence;
mod repository;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    config_file, ensure_data_dir, get_data_dir, init_local_data_dir, load_settings, log_dir,
    storage_file, FileKvStore, Settings, StoreError,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use repository::TodoRepository;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo-keeper")]
#[command(about = "A small terminal todo list that remembers everything between runs", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .todo-keeper, then ~/.todo-keeper
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .todo-keeper directory in the current directory
    Init,
    /// Print all todos, newest first
    List,
    /// Add a todo
    Add {
        /// Todo text (words are joined with spaces)
        #[arg(required = true)]
        content: Vec<String>,
    },
    /// Toggle completion of a todo
    Done { id: u64 },
    /// Remove a todo
    Rm { id: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        println!("Initialized todo directory: {}", data_dir.display());
        println!();
        println!("todo-keeper will now use this local directory for storage.");
        return Ok(());
    }

    let (mut repo, settings) = open_repository(&cli)?;

    match cli.command {
        None => run_tui(repo, &settings),
        Some(Commands::List) => {
            if repo.is_empty() {
                println!("No todos yet.");
            }
            for todo in repo.list() {
                println!(
                    "{} {:>4}  {}  {}",
                    todo.check_mark(),
                    todo.id,
                    todo.registered_at,
                    todo.content
                );
            }
            Ok(())
        }
        Some(Commands::Add { content }) => {
            let saved = repo
                .add(&content.join(" "))
                .context("Could not add todo")?;
            print_warning(saved.warning.as_ref());
            println!("Todo {} added.", saved.value);
            Ok(())
        }
        Some(Commands::Done { id }) => {
            let toggled = repo.toggle_complete(id);
            print_warning(toggled.warning.as_ref());
            match toggled.value {
                Some(true) => println!("Todo {} completed.", id),
                Some(false) => println!("Todo {} reopened.", id),
                None => println!("No todo with id {}.", id),
            }
            Ok(())
        }
        Some(Commands::Rm { id }) => {
            let removed = repo.remove(id);
            print_warning(removed.warning.as_ref());
            match removed.value {
                Some(_) => println!("Todo {} deleted.", id),
                None => println!("No todo with id {}.", id),
            }
            Ok(())
        }
        Some(Commands::Init) => Ok(()),
    }
}

/// Resolve the data directory, load settings, start logging and open the store
fn open_repository(cli: &Cli) -> Result<(TodoRepository<FileKvStore>, Settings)> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => get_data_dir()?,
    };
    ensure_data_dir(&data_dir)?;

    let settings = load_settings(config_file(&data_dir));

    let level = cli
        .log_level
        .clone()
        .or_else(|| settings.log_level.clone())
        .unwrap_or_else(|| logging::default_log_level().to_string());
    if let Err(e) = logging::init_logging(&level, &log_dir(&data_dir)) {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let store = FileKvStore::open(storage_file(&data_dir), settings.storage_quota_bytes);
    log::debug!("event=store_open path={}", store.path().display());

    Ok((TodoRepository::initialize(store), settings))
}

fn print_warning(warning: Option<&StoreError>) {
    if let Some(e) = warning {
        eprintln!("Warning: could not save changes: {}", e);
    }
}

fn run_tui(repo: TodoRepository<FileKvStore>, settings: &Settings) -> Result<()> {
    let mut app = AppState::new(repo, settings);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    match app.shutdown() {
        Ok(store) => log::debug!("event=store_close path={}", store.path().display()),
        Err(e) => {
            log::warn!("event=shutdown_flush status=failed error={}", e);
            eprintln!("Error saving todos: {}", e);
        }
    }
    log::info!("event=app_exit status=ok");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState<FileKvStore>) -> Result<()> {
    let poll_timeout = ticker::poll_timeout();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick();
    }
}
