mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod ui;

use anyhow::Result;
use app::{AppState, PersistStatus};
use clap::{Parser, Subcommand};
use config::Settings;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Event poll interval for the TUI loop
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "dsa-progress")]
#[command(about = "A terminal checklist for tracking daily DSA practice questions", long_about = None)]
struct Cli {
    /// Progress file to use instead of the local or home data directory
    #[arg(short, long, global = true, env = "DSA_PROGRESS_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .dsa-progress directory in the current directory
    Init,
    /// Add a question to today's list
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark question N (1-based) as completed
    Check { number: usize },
    /// Mark question N (1-based) as not completed
    Uncheck { number: usize },
    /// Set today's topic
    Topic {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print today's checklist and progress
    Status,
    /// Generate a markdown summary of today
    Report {
        /// Output file path. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved progress file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        // Initialize local data directory
        let cwd = std::env::current_dir()?;
        let data_dir = persistence::init_local_data_dir(&cwd)?;
        println!("Initialized data directory: {}", data_dir.display());
        println!();
        println!("dsa-progress will now keep today's questions in this directory.");
        return Ok(());
    }

    let settings = Settings::resolve(cli.file)?;

    // Printing the path must not create the data directory or the log file
    if let Some(Commands::Path) = cli.command {
        println!("{}", settings.data_file.display());
        return Ok(());
    }

    logging::init(&settings.log_file);
    info!(path = %settings.data_file.display(), source = ?settings.source, "starting");

    match cli.command {
        None => run_tui(&settings),
        Some(command) => run_command(&settings, command),
    }
}

/// Load today's record into an app state
fn load_app(settings: &Settings) -> AppState {
    let today = chrono::Local::now().date_naive();
    let loaded = persistence::load_today(&settings.data_file, today, &mut rand::rng());
    info!(%today, fresh = loaded.is_fresh(), "loaded today's record");
    AppState::from_loaded(loaded, settings.data_file.clone())
}

/// Run a one-shot subcommand against today's record.
///
/// A fresh day is written even when the command itself fails.
fn run_command(settings: &Settings, command: Commands) -> Result<()> {
    let mut app = load_app(settings);
    if let PersistStatus::LoadFailed(_) = &app.persist_status {
        eprintln!("Warning: {}", app.persist_status.label());
    }

    let result = apply_command(&mut app, command);

    if app.needs_save {
        app.save();
        if let PersistStatus::SaveFailed(_) = &app.persist_status {
            eprintln!("Warning: {}", app.persist_status.label());
        }
    }

    result
}

fn apply_command(app: &mut AppState, command: Commands) -> Result<()> {
    match command {
        Commands::Add { text } => {
            let text = text.join(" ");
            if !app.add_question(&text) {
                anyhow::bail!("Question text is empty");
            }
            println!("Added #{}: {}", app.record.questions.len(), text.trim());
        }
        Commands::Check { number } => set_completed(app, number, true)?,
        Commands::Uncheck { number } => set_completed(app, number, false)?,
        Commands::Topic { text } => {
            app.set_topic(text.join(" ").trim());
            println!("Topic: {}", app.record.topic);
        }
        Commands::Status => print!("{}", status_text(app)),
        Commands::Report { output } => match output {
            Some(path) => {
                report::write_report(&app.record, &path)?;
                println!("Report generated: {}", path.display());
            }
            None => print!("{}", report::render_report(&app.record)),
        },
        Commands::Init | Commands::Path => {}
    }
    Ok(())
}

fn set_completed(app: &mut AppState, number: usize, value: bool) -> Result<()> {
    let total = app.record.questions.len();
    if number == 0 || !app.set_completed(number - 1, value) {
        anyhow::bail!("No question #{} (today has {})", number, total);
    }
    println!("{}", app.progress().count_label());
    Ok(())
}

/// Plain-text rendering of today's state for the `status` command
fn status_text(app: &AppState) -> String {
    let progress = app.progress();
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        ui::header_pane::format_header_date(app.record.date)
    ));
    if !app.record.topic.is_empty() {
        out.push_str(&format!("Topic: {}\n", app.record.topic));
    }
    out.push_str(&format!("\"{}\"\n\n", app.record.quote));

    for (i, question) in app.record.questions.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {}\n",
            i + 1,
            ui::questions_pane::checkbox(question),
            question.text
        ));
    }
    if !app.record.questions.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("{} ({}%)\n", progress.count_label(), progress.percent()));
    out.push_str(progress.tier().message());
    out.push('\n');
    out
}

fn run_tui(settings: &Settings) -> Result<()> {
    let mut app = load_app(settings);

    // Setup terminal
    enable_raw_mode()?;
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
    if app.needs_save {
        app.save();
    }
    if app.persist_status.is_error() {
        eprintln!("Warning: {}", app.persist_status.label());
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Midnight crossing starts a fresh checklist
        let today = chrono::Local::now().date_naive();
        app.check_rollover(today, &mut rand::rng());

        // Autosave if needed
        if app.needs_save {
            app.save();
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the date check keeps running
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}
