//! `casefile` — local contact-tracking database and terminal UI.
//!
//! # Usage
//!
//! ```text
//! casefile init
//! casefile generate --count 50 --out contacts.csv
//! casefile import contacts.csv
//! casefile                      # terminal UI
//! ```

mod app;
mod settings;
mod ui;

use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use casefile_core::{
  generate::{DEFAULT_ROSTER_SIZE, RosterGenerator},
  roster,
};
use casefile_store_sqlite::{Database, create_table, get_db_connection};
use clap::{Parser, Subcommand};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "casefile", version, about = "Local contact-tracking database")]
struct Cli {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "casefile.toml", env = "CASEFILE_CONFIG")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Open (or create) the database and ensure the `fakeData` table exists.
  Init,
  /// Append a value to `fakeData`.
  Put { value: String },
  /// Print every value in `fakeData`.
  Values,
  /// Print each table and its columns.
  Schema,
  /// Write a synthetic contact roster to CSV.
  Generate {
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROSTER_SIZE)]
    count: u32,
    /// Seed for a reproducible roster.
    #[arg(long)]
    seed:  Option<u64>,
    #[arg(short, long, default_value = "contacts.csv")]
    out:   PathBuf,
  },
  /// Load a roster CSV into the `contacts` table.
  Import { file: PathBuf },
  /// Print the stored roster.
  Contacts,
  /// Browse contacts in the terminal UI (default).
  Tui,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;
  let command = cli.command.unwrap_or(Command::Tui);
  init_tracing(log_target(&settings, matches!(command, Command::Tui)))?;

  match command {
    Command::Init => {
      let db = open(&settings).await?;
      println!("database {:?} ready", db.name());
    }
    Command::Put { value } => {
      let db = open(&settings).await?;
      db.insert_value(value).await.context("failed to insert value")?;
    }
    Command::Values => {
      let db = open(&settings).await?;
      for value in db.values().await.context("failed to read values")? {
        println!("{value}");
      }
    }
    Command::Schema => {
      let db = open(&settings).await?;
      for table in db.table_names().await? {
        println!("{table}");
        for col in db.table_columns(&table).await? {
          let null = if col.not_null { " NOT NULL" } else { "" };
          println!("  {} {}{null}", col.name, col.decl_type);
        }
      }
    }
    Command::Generate { count, seed, out } => {
      let mut generator = match seed {
        Some(seed) => RosterGenerator::from_seed(seed)?,
        None => RosterGenerator::from_os_rng()?,
      };
      let contacts = generator.generate(count)?;
      let file = File::create(&out)
        .with_context(|| format!("failed to create {}", out.display()))?;
      roster::write_roster(file, &contacts)?;
      tracing::info!(count, path = %out.display(), "wrote roster");
    }
    Command::Import { file } => {
      let reader = File::open(&file)
        .with_context(|| format!("failed to open {}", file.display()))?;
      let contacts = roster::read_roster(reader)
        .with_context(|| format!("failed to parse {}", file.display()))?;
      let db = open_contacts(&settings).await?;
      let written = db.insert_contacts(&contacts).await?;
      tracing::info!(written, "imported roster");
    }
    Command::Contacts => {
      let db = open_contacts(&settings).await?;
      for c in db.list_contacts().await? {
        println!(
          "{:>4}  {:<32} {}  {:<18} {:<6} at_risk={} active={} deceased={}",
          c.contact_id,
          c.full_name(),
          c.dob,
          c.race,
          c.sex,
          u8::from(c.is_at_risk),
          u8::from(c.is_active),
          u8::from(c.is_deceased),
        );
      }
    }
    Command::Tui => {
      let app = match load_contacts(&settings).await {
        Ok(contacts) => App::new(contacts),
        Err(error) => App::failed(format!("{error:#}")),
      };
      run_tui(app).await?;
    }
  }

  Ok(())
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
  File(PathBuf),
  Stderr,
  /// The TUI owns the terminal; errors reach the user through the status bar.
  Discard,
}

fn log_target(settings: &Settings, tui: bool) -> LogTarget {
  match &settings.log_file {
    Some(path) => LogTarget::File(path.clone()),
    None if tui => LogTarget::Discard,
    None => LogTarget::Stderr,
  }
}

fn init_tracing(target: LogTarget) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  match target {
    LogTarget::File(path) => {
      let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    LogTarget::Stderr => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
    LogTarget::Discard => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::sink)
        .init();
    }
  }
  Ok(())
}

async fn open(settings: &Settings) -> Result<Database> {
  let db = get_db_connection(&settings.database).await;
  create_table(&db).await.context("failed to create table")?;
  Ok(db)
}

async fn open_contacts(settings: &Settings) -> Result<Database> {
  let db = get_db_connection(&settings.database).await;
  db.create_contacts_table()
    .await
    .context("failed to create contacts table")?;
  Ok(db)
}

async fn load_contacts(settings: &Settings) -> Result<Vec<casefile_core::Contact>> {
  let db = open_contacts(settings).await?;
  db.list_contacts().await.context("failed to load contacts")
}

// ─── Terminal UI ──────────────────────────────────────────────────────────────

async fn run_tui(mut app: App) -> Result<()> {
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key)
    {
      break;
    }
  }

  Ok(())
}
