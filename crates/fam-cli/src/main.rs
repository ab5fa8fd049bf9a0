//! `fam` — terminal client for the FAM Bottling Co supplier platform.
//!
//! # Usage
//!
//! ```
//! fam --url http://localhost:5000/api
//! fam --config ~/.config/fam/config.toml
//! FAM_API_URL=https://api.fambottling.example fam
//! ```

mod app;
mod forms;
mod ui;

use std::{io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fam_client::{ApiClient, ApiConfig, SessionStore};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "fam", about = "Terminal client for the FAM Bottling Co platform")]
struct Args {
  /// Path to a TOML config file (url, session_dir).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the backend API (default: http://localhost:5000/api).
  #[arg(long, env = "FAM_API_URL")]
  url: Option<String>,

  /// Directory holding the durable session entries (default: ~/.fam).
  #[arg(long, env = "FAM_SESSION_DIR")]
  session_dir: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:         String,
  #[serde(default)]
  session_dir: Option<PathBuf>,
}

fn default_session_dir() -> PathBuf {
  std::env::var_os("HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from("."))
    .join(".fam")
}

/// Route tracing to a file when `FAM_LOG` is set; stderr would tear the
/// alternate screen apart.
fn init_tracing() -> Result<()> {
  let Some(path) = std::env::var_os("FAM_LOG") else {
    return Ok(());
  };
  let file = std::fs::File::create(&path)
    .with_context(|| format!("opening log file {}", PathBuf::from(&path).display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::sync::Arc::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing()?;

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:5000/api".to_string()),
  };
  let session_dir = args
    .session_dir
    .or(file_cfg.session_dir)
    .unwrap_or_else(default_session_dir);

  // Restore the session before the first frame — the first guard decision
  // must already see the right identity.
  let sessions = SessionStore::new(session_dir);
  let restored = sessions.load();

  let client = ApiClient::new(api_config)?;
  let mut app = App::new(client, sessions, restored);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

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

    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) => {
          let cont = app.handle_key(key).await?;
          if !cont {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
