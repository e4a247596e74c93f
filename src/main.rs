use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use folio::app::App;
use folio::config::Config;
use folio::content::{self, ContentSources};
use folio::services::app_dirs::{self, AppDirs};
use folio::services::{prefs, tracing_setup};
use folio::view;
use folio::view::theme::ThemeChoice;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A terminal portfolio browser
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio from the comfort of a terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding site.json / projects.json / programs.json
    #[arg(long, value_name = "PATH")]
    content_dir: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Theme for this session, not persisted (dark or light)
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Skip the remote content source
    #[arg(long)]
    offline: bool,

    /// Print the effective content as JSON and exit
    #[arg(long)]
    dump_content: bool,
}

/// Pick the startup theme. Precedence: CLI flag, saved preference,
/// configured override, site default.
fn resolve_theme_choice(
    cli: Option<&str>,
    saved: Option<ThemeChoice>,
    configured: Option<&str>,
    site_default: &str,
) -> ThemeChoice {
    if let Some(name) = cli {
        return ThemeChoice::from_name(name);
    }
    if let Some(saved) = saved {
        return saved;
    }
    if let Some(name) = configured {
        return ThemeChoice::from_name(name);
    }
    ThemeChoice::from_name(site_default)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(app_dirs::default_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}", log_file.display());
    }

    let dirs = AppDirs::from_system().context("Failed to determine application directories")?;
    let working_dir = std::env::current_dir().unwrap_or_default();

    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file must load; the search chain is only for the
        // implicit locations.
        match Config::load_from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "Error: Failed to load config from {}: {}",
                    config_path.display(),
                    e
                );
                anyhow::bail!("Failed to load config from {}: {}", config_path.display(), e);
            }
        }
    } else {
        Config::load_for_working_dir(&dirs, &working_dir)
    };

    // CLI flag overrides config
    if let Some(dir) = &args.content_dir {
        config.content.dir = Some(dir.clone());
    }

    let sources = ContentSources {
        dir: config.content.dir.clone(),
        remote_url: config.content.remote_url.clone(),
        offline: args.offline,
    };
    let store = content::load(&sources);

    // Handle --dump-content before any terminal setup
    if args.dump_content {
        let dump = serde_json::json!({
            "site": store.site,
            "projects": store.projects(),
            "programs": store.programs(),
            "commands": store.commands,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).context("Failed to serialize content")?
        );
        return Ok(());
    }

    let theme_choice = resolve_theme_choice(
        args.theme.as_deref(),
        prefs::load_theme(&dirs.theme_pref_path()),
        config.theme.as_deref(),
        &store.site.theme.default,
    );

    tracing::info!("Portfolio browser starting");
    tracing::info!(
        "Loaded {} projects, {} programs, theme {}",
        store.projects().len(),
        store.programs().len(),
        theme_choice.name()
    );

    let tick_rate = Duration::from_millis(config.ui.tick_ms.max(16));
    let mut app = App::new(store, theme_choice, &dirs, &config.ui);

    // ratatui::init installs a panic hook that restores the terminal
    let mut terminal = ratatui::init();
    let result = run_event_loop(&mut app, &mut terminal, tick_rate);
    ratatui::restore();

    result.context("Event loop returned an error")
}

/// Main event loop: render when dirty, poll with a tick-bounded timeout.
fn run_event_loop(
    app: &mut App,
    terminal: &mut DefaultTerminal,
    tick_rate: Duration,
) -> AnyhowResult<()> {
    let mut last_tick = Instant::now();
    let mut needs_render = true;

    loop {
        if app.should_quit() {
            break;
        }

        if needs_render {
            terminal.draw(|frame| view::render(frame, app))?;
            needs_render = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press {
                        tracing::trace!(
                            "Key event: code={:?}, modifiers={:?}",
                            key_event.code,
                            key_event.modifiers
                        );
                        if app.handle_key(key_event.code, key_event.modifiers) {
                            needs_render = true;
                        }
                    }
                }
                CrosstermEvent::Resize(w, h) => {
                    tracing::trace!("Resize to {}x{}", w, h);
                    needs_render = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if app.on_tick() {
                needs_render = true;
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}
