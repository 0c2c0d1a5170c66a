use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use clipmark::app::App;
use clipmark::bookmarks::{self, BookmarkStore};
use clipmark::clipboard::SystemClipboard;
use clipmark::config::{self, ConfigResult};

const LOG_ENV: &str = "CLIPMARK_LOG";

/// Clipboard history, bookmarks and path tools in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Read settings from this file instead of ~/.config/clipmark/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep bookmarks in this file
    #[arg(long, value_name = "PATH")]
    bookmarks: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let ConfigResult {
        config,
        warning: config_warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    let bookmarks_path = args
        .bookmarks
        .or_else(|| config.bookmarks.path.clone())
        .or_else(bookmarks::bookmarks_path)
        .unwrap_or_else(|| PathBuf::from("bookmarks.json"));
    let (store, bookmarks_warning) = BookmarkStore::open_or_recover(bookmarks_path);

    let source = SystemClipboard::new(config.clipboard.backend);
    let mut app = App::new(Box::new(source), store, &config);
    for warning in config_warning.iter().chain(bookmarks_warning.iter()) {
        app.report_startup_problem(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// File logging, only when CLIPMARK_LOG is set (e.g. CLIPMARK_LOG=debug)
fn init_logging() {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return;
    };
    let Some(dir) = dirs::cache_dir().map(|d| d.join(config::CONFIG_DIR)) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("clipmark.log")) else {
        return;
    };

    let _ = env_logger::Builder::new()
        .parse_filters(&filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
