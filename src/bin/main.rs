use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use glance_core::{
    app::{ReaderApp, ReaderConfig, TickResult},
    content::default_sample_document,
    input::InputProvider,
    metrics::{MonospaceMetrics, TextMetrics},
    session::{SessionStore, WindowGeometry},
};
use log::{error, info, warn};

use document::{DocumentError, FileDocument};
use session_file::FileSessionStore;
use session_sync::SessionSyncState;
use stdin_input::StdinInput;
use terminal::TerminalRenderer;

#[path = "main/document.rs"]
mod document;
#[path = "main/session_file.rs"]
mod session_file;
#[path = "main/session_sync.rs"]
mod session_sync;
#[path = "main/stdin_input.rs"]
mod stdin_input;
#[path = "main/terminal.rs"]
mod terminal;

const DEFAULT_SURFACE_WIDTH: u32 = 480;
const IDLE_POLL_MS: u64 = 16;
const SESSION_SAVE_DEBOUNCE_MS: u64 = 4_000;

#[derive(Parser, Debug)]
#[command(name = "glance")]
#[command(about = "Line-window speed reader for plain text")]
#[command(version)]
/// Command-line arguments.
struct Args {
    /// Text file to read (a built-in sample when omitted)
    #[arg(env = "GLANCE_FILE")]
    file: Option<PathBuf>,

    /// Surface width in pixels (restored from the last session when omitted)
    #[arg(long, env = "GLANCE_WIDTH")]
    width: Option<u32>,

    /// Visible lines
    #[arg(long, env = "GLANCE_LINES", default_value_t = ReaderConfig::default().line_count)]
    lines: usize,

    /// Row the focus descends to before the window scrolls
    #[arg(long, env = "GLANCE_FOCUS_ROW", default_value_t = ReaderConfig::default().focus_row)]
    focus_row: usize,

    /// Reading speed in words per minute
    #[arg(long, env = "GLANCE_WPM", default_value_t = ReaderConfig::default().wpm)]
    wpm: u16,

    /// Font size in points
    #[arg(long, env = "GLANCE_FONT_SIZE", default_value_t = ReaderConfig::default().font_size)]
    font_size: u16,

    /// Directory holding per-document sessions
    #[arg(long, env = "GLANCE_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Character advance in thousandths of the font size
    #[arg(
        long,
        env = "GLANCE_CHAR_ADVANCE",
        default_value_t = MonospaceMetrics::DEFAULT_ADVANCE_PER_MILLE
    )]
    char_advance: u32,

    /// Start reading immediately
    #[arg(long, env = "GLANCE_AUTOPLAY")]
    autoplay: bool,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("glance: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: Args) -> Result<(), StartupError> {
    let config = ReaderConfig {
        line_count: args.lines,
        focus_row: args.focus_row,
        font_size: args.font_size,
        wpm: args.wpm,
        ..ReaderConfig::default()
    };
    let input = StdinInput::spawn()?;
    let mut app = ReaderApp::new(MonospaceMetrics::new(args.char_advance), input, config);
    let mut sessions = FileSessionStore::new(state_dir(args.state_dir));

    match &args.file {
        Some(path) => app.open_document(&mut FileDocument::new(path))?,
        None => app
            .open_document(&mut default_sample_document())
            .unwrap_or_else(|never| match never {}),
    }
    app.restore_session(&mut sessions);
    let restored_width = app.geometry().map(|geometry| geometry.width);
    apply_surface(&mut app, args.width.or(restored_width));

    info!(
        "glance: ready key={} words={} state_dir={}",
        app.document_key(),
        app.store().len(),
        sessions.dir().display()
    );

    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.lock(), app.window().line_count());
    renderer.clear()?;

    if args.autoplay {
        app.toggle_start(0);
    }

    let started = Instant::now();
    let mut sync = SessionSyncState::new();
    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if app.tick(now_ms) == TickResult::RenderRequested {
            sync.mark_dirty(now_ms);
            if let Err(err) = app.present(&mut renderer) {
                warn!("terminal: render failed: {err}");
            }
        }

        if app.quit_requested() {
            break;
        }

        if let Some(path) = app.input_mut().take_open_request() {
            open_requested(&mut app, &mut sessions, &path);
            sync.reset();
            renderer.clear()?;
            app.invalidate_presentation();
        }

        if sync.due(now_ms) {
            let current = app.snapshot_session();
            if sync.needs_save(&current) {
                match sessions.save(app.document_key(), &current) {
                    Ok(()) => sync.mark_saved(current),
                    Err(err) => warn!("session: autosave failed: {err}"),
                }
            }
        }

        thread::sleep(idle_for(app.next_due_ms(), now_ms));
    }

    if let Err(err) = app.save_session(&mut sessions) {
        warn!("session: save on quit failed: {err}");
    }
    drop(renderer);
    let mut stdout = io::stdout();
    writeln!(stdout)?;
    stdout.flush()?;

    info!("glance: bye key={}", app.document_key());
    Ok(())
}

/// Saves the active session, then swaps documents. A failed open keeps the
/// current document.
fn open_requested<M, IN>(
    app: &mut ReaderApp<M, IN>,
    sessions: &mut FileSessionStore,
    path: &Path,
) where
    M: TextMetrics,
    IN: InputProvider,
{
    if let Err(err) = app.save_session(sessions) {
        warn!("session: save before open failed: {err}");
    }

    let surface_width = app.geometry().map(|geometry| geometry.width);
    let mut document = FileDocument::new(path);
    match app.open_document(&mut document) {
        Ok(()) => {
            app.restore_session(sessions);
            apply_surface(app, surface_width);
            info!("glance: opened path={}", document.path().display());
        }
        Err(err) => warn!("glance: open failed, keeping current document: {err}"),
    }
}

fn apply_surface<M, IN>(app: &mut ReaderApp<M, IN>, width: Option<u32>)
where
    M: TextMetrics,
    IN: InputProvider,
{
    let width = width.unwrap_or(DEFAULT_SURFACE_WIDTH);
    let geometry = WindowGeometry {
        width,
        height: app.window().line_count() as u32,
        ..app.geometry().unwrap_or_default()
    };
    app.set_geometry(Some(geometry));
    app.resize(width);
}

fn state_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| {
            env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/state/glance"))
        })
        .unwrap_or_else(|| PathBuf::from(".glance"))
}

fn idle_for(next_due_ms: Option<u64>, now_ms: u64) -> Duration {
    let wait = next_due_ms.map_or(IDLE_POLL_MS, |due| {
        due.saturating_sub(now_ms).min(IDLE_POLL_MS)
    });
    Duration::from_millis(wait.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn cli_defaults_follow_reader_config() {
        let args = Args::try_parse_from(["glance", "book.txt", "--width", "640"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("book.txt")));
        assert_eq!(args.width, Some(640));
        assert_eq!(args.lines, 20);
        assert_eq!(args.wpm, 200);
        assert_eq!(args.char_advance, 600);
        assert!(!args.autoplay);
    }

    #[test]
    fn explicit_state_dir_wins() {
        assert_eq!(
            state_dir(Some(PathBuf::from("/tmp/glance"))),
            PathBuf::from("/tmp/glance")
        );
    }

    #[test]
    fn surface_keeps_the_saved_window_position() {
        let mut app = ReaderApp::new(
            MonospaceMetrics::default(),
            glance_core::input::MockInput::new(),
            ReaderConfig::default(),
        );
        apply_surface(&mut app, None);
        assert_eq!(
            app.geometry(),
            Some(WindowGeometry {
                x: 0,
                y: 0,
                width: DEFAULT_SURFACE_WIDTH,
                height: 20,
            })
        );

        app.set_geometry(Some(WindowGeometry {
            x: 40,
            y: 80,
            width: 300,
            height: 12,
        }));
        apply_surface(&mut app, Some(640));
        assert_eq!(
            app.geometry(),
            Some(WindowGeometry {
                x: 40,
                y: 80,
                width: 640,
                height: 20,
            })
        );
    }

    #[test]
    fn idle_never_oversleeps_a_due_step() {
        assert_eq!(idle_for(None, 0), Duration::from_millis(IDLE_POLL_MS));
        assert_eq!(idle_for(Some(105), 100), Duration::from_millis(5));
        assert_eq!(idle_for(Some(90), 100), Duration::from_millis(1));
    }
}
