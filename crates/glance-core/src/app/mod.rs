//! Reader state machine: line window, playback clock and presentation.

use alloc::string::String;

use heapless::Vec as HeaplessVec;
use log::{debug, info, warn};

use crate::{
    content::{DocumentSource, WordStore},
    input::{InputEvent, InputProvider},
    layout::LineLayout,
    metrics::TextMetrics,
    pager::{LineFrame, LineWindow, MAX_WINDOW_LINES, ScrollOutcome, WindowConfig},
    playback::{Playback, PlaybackConfig, PlaybackState},
    render::{LineRenderer, LineView, StatusView},
    session::{FrameRecord, SessionState, SessionStore, WindowGeometry},
    text_policy::{
        FONT_LABEL_LEN, PROGRESS_LABEL_LEN, WPM_LABEL_LEN, font_label, progress_basis_points,
        progress_label, wpm_label,
    },
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub line_count: usize,
    /// Row the focus descends to before the window scrolls.
    pub focus_row: usize,
    pub font_size: u16,
    pub min_font_size: u16,
    pub max_font_size: u16,
    pub font_step: u16,
    pub wpm: u16,
    pub min_wpm: u16,
    pub wpm_step: u16,
    pub line_start_dwell_pct: u16,
    /// Padding on each side of the surface, in pixels.
    pub surface_margin: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            line_count: 20,
            focus_row: 5,
            font_size: 15,
            min_font_size: 10,
            max_font_size: 40,
            font_step: 5,
            wpm: 200,
            min_wpm: 10,
            wpm_step: 10,
            line_start_dwell_pct: 150,
            surface_margin: 16,
        }
    }
}

impl ReaderConfig {
    fn normalized(mut self) -> Self {
        if self.min_font_size > self.max_font_size {
            core::mem::swap(&mut self.min_font_size, &mut self.max_font_size);
        }
        self.min_font_size = self.min_font_size.max(1);
        self.max_font_size = self.max_font_size.max(self.min_font_size);
        self.font_size = self
            .font_size
            .clamp(self.min_font_size, self.max_font_size);
        self.font_step = self.font_step.max(1);

        self.min_wpm = self.min_wpm.max(1);
        self.wpm = self.wpm.max(self.min_wpm);
        self.wpm_step = self.wpm_step.max(1);

        self.line_count = self.line_count.clamp(1, MAX_WINDOW_LINES);
        self.focus_row = self.focus_row.min(self.line_count - 1);
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct RowSnapshot {
    begin: usize,
    end: usize,
    highlight: Option<usize>,
    focused: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct StatusSnapshot {
    progress_bp: u32,
    wpm: u16,
    font_size: u16,
    playing: bool,
}

pub struct ReaderApp<M, IN>
where
    M: TextMetrics,
    IN: InputProvider,
{
    input: IN,
    config: ReaderConfig,
    layout: LineLayout<M>,
    store: WordStore,
    window: LineWindow,
    playback: Playback,
    document_key: String,
    geometry: Option<WindowGeometry>,
    pending_redraw: bool,
    quit_requested: bool,
    presented_rows: [Option<RowSnapshot>; MAX_WINDOW_LINES],
    presented_revision: Option<u32>,
    presented_status: Option<StatusSnapshot>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

impl<M, IN> ReaderApp<M, IN>
where
    M: TextMetrics,
    IN: InputProvider,
{
    pub fn new(metrics: M, input: IN, config: ReaderConfig) -> Self {
        let config = config.normalized();

        Self {
            input,
            config,
            layout: LineLayout::new(metrics, config.font_size),
            store: WordStore::new(),
            window: LineWindow::new(WindowConfig {
                line_count: config.line_count,
                focus_row: config.focus_row,
            }),
            playback: Playback::new(PlaybackConfig {
                wpm: config.wpm,
                min_wpm: config.min_wpm,
                line_start_dwell_pct: config.line_start_dwell_pct,
            }),
            document_key: String::new(),
            geometry: None,
            pending_redraw: true,
            quit_requested: false,
            presented_rows: [None; MAX_WINDOW_LINES],
            presented_revision: None,
            presented_status: None,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn window(&self) -> &LineWindow {
        &self.window
    }

    pub fn document_key(&self) -> &str {
        &self.document_key
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn wpm(&self) -> u16 {
        self.playback.wpm()
    }

    pub fn font_size(&self) -> u16 {
        self.layout.font_size()
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.playback.pause();
        self.quit_requested = true;
    }

    pub fn set_geometry(&mut self, geometry: Option<WindowGeometry>) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> Option<WindowGeometry> {
        self.geometry
    }

    /// Focus position over document length, in hundredths of a percent.
    pub fn progress_basis_points(&self) -> u32 {
        progress_basis_points(self.window.current().begin, self.store.len())
    }

    /// Replaces the active document and lays it out from the first word.
    pub fn load_document(&mut self, key: impl Into<String>, store: WordStore) {
        self.playback.pause();
        self.document_key = key.into();
        self.store = store;
        self.window.reset();
        self.window.refill(&mut self.layout, &mut self.store);
        self.invalidate_presentation();

        info!(
            "reader: document loaded key={} words={}",
            self.document_key,
            self.store.len()
        );
    }

    /// Loads `source` and makes it active. On failure the current document is
    /// left as it was.
    pub fn open_document<D: DocumentSource>(&mut self, source: &mut D) -> Result<(), D::Error> {
        let store = source.load()?;
        self.load_document(source.key(), store);
        Ok(())
    }

    /// Re-anchors the focus line at store index `position`.
    pub fn jump(&mut self, position: usize, highlight: Option<usize>) {
        self.window
            .jump(&mut self.layout, &mut self.store, position, highlight);
        self.pending_redraw = true;
        debug!("reader: jump position={} highlight={:?}", position, highlight);
    }

    /// Recomputes the pixel budget from the surface width.
    pub fn resize(&mut self, surface_width: u32) -> bool {
        if let Some(geometry) = self.geometry.as_mut() {
            geometry.width = surface_width;
        }
        let budget = surface_width.saturating_sub(2 * self.config.surface_margin + 2);
        let changed = self
            .window
            .resize(&mut self.layout, &mut self.store, budget);
        if changed {
            self.pending_redraw = true;
        }
        changed
    }

    pub fn increase_font(&mut self) -> u16 {
        let size = self
            .layout
            .font_size()
            .saturating_add(self.config.font_step)
            .min(self.config.max_font_size);
        self.apply_font_size(size)
    }

    pub fn decrease_font(&mut self) -> u16 {
        let size = self
            .layout
            .font_size()
            .saturating_sub(self.config.font_step)
            .max(self.config.min_font_size);
        self.apply_font_size(size)
    }

    fn apply_font_size(&mut self, size: u16) -> u16 {
        if size != self.layout.font_size() {
            self.layout.set_font_size(size);
            self.window.refill(&mut self.layout, &mut self.store);
            self.pending_redraw = true;
            debug!("reader: font size={}", size);
        }
        size
    }

    pub fn increase_speed(&mut self) -> u16 {
        self.pending_redraw = true;
        self.playback.increase_speed(self.config.wpm_step)
    }

    pub fn decrease_speed(&mut self) -> u16 {
        self.pending_redraw = true;
        self.playback.decrease_speed(self.config.wpm_step)
    }

    pub fn move_down(&mut self) -> ScrollOutcome {
        let outcome = self.window.move_down(&mut self.layout, &mut self.store);
        match outcome {
            ScrollOutcome::AtEnd => {
                if self.playback.is_running() {
                    info!("reader: end of document, pausing");
                }
                self.playback.pause();
            }
            _ => self.pending_redraw = true,
        }
        outcome
    }

    pub fn move_up(&mut self) -> ScrollOutcome {
        let outcome = self.window.move_up(&mut self.layout, &mut self.store);
        if outcome != ScrollOutcome::AtStart {
            self.pending_redraw = true;
        }
        outcome
    }

    /// Captures the session in canonical word space.
    pub fn snapshot_session(&self) -> SessionState {
        let mut frames = HeaplessVec::new();
        for frame in self.window.frames() {
            let record = FrameRecord {
                begin: self.store.canonical_index(frame.begin) as u32,
                end: self.store.canonical_index(frame.end) as u32,
                highlight: frame.highlight.map(|offset| offset as u32),
            };
            let _ = frames.push(record);
        }

        SessionState {
            font_size: self.layout.font_size(),
            wpm: self.playback.wpm(),
            current_line: self.window.current_line() as u16,
            budget: self.window.budget(),
            geometry: self.geometry,
            frames,
        }
    }

    /// Applies a saved session to the loaded document.
    ///
    /// Inconsistent records are ignored entirely. Consistent ones whose saved
    /// lines no longer fit are re-laid out around the saved focus word.
    /// Returns `false` when defaults were kept.
    pub fn apply_session(&mut self, state: &SessionState) -> bool {
        let current_line = state.current_line as usize;
        let consistent = (self.config.min_font_size..=self.config.max_font_size)
            .contains(&state.font_size)
            && state.wpm >= self.config.min_wpm
            && state.frames.len() == self.window.line_count()
            && current_line < state.frames.len()
            && current_line <= self.window.focus_row();
        if !consistent {
            warn!(
                "reader: session ignored key={} frames={} line={}",
                self.document_key,
                state.frames.len(),
                current_line
            );
            return false;
        }

        self.playback.pause();
        self.playback.set_wpm(state.wpm);
        self.layout.set_font_size(state.font_size);
        self.geometry = state.geometry.or(self.geometry);
        self.window.set_budget(state.budget);

        let mut frames: HeaplessVec<LineFrame, MAX_WINDOW_LINES> = HeaplessVec::new();
        for record in &state.frames {
            let _ = frames.push(LineFrame {
                begin: self.store.index_from_canonical(record.begin as usize),
                end: self.store.index_from_canonical(record.end as usize),
                highlight: record.highlight.map(|offset| offset as usize),
            });
        }

        let fits = frames.iter().all(|frame| {
            self.layout
                .fits(&self.store, frame.begin, frame.end, state.budget)
        });
        if !(fits && self.window.restore(&frames, current_line, self.store.len())) {
            let focus = frames[current_line];
            self.window.reanchor(
                &mut self.layout,
                &mut self.store,
                current_line,
                focus.begin,
                focus.highlight,
            );
            debug!(
                "reader: session re-anchored line={} position={}",
                current_line, focus.begin
            );
        }

        self.invalidate_presentation();
        info!(
            "reader: session restored key={} line={} focus={}",
            self.document_key,
            self.window.current_line(),
            self.window.current().begin
        );
        true
    }

    pub fn save_session<S: SessionStore>(&self, sessions: &mut S) -> Result<(), S::Error> {
        if self.document_key.is_empty() {
            return Ok(());
        }
        sessions.save(&self.document_key, &self.snapshot_session())
    }

    /// Loads and applies the saved session for the active document. Any
    /// failure keeps the defaults.
    pub fn restore_session<S: SessionStore>(&mut self, sessions: &mut S) -> bool {
        match sessions.load(&self.document_key) {
            Ok(Some(state)) => self.apply_session(&state),
            Ok(None) => false,
            Err(_) => {
                warn!("reader: session load failed key={}", self.document_key);
                false
            }
        }
    }
}
