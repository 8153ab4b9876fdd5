impl<M, IN> ReaderApp<M, IN>
where
    M: TextMetrics,
    IN: InputProvider,
{
    /// Sends rows and status that changed since the last pass to `renderer`.
    /// Returns whether anything was drawn.
    pub fn present<R: LineRenderer>(&mut self, renderer: &mut R) -> Result<bool, R::Error> {
        let revision = self.store.revision();
        let store_changed = self.presented_revision != Some(revision);
        let current_line = self.window.current_line();
        let mut drawn = false;

        for (row, frame) in self.window.frames().iter().enumerate() {
            let snapshot = RowSnapshot {
                begin: frame.begin,
                end: frame.end,
                highlight: frame.highlight,
                focused: row == current_line,
            };
            if !store_changed && self.presented_rows[row] == Some(snapshot) {
                continue;
            }

            renderer.render_line(&LineView {
                row,
                words: self.store.range(frame.begin, frame.end),
                highlight: frame.highlight,
                focused: snapshot.focused,
            })?;
            self.presented_rows[row] = Some(snapshot);
            drawn = true;
        }
        self.presented_revision = Some(revision);

        let status = StatusSnapshot {
            progress_bp: self.progress_basis_points(),
            wpm: self.playback.wpm(),
            font_size: self.layout.font_size(),
            playing: self.playback.is_running(),
        };
        if self.presented_status != Some(status) {
            let mut progress = [0u8; PROGRESS_LABEL_LEN];
            let mut speed = [0u8; WPM_LABEL_LEN];
            let mut font = [0u8; FONT_LABEL_LEN];
            renderer.render_status(&StatusView {
                progress: progress_label(
                    self.window.current().begin,
                    self.store.len(),
                    &mut progress,
                ),
                speed: wpm_label(status.wpm, &mut speed),
                font: font_label(status.font_size, &mut font),
                playing: status.playing,
            })?;
            self.presented_status = Some(status);
            drawn = true;
        }

        if drawn {
            renderer.flush()?;
        }
        self.pending_redraw = false;
        Ok(drawn)
    }

    /// Forgets what was presented so the next pass redraws everything.
    pub fn invalidate_presentation(&mut self) {
        self.presented_rows = [None; MAX_WINDOW_LINES];
        self.presented_revision = None;
        self.presented_status = None;
        self.pending_redraw = true;
    }
}
