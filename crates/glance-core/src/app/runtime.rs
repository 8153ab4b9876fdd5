impl<M, IN> ReaderApp<M, IN>
where
    M: TextMetrics,
    IN: InputProvider,
{
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        while let Some(ticket) = self.playback.poll_due(now_ms) {
            self.step();
            let delay = self.current_step_delay_ms();
            self.playback.reschedule(ticket, now_ms, delay);
        }

        if self.pending_redraw {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Flips between paused and running. Starting has no effect on an empty
    /// document.
    pub fn toggle_start(&mut self, now_ms: u64) -> PlaybackState {
        if self.store.is_empty() && !self.playback.is_running() {
            debug!("reader: nothing to play");
            return self.playback.state();
        }

        let delay = self.current_step_delay_ms();
        let state = self.playback.toggle(now_ms, delay);
        self.pending_redraw = true;
        info!("reader: playback {:?} wpm={}", state, self.playback.wpm());
        state
    }

    /// Advances the highlight by one word, scrolling to the next line once the
    /// focus line is exhausted.
    pub fn step(&mut self) {
        if self.store.is_empty() {
            self.playback.pause();
            return;
        }

        if self.window.step_highlight(self.store.len()) {
            self.move_down();
        }
        self.pending_redraw = true;
    }

    /// Earliest time `tick` has work to do, if playback is pending.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.playback.next_due_ms()
    }

    fn current_step_delay_ms(&self) -> u64 {
        let at_line_start = self.window.current().highlight == Some(0);
        self.playback.step_delay_ms(at_line_start)
    }
}
