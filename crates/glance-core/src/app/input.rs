impl<M, IN> ReaderApp<M, IN>
where
    M: TextMetrics,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("reader: input provider failed");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        debug!("reader: input {:?}", event);

        match event {
            InputEvent::TogglePlayback => {
                self.toggle_start(now_ms);
            }
            InputEvent::IncreaseFont => {
                self.increase_font();
            }
            InputEvent::DecreaseFont => {
                self.decrease_font();
            }
            InputEvent::IncreaseSpeed => {
                self.increase_speed();
            }
            InputEvent::DecreaseSpeed => {
                self.decrease_speed();
            }
            InputEvent::ScrollUp => {
                self.move_up();
            }
            InputEvent::ScrollDown => {
                self.move_down();
            }
            InputEvent::Resize { width } => {
                self.resize(width);
            }
            InputEvent::Quit => self.request_quit(),
        }
    }
}
