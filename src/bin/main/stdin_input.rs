use std::{
    collections::VecDeque,
    io::{self, BufRead},
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use glance_core::input::{InputEvent, InputProvider};
use log::{debug, warn};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Command {
    Event(InputEvent),
    Open(PathBuf),
}

/// Parses one line typed on stdin.
pub(super) fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    let event = match head {
        "" | "p" | "space" => InputEvent::TogglePlayback,
        "+" => InputEvent::IncreaseFont,
        "-" => InputEvent::DecreaseFont,
        ">" => InputEvent::IncreaseSpeed,
        "<" => InputEvent::DecreaseSpeed,
        "k" | "up" => InputEvent::ScrollUp,
        "j" | "down" => InputEvent::ScrollDown,
        "q" | "quit" => InputEvent::Quit,
        "w" | "width" => InputEvent::Resize {
            width: rest.parse().ok()?,
        },
        "o" | "open" if !rest.is_empty() => return Some(Command::Open(PathBuf::from(rest))),
        _ => return None,
    };
    Some(Command::Event(event))
}

/// Line-oriented command input read on a background thread.
///
/// End of input is reported as [`InputEvent::Quit`].
pub(super) struct StdinInput {
    commands: Receiver<Command>,
    open_requests: VecDeque<PathBuf>,
    closed: bool,
}

impl StdinInput {
    pub(super) fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("stdin-input".into())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    let Ok(line) = line else {
                        break;
                    };
                    match parse_command(&line) {
                        Some(command) => {
                            if tx.send(command).is_err() {
                                return;
                            }
                        }
                        None => warn!("input: unknown command {:?}", line),
                    }
                }
                let _ = tx.send(Command::Event(InputEvent::Quit));
            })?;

        Ok(Self::from_receiver(rx))
    }

    fn from_receiver(commands: Receiver<Command>) -> Self {
        Self {
            commands,
            open_requests: VecDeque::new(),
            closed: false,
        }
    }

    /// Next document the user asked to open, in request order.
    pub(super) fn take_open_request(&mut self) -> Option<PathBuf> {
        self.open_requests.pop_front()
    }
}

impl InputProvider for StdinInput {
    type Error = TryRecvError;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if self.closed {
            return Ok(None);
        }

        loop {
            match self.commands.try_recv() {
                Ok(Command::Event(event)) => return Ok(Some(event)),
                Ok(Command::Open(path)) => {
                    debug!("input: open requested path={}", path.display());
                    self.open_requests.push_back(path);
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(err @ TryRecvError::Disconnected) => {
                    self.closed = true;
                    return Err(err);
                }
            }
        }
    }
}
