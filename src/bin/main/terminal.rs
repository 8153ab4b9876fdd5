use std::io::{self, Write};

use glance_core::render::{LineRenderer, LineView, StatusView};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CLEAR_LINE: &str = "\x1b[2K";
const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// ANSI renderer: one terminal row per line frame, status below them.
pub(super) struct TerminalRenderer<W: Write> {
    out: W,
    line_count: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub(super) fn new(out: W, line_count: usize) -> Self {
        Self { out, line_count }
    }

    pub(super) fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn move_to_row(&mut self, row: usize) -> io::Result<()> {
        write!(self.out, "\x1b[{};1H{CLEAR_LINE}", row + 1)
    }
}

impl<W: Write> LineRenderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn render_line(&mut self, line: &LineView<'_>) -> io::Result<()> {
        self.move_to_row(line.row)?;
        if line.is_blank() {
            return Ok(());
        }
        self.out
            .write_all(if line.focused { "> " } else { "  " }.as_bytes())?;
        if line.focused {
            self.out.write_all(BOLD.as_bytes())?;
        }

        for (offset, word) in line.words.iter().enumerate() {
            if offset > 0 {
                self.out.write_all(b" ")?;
            }
            if line.highlight == Some(offset) {
                write!(self.out, "{REVERSE}{word}{RESET}")?;
                if line.focused {
                    self.out.write_all(BOLD.as_bytes())?;
                }
            } else {
                write!(self.out, "{word}")?;
            }
        }

        self.out.write_all(RESET.as_bytes())
    }

    fn render_status(&mut self, status: &StatusView<'_>) -> io::Result<()> {
        self.move_to_row(self.line_count + 1)?;
        write!(
            self.out,
            "{} {:>7}  {}  {}",
            if status.playing { "▶" } else { "⏸" },
            status.progress,
            status.speed,
            status.font
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
