//! Render collaborator contract and row view models.

use crate::content::Word;

/// One display row as handed to the renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineView<'a> {
    pub row: usize,
    pub words: &'a [Word],
    /// Offset into `words` of the active reading word.
    pub highlight: Option<usize>,
    pub focused: bool,
}

impl LineView<'_> {
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }
}

/// Status readout, labels already formatted (`"33.33%"`, `"200 wpm"`, `"15pt"`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusView<'a> {
    pub progress: &'a str,
    pub speed: &'a str,
    pub font: &'a str,
    pub playing: bool,
}

/// Draws rows and the status readout.
///
/// Called synchronously from the presenting pass; implementations must not
/// call back into the app.
pub trait LineRenderer {
    type Error;

    fn render_line(&mut self, line: &LineView<'_>) -> Result<(), Self::Error>;

    fn render_status(&mut self, status: &StatusView<'_>) -> Result<(), Self::Error>;

    /// Called once after a presenting pass that changed anything.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
