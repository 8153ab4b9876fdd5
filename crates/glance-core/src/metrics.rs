//! Text measurement collaborator.

/// Measures rendered text width in device-independent pixels.
///
/// Implementations must be monotonic in string length: appending characters
/// never makes a string narrower. Hyphenation retries rely on this to
/// terminate.
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_size: u16) -> u32;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn text_width(&self, text: &str, font_size: u16) -> u32 {
        (**self).text_width(text, font_size)
    }
}

/// Fixed-advance metrics: every character is `font_size * advance_per_mille
/// / 1000` pixels wide, with a floor of one pixel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonospaceMetrics {
    advance_per_mille: u32,
}

impl MonospaceMetrics {
    pub const DEFAULT_ADVANCE_PER_MILLE: u32 = 600;

    pub const fn new(advance_per_mille: u32) -> Self {
        Self { advance_per_mille }
    }

    pub fn char_width(&self, font_size: u16) -> u32 {
        (font_size as u32 * self.advance_per_mille / 1000).max(1)
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_PER_MILLE)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, font_size: u16) -> u32 {
        let chars = text.chars().count() as u32;
        chars.saturating_mul(self.char_width(font_size))
    }
}
