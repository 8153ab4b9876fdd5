//! Greedy line packing with reversible hyphenation.
//!
//! A line is a half-open run of words whose measured width fits a pixel
//! budget. Width of a run is the line margin (two spaces) plus, for each
//! word, the width of its visible text followed by a separator space. When a
//! single word cannot fit on a line it is split at its midpoint; splits that
//! the current budget no longer needs are merged back, so the store tends
//! toward its unsplit form as lines get wider.

use alloc::string::String;

use log::{debug, warn};

use crate::{
    content::{HYPHEN_MARKER, Word, WordStore},
    metrics::TextMetrics,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// Backward fill asked for the line ending at word 0.
    StartOfDocument,
    OutOfRange { end: usize, len: usize },
}

/// Result of packing a line backward from a fixed end.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BackwardFill {
    pub begin: usize,
    /// The requested end, adjusted by `shift`.
    pub end: usize,
    /// Net number of words inserted (positive) or removed (negative) before
    /// the requested end. Every index at or after it must move by this much.
    pub shift: isize,
}

/// Line layout engine bound to one measurement collaborator and font size.
#[derive(Debug)]
pub struct LineLayout<M> {
    metrics: M,
    font_size: u16,
    scratch: String,
}

impl<M: TextMetrics> LineLayout<M> {
    pub fn new(metrics: M, font_size: u16) -> Self {
        Self {
            metrics,
            font_size,
            scratch: String::new(),
        }
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: u16) {
        self.font_size = font_size;
    }

    /// Leading plus trailing padding reserved on every line.
    pub fn margin_width(&self) -> u32 {
        2 * self.metrics.text_width(" ", self.font_size)
    }

    /// Width a word occupies on a line, separator included.
    pub fn word_width(&mut self, word: &Word) -> u32 {
        self.scratch.clear();
        word.push_display(&mut self.scratch);
        self.scratch.push(' ');
        self.metrics.text_width(&self.scratch, self.font_size)
    }

    pub fn run_width(&mut self, store: &WordStore, begin: usize, end: usize) -> u32 {
        let mut width = self.margin_width();
        for word in store.range(begin, end) {
            width = width.saturating_add(self.word_width(word));
        }
        width
    }

    pub fn fits(&mut self, store: &WordStore, begin: usize, end: usize, budget: u32) -> bool {
        self.run_width(store, begin, end) <= budget
    }

    /// Packs the longest run starting at `begin` and returns its end.
    ///
    /// Returns `store.len()` when `begin` is at or past the end of the store.
    /// Otherwise the run covers at least one word, splitting it when it
    /// cannot fit alone.
    pub fn forward_fill(&mut self, store: &mut WordStore, begin: usize, budget: u32) -> usize {
        if begin >= store.len() {
            if begin > store.len() {
                warn!(
                    "layout: forward fill past end begin={} len={}",
                    begin,
                    store.len()
                );
            }
            return store.len();
        }

        // Splits only happen while nothing fits; every merge leaves a
        // non-empty run, so the loop is bounded by word lengths plus the
        // number of fragments.
        loop {
            let end = self.extend_forward(store, begin, budget);

            if end == begin {
                if store.split(begin) {
                    continue;
                }
                warn!(
                    "layout: fragment wider than line index={} budget={}",
                    begin, budget
                );
                return begin + 1;
            }

            if let Some(index) = self.mergeable_inside(store, begin, end, budget)
                && store.merge_with_next(index)
            {
                continue;
            }

            // A head fragment closing a line that also holds other words is
            // not forced: the whole word can start the next line instead.
            let last = end - 1;
            if last > begin && store[last].is_continued() && store.merge_with_next(last) {
                continue;
            }

            debug!("layout: forward begin={} end={} budget={}", begin, end, budget);
            return end;
        }
    }

    /// Packs the longest run ending at `end`, working backward.
    ///
    /// Splits and merges inside the run move `end`; the returned
    /// [`BackwardFill::shift`] tells the caller how far.
    pub fn backward_fill(
        &mut self,
        store: &mut WordStore,
        end: usize,
        budget: u32,
    ) -> Result<BackwardFill, LayoutError> {
        if end == 0 {
            warn!("layout: backward fill requested at document start");
            return Err(LayoutError::StartOfDocument);
        }
        if end > store.len() {
            return Err(LayoutError::OutOfRange {
                end,
                len: store.len(),
            });
        }

        let mut end = end;
        let mut shift = 0isize;

        loop {
            let begin = self.extend_backward(store, end, budget);

            if begin == end {
                // The tail stays on this line, the head moves up.
                if store.split(end - 1) {
                    end += 1;
                    shift += 1;
                    continue;
                }
                warn!(
                    "layout: fragment wider than line index={} budget={}",
                    end - 1,
                    budget
                );
                return Ok(BackwardFill {
                    begin: end - 1,
                    end,
                    shift,
                });
            }

            if let Some(index) = self.mergeable_inside(store, begin, end, budget)
                && store.merge_with_next(index)
            {
                end -= 1;
                shift -= 1;
                continue;
            }

            // Mirror of the forward case: a tail opening a line that also
            // holds other words rejoins its head on the line above.
            if begin > 0
                && begin + 1 < end
                && store[begin - 1].is_continued()
                && store.merge_with_next(begin - 1)
            {
                end -= 1;
                shift -= 1;
                continue;
            }

            debug!(
                "layout: backward begin={} end={} shift={} budget={}",
                begin, end, shift, budget
            );
            return Ok(BackwardFill { begin, end, shift });
        }
    }

    fn extend_forward(&mut self, store: &WordStore, begin: usize, budget: u32) -> usize {
        let mut width = self.margin_width();
        let mut cur = begin;

        while cur < store.len() {
            let next = width.saturating_add(self.word_width(&store[cur]));
            if next > budget {
                break;
            }
            width = next;
            cur += 1;
        }

        cur
    }

    fn extend_backward(&mut self, store: &WordStore, end: usize, budget: u32) -> usize {
        let mut width = self.margin_width();
        let mut cur = end;

        while cur > 0 {
            let next = width.saturating_add(self.word_width(&store[cur - 1]));
            if next > budget {
                break;
            }
            width = next;
            cur -= 1;
        }

        cur
    }

    /// First split inside `[begin, end)` whose merged word keeps the run
    /// within budget.
    fn mergeable_inside(
        &mut self,
        store: &WordStore,
        begin: usize,
        end: usize,
        budget: u32,
    ) -> Option<usize> {
        let run = self.run_width(store, begin, end);

        for index in begin..end.saturating_sub(1) {
            let head = &store[index];
            if !head.is_continued() {
                continue;
            }
            let tail = &store[index + 1];

            let separate = self.word_width(head).saturating_add(self.word_width(tail));
            let merged = self.merged_width(head, tail);
            if run.saturating_sub(separate).saturating_add(merged) <= budget {
                return Some(index);
            }
        }

        None
    }

    fn merged_width(&mut self, head: &Word, tail: &Word) -> u32 {
        self.scratch.clear();
        self.scratch.push_str(head.text());
        self.scratch.push_str(tail.text());
        if tail.is_continued() {
            self.scratch.push(HYPHEN_MARKER);
        }
        self.scratch.push(' ');
        self.metrics.text_width(&self.scratch, self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    // 6px per character at this size; margin is 12px.
    const FONT: u16 = 10;

    fn layout() -> LineLayout<MonospaceMetrics> {
        LineLayout::new(MonospaceMetrics::default(), FONT)
    }

    fn pangram() -> WordStore {
        WordStore::from_words([
            "The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog",
        ])
    }

    fn texts(store: &WordStore) -> Vec<String> {
        (0..store.len()).map(|i| store[i].to_string()).collect()
    }

    #[test]
    fn forward_fill_packs_three_words_per_line() {
        let mut layout = layout();
        let mut store = pangram();

        // "The quick brown" = 12 + 24 + 36 + 36 = 108, "fox" would make 132.
        let budget = 110;
        assert_eq!(layout.forward_fill(&mut store, 0, budget), 3);
        assert_eq!(layout.forward_fill(&mut store, 3, budget), 6);
        assert_eq!(layout.forward_fill(&mut store, 6, budget), 9);
        assert_eq!(layout.forward_fill(&mut store, 9, budget), 9);
        assert_eq!(store.len(), 9);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn backward_fill_mirrors_forward_fill() {
        let mut layout = layout();
        let mut store = pangram();

        let fill = layout.backward_fill(&mut store, 9, 110).unwrap();
        assert_eq!(fill, BackwardFill { begin: 6, end: 9, shift: 0 });
        let fill = layout.backward_fill(&mut store, 6, 110).unwrap();
        assert_eq!(fill, BackwardFill { begin: 3, end: 6, shift: 0 });
        let fill = layout.backward_fill(&mut store, 3, 110).unwrap();
        assert_eq!(fill, BackwardFill { begin: 0, end: 3, shift: 0 });
    }

    #[test]
    fn backward_fill_at_document_start_is_reported() {
        let mut layout = layout();
        let mut store = pangram();

        assert_eq!(
            layout.backward_fill(&mut store, 0, 110),
            Err(LayoutError::StartOfDocument)
        );
        assert_eq!(
            layout.backward_fill(&mut store, 10, 110),
            Err(LayoutError::OutOfRange { end: 10, len: 9 })
        );
    }

    #[test]
    fn overflowing_word_is_split_and_retried() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["abcdefghij", "k"]);

        // Room for 8 characters: "abcde- " is 7 of them.
        let end = layout.forward_fill(&mut store, 0, 60);
        assert_eq!(end, 1);
        assert_eq!(texts(&store), ["abcde-", "fghij", "k"]);
        // "fghij k" is exactly 60.
        assert_eq!(layout.forward_fill(&mut store, 1, 60), 3);
    }

    #[test]
    fn widening_the_budget_merges_the_split_back() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["abcdefghijklmnop", "end"]);

        layout.forward_fill(&mut store, 0, 40);
        assert!(store.split_count() >= 2);
        assert!(store.len() > 2);

        let end = layout.forward_fill(&mut store, 0, 400);
        assert_eq!(end, 2);
        assert_eq!(texts(&store), ["abcdefghijklmnop", "end"]);
        assert_eq!(store.split_count(), 0);
    }

    #[test]
    fn zero_budget_still_shows_one_character() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["ab"]);

        assert_eq!(layout.forward_fill(&mut store, 0, 0), 1);
        assert_eq!(texts(&store), ["a-", "b"]);
        assert_eq!(layout.forward_fill(&mut store, 1, 0), 2);
    }

    #[test]
    fn trailing_fragment_moves_to_the_next_line() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["xx", "abcdefgh"]);
        store.split(1);

        // "xx abcd-" fits in 70 but the whole word does not.
        let end = layout.forward_fill(&mut store, 0, 70);
        assert_eq!(end, 1);
        assert_eq!(texts(&store), ["xx", "abcdefgh"]);
    }

    #[test]
    fn natural_hyphens_survive_wide_lines() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["well-", "known"]);

        assert_eq!(layout.forward_fill(&mut store, 0, 500), 2);
        assert_eq!(texts(&store), ["well-", "known"]);
        let fill = layout.backward_fill(&mut store, 2, 500).unwrap();
        assert_eq!(fill.shift, 0);
    }

    #[test]
    fn backward_split_keeps_the_tail_and_reports_the_shift() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["aa", "abcdefghij"]);

        let fill = layout.backward_fill(&mut store, 2, 60).unwrap();
        assert_eq!(fill, BackwardFill { begin: 2, end: 3, shift: 1 });
        assert_eq!(texts(&store), ["aa", "abcde-", "fghij"]);
    }

    #[test]
    fn backward_merge_inside_run_shifts_down() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["one", "abcdefgh"]);
        store.split(1);

        let fill = layout.backward_fill(&mut store, 3, 200).unwrap();
        assert_eq!(fill, BackwardFill { begin: 0, end: 2, shift: -1 });
        assert_eq!(texts(&store), ["one", "abcdefgh"]);
    }

    #[test]
    fn backward_leading_tail_rejoins_its_head() {
        let mut layout = layout();
        let mut store = WordStore::from_words(["xx", "abcdefgh", "yy"]);
        store.split(1);
        assert_eq!(texts(&store), ["xx", "abcd-", "efgh", "yy"]);

        let fill = layout.backward_fill(&mut store, 4, 70).unwrap();
        assert_eq!(fill, BackwardFill { begin: 2, end: 3, shift: -1 });
        assert_eq!(texts(&store), ["xx", "abcdefgh", "yy"]);
    }

    #[test]
    fn fills_terminate_for_every_budget() {
        let mut layout = layout();

        for budget in (0..=240).step_by(7) {
            let mut store = WordStore::from_words([
                "a",
                "supercalifragilistic",
                "expialidocious",
                "is",
                "long",
            ]);

            let mut begin = 0;
            let mut lines = 0;
            while begin < store.len() {
                let end = layout.forward_fill(&mut store, begin, budget);
                assert!(end > begin, "budget={budget} begin={begin}");
                begin = end;
                lines += 1;
                assert!(lines < 200);
            }

            let mut end = store.len();
            while end > 0 {
                let fill = layout.backward_fill(&mut store, end, budget).unwrap();
                assert!(fill.begin < fill.end, "budget={budget} end={end}");
                end = fill.begin;
            }
        }
    }
}
