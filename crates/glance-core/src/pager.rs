//! Sliding window of laid-out lines over the word store.

use heapless::Vec as HeaplessVec;
use log::{debug, warn};

use crate::{
    content::WordStore,
    layout::LineLayout,
    metrics::TextMetrics,
};

pub const MAX_WINDOW_LINES: usize = 32;

/// One visible row: the words `[begin, end)` and the highlighted word, as an
/// offset from `begin`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LineFrame {
    pub begin: usize,
    pub end: usize,
    pub highlight: Option<usize>,
}

impl LineFrame {
    pub const fn empty_at(index: usize) -> Self {
        Self {
            begin: index,
            end: index,
            highlight: None,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Store index of the highlighted word.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlight
            .filter(|offset| *offset < self.len())
            .map(|offset| self.begin + offset)
    }

    fn set_range(&mut self, begin: usize, end: usize) {
        self.begin = begin;
        self.end = end.max(begin);
        if let Some(offset) = self.highlight {
            self.highlight = if self.is_empty() {
                None
            } else {
                Some(offset.min(self.len() - 1))
            };
        }
    }

    fn shift(&mut self, shift: isize) {
        self.begin = self.begin.saturating_add_signed(shift);
        self.end = self.end.saturating_add_signed(shift);
    }
}

/// Outcome of a one-line scroll request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollOutcome {
    /// The focus row moved; frame contents are unchanged.
    FocusMoved,
    /// Frame contents shifted by one line; the focus row stayed put.
    Scrolled,
    /// Already at the start of the document.
    AtStart,
    /// The focus line is past the last word (or the store is empty).
    AtEnd,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowConfig {
    pub line_count: usize,
    /// Row the focus descends to before the window starts scrolling.
    pub focus_row: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            line_count: 20,
            focus_row: 5,
        }
    }
}

/// Ordered, contiguous partition of a slice of the word store into display
/// lines. `frames[i].end == frames[i + 1].begin` holds after every public
/// operation.
#[derive(Clone, Debug)]
pub struct LineWindow {
    frames: HeaplessVec<LineFrame, MAX_WINDOW_LINES>,
    current_line: usize,
    focus_row: usize,
    budget: u32,
    last_width: Option<u32>,
}

impl LineWindow {
    pub fn new(config: WindowConfig) -> Self {
        let line_count = config.line_count.clamp(1, MAX_WINDOW_LINES);
        let mut frames = HeaplessVec::new();
        for _ in 0..line_count {
            let _ = frames.push(LineFrame::default());
        }

        Self {
            frames,
            current_line: 0,
            focus_row: config.focus_row.min(line_count - 1),
            budget: 0,
            last_width: None,
        }
    }

    pub fn frames(&self) -> &[LineFrame] {
        &self.frames
    }

    pub fn line_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn focus_row(&self) -> usize {
        self.focus_row
    }

    pub fn current(&self) -> &LineFrame {
        &self.frames[self.current_line]
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Returns the window to the start of the document: every frame empty at
    /// word 0 and the focus on the top row.
    pub fn reset(&mut self) {
        for frame in self.frames.iter_mut() {
            *frame = LineFrame::empty_at(0);
        }
        self.current_line = 0;
    }

    /// Replaces the pixel budget without relaying out. Used when restoring
    /// saved frames that were laid out under that budget.
    pub fn set_budget(&mut self, budget: u32) {
        self.budget = budget;
        self.last_width = Some(budget);
    }

    /// Installs frames and focus verbatim. Rejects anything that breaks the
    /// partition invariant or points past the store.
    pub fn restore(&mut self, frames: &[LineFrame], current_line: usize, store_len: usize) -> bool {
        if frames.len() != self.frames.len() || current_line >= frames.len() {
            return false;
        }
        let contiguous = frames.windows(2).all(|pair| pair[0].end == pair[1].begin);
        let ordered = frames.iter().all(|f| f.begin <= f.end && f.end <= store_len);
        if !contiguous || !ordered {
            return false;
        }

        self.frames.clear();
        for frame in frames {
            let mut frame = *frame;
            frame.set_range(frame.begin, frame.end);
            let _ = self.frames.push(frame);
        }
        self.current_line = current_line;
        true
    }

    /// Applies a new pixel budget and relays out. A no-op when the width has
    /// not changed since the last call.
    pub fn resize<M: TextMetrics>(
        &mut self,
        layout: &mut LineLayout<M>,
        store: &mut WordStore,
        budget: u32,
    ) -> bool {
        if self.last_width == Some(budget) {
            return false;
        }

        debug!("pager: resize budget={} previous={:?}", budget, self.last_width);
        self.last_width = Some(budget);
        self.budget = budget;
        self.refill(layout, store);
        true
    }

    /// Re-anchors the focus line at `position` and relays out around it.
    pub fn jump<M: TextMetrics>(
        &mut self,
        layout: &mut LineLayout<M>,
        store: &mut WordStore,
        position: usize,
        highlight: Option<usize>,
    ) {
        let frame = &mut self.frames[self.current_line];
        frame.begin = position.min(store.len());
        frame.highlight = highlight;
        self.refill(layout, store);
    }

    /// Like [`Self::jump`], but also moves the focus to row `line`, clamped to
    /// the focus row.
    pub fn reanchor<M: TextMetrics>(
        &mut self,
        layout: &mut LineLayout<M>,
        store: &mut WordStore,
        line: usize,
        position: usize,
        highlight: Option<usize>,
    ) {
        for frame in self.frames.iter_mut() {
            *frame = LineFrame::empty_at(0);
        }
        self.current_line = line.min(self.focus_row);
        self.jump(layout, store, position, highlight);
    }

    /// Re-derives every frame from the focus frame's `begin`: lines above are
    /// packed backward from it, the focus line and those below forward.
    pub fn refill<M: TextMetrics>(&mut self, layout: &mut LineLayout<M>, store: &mut WordStore) {
        let current = self.current_line;
        let mut anchor = self.frames[current].begin.min(store.len());

        // A focus line opening on a tail fragment re-packs from the head, so
        // the split only comes back if the new budget still forces it.
        while anchor > 0 && store.merge_with_next(anchor - 1) {
            anchor -= 1;
        }
        self.frames[current].begin = anchor;

        let mut end = anchor;
        for row in (0..current).rev() {
            if end == 0 {
                self.frames[row].set_range(0, 0);
                continue;
            }

            match layout.backward_fill(store, end, self.budget) {
                Ok(fill) => {
                    if fill.shift != 0 {
                        for frame in &mut self.frames[row + 1..=current] {
                            frame.shift(fill.shift);
                        }
                    }
                    self.frames[row].set_range(fill.begin, fill.end);
                    end = fill.begin;
                }
                Err(err) => {
                    warn!("pager: refill row={} end={} failed: {:?}", row, end, err);
                    self.frames[row].set_range(end, end);
                }
            }
        }

        let mut begin = self.frames[current].begin;
        for frame in &mut self.frames[current..] {
            let end = layout.forward_fill(store, begin, self.budget);
            frame.set_range(begin, end);
            begin = end;
        }

        debug!(
            "pager: refill current={} first={} last={} budget={}",
            current,
            self.frames[0].begin,
            begin,
            self.budget
        );
    }

    /// Moves the focus one line down, scrolling once the focus row has been
    /// reached.
    pub fn move_down<M: TextMetrics>(
        &mut self,
        layout: &mut LineLayout<M>,
        store: &mut WordStore,
    ) -> ScrollOutcome {
        if store.is_empty() || self.frames[self.current_line].begin >= store.len() {
            return ScrollOutcome::AtEnd;
        }

        self.frames[self.current_line].highlight = None;

        if self.current_line < self.focus_row {
            self.current_line += 1;
            self.focus_first_word();
            debug!("pager: focus down line={}", self.current_line);
            return ScrollOutcome::FocusMoved;
        }

        let last = self.frames.len() - 1;
        for row in 0..last {
            let next = self.frames[row + 1];
            self.frames[row].set_range(next.begin, next.end);
        }

        let begin = self.frames[last].end;
        let end = layout.forward_fill(store, begin, self.budget);
        self.frames[last].set_range(begin, end);
        self.focus_first_word();

        debug!(
            "pager: scrolled down top={} bottom_end={}",
            self.frames[0].begin, end
        );
        ScrollOutcome::Scrolled
    }

    /// Mirror of [`Self::move_down`]. The focus climbs back to the top row
    /// only while the window is unscrolled.
    ///
    /// Undoes a preceding `move_down` only when packing backward reproduces
    /// the forward line breaks. It does not when greedy packing breaks
    /// differently, or when the new top line opens on a split tail that
    /// rejoins its head: the store shrinks by one word and every line below
    /// shifts with it.
    pub fn move_up<M: TextMetrics>(
        &mut self,
        layout: &mut LineLayout<M>,
        store: &mut WordStore,
    ) -> ScrollOutcome {
        if self.frames[self.current_line].begin == 0 {
            return ScrollOutcome::AtStart;
        }

        self.frames[self.current_line].highlight = None;

        if self.frames[0].begin == 0 {
            self.current_line -= 1;
            self.focus_first_word();
            debug!("pager: focus up line={}", self.current_line);
            return ScrollOutcome::FocusMoved;
        }

        for row in (1..self.frames.len()).rev() {
            let prev = self.frames[row - 1];
            self.frames[row].set_range(prev.begin, prev.end);
        }

        // frames[0].begin > 0 was checked above.
        match layout.backward_fill(store, self.frames[0].begin, self.budget) {
            Ok(fill) => {
                if fill.shift != 0 {
                    for frame in &mut self.frames[1..] {
                        frame.shift(fill.shift);
                    }
                }
                self.frames[0].set_range(fill.begin, fill.end);
            }
            Err(err) => {
                warn!("pager: scroll up failed: {:?}", err);
                let begin = self.frames[0].begin;
                self.frames[0].set_range(begin, begin);
            }
        }
        self.focus_first_word();

        debug!("pager: scrolled up top={}", self.frames[0].begin);
        ScrollOutcome::Scrolled
    }

    fn focus_first_word(&mut self) {
        let frame = &mut self.frames[self.current_line];
        frame.highlight = if frame.is_empty() { None } else { Some(0) };
    }

    /// Advances the highlight within the focus line. Returns `true` once the
    /// line has been read to its end.
    pub fn step_highlight(&mut self, store_len: usize) -> bool {
        let frame = &mut self.frames[self.current_line];
        if frame.begin >= store_len {
            return true;
        }

        let next = frame.highlight.map_or(0, |offset| offset + 1);
        if next >= frame.len() {
            frame.highlight = None;
            return true;
        }

        frame.highlight = Some(next);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    const FONT: u16 = 10;

    struct Fixture {
        layout: LineLayout<MonospaceMetrics>,
        store: WordStore,
        window: LineWindow,
    }

    impl Fixture {
        fn new(store: WordStore, line_count: usize, focus_row: usize, budget: u32) -> Self {
            let mut fixture = Self {
                layout: LineLayout::new(MonospaceMetrics::default(), FONT),
                store,
                window: LineWindow::new(WindowConfig {
                    line_count,
                    focus_row,
                }),
            };
            fixture
                .window
                .resize(&mut fixture.layout, &mut fixture.store, budget);
            fixture
        }

        fn down(&mut self) -> ScrollOutcome {
            self.window.move_down(&mut self.layout, &mut self.store)
        }

        fn up(&mut self) -> ScrollOutcome {
            self.window.move_up(&mut self.layout, &mut self.store)
        }

        fn ranges(&self) -> Vec<(usize, usize)> {
            self.window.frames().iter().map(|f| (f.begin, f.end)).collect()
        }

        fn assert_partition(&self) {
            let frames = self.window.frames();
            for pair in frames.windows(2) {
                assert_eq!(pair[0].end, pair[1].begin, "frames={frames:?}");
            }
            assert!(frames[0].begin <= frames[frames.len() - 1].end);
            assert!(frames[frames.len() - 1].end <= self.store.len());
        }
    }

    fn pangram() -> WordStore {
        WordStore::from_words([
            "The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog",
        ])
    }

    /// `count` three-letter words; 110px holds exactly four of them.
    fn uniform(count: usize) -> WordStore {
        WordStore::from_words((0..count).map(|i| alloc::format!("w{:02}", i % 100)))
    }

    #[test]
    fn resize_lays_out_from_the_start() {
        let fixture = Fixture::new(pangram(), 4, 2, 110);
        assert_eq!(fixture.ranges(), [(0, 3), (3, 6), (6, 9), (9, 9)]);
        assert_eq!(fixture.window.current_line(), 0);
        fixture.assert_partition();
    }

    #[test]
    fn resize_with_same_width_is_ignored() {
        let mut fixture = Fixture::new(pangram(), 4, 2, 110);
        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;
        assert!(!window.resize(layout, store, 110));
        assert!(window.resize(layout, store, 400));
        assert_eq!(window.frames()[0], LineFrame { begin: 0, end: 9, highlight: None });
        fixture.assert_partition();
    }

    #[test]
    fn move_down_above_focus_row_only_moves_focus() {
        let mut fixture = Fixture::new(pangram(), 4, 2, 110);
        let before = fixture.ranges();

        assert_eq!(fixture.down(), ScrollOutcome::FocusMoved);
        assert_eq!(fixture.window.current_line(), 1);
        assert_eq!(fixture.ranges(), before);
        assert_eq!(fixture.window.current().highlight, Some(0));
        assert_eq!(fixture.window.frames()[0].highlight, None);
    }

    #[test]
    fn move_down_at_focus_row_scrolls() {
        let mut fixture = Fixture::new(uniform(40), 4, 1, 110);
        assert_eq!(fixture.ranges(), [(0, 4), (4, 8), (8, 12), (12, 16)]);

        assert_eq!(fixture.down(), ScrollOutcome::FocusMoved);
        assert_eq!(fixture.down(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.window.current_line(), 1);
        assert_eq!(fixture.ranges(), [(4, 8), (8, 12), (12, 16), (16, 20)]);
        assert_eq!(fixture.window.current().highlight, Some(0));
        fixture.assert_partition();
    }

    #[test]
    fn move_down_stops_at_end_of_document() {
        let mut fixture = Fixture::new(pangram(), 3, 1, 110);

        let mut moves = 0;
        while fixture.down() != ScrollOutcome::AtEnd {
            fixture.assert_partition();
            moves += 1;
            assert!(moves < 10);
        }
        assert_eq!(fixture.window.current().begin, 9);
        assert_eq!(moves, 3);
    }

    #[test]
    fn empty_store_never_moves() {
        let mut fixture = Fixture::new(WordStore::new(), 3, 1, 110);
        assert_eq!(fixture.ranges(), [(0, 0), (0, 0), (0, 0)]);
        assert_eq!(fixture.down(), ScrollOutcome::AtEnd);
        assert_eq!(fixture.up(), ScrollOutcome::AtStart);
        assert!(fixture.window.step_highlight(0));
    }

    #[test]
    fn move_up_at_top_is_refused() {
        let mut fixture = Fixture::new(pangram(), 3, 1, 110);
        assert_eq!(fixture.up(), ScrollOutcome::AtStart);
        fixture.down();
        assert_eq!(fixture.up(), ScrollOutcome::FocusMoved);
        assert_eq!(fixture.window.current_line(), 0);
    }

    #[test]
    fn scroll_down_then_up_restores_the_window() {
        let mut fixture = Fixture::new(uniform(60), 5, 2, 110);
        for _ in 0..4 {
            fixture.down();
        }
        assert!(fixture.window.frames()[0].begin > 0);

        let before = fixture.ranges();
        let line = fixture.window.current_line();

        assert_eq!(fixture.down(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.up(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.ranges(), before);
        assert_eq!(fixture.window.current_line(), line);
        fixture.assert_partition();
    }

    #[test]
    fn refill_near_start_leaves_empty_rows_on_top() {
        let mut fixture = Fixture::new(uniform(40), 6, 5, 110);
        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;

        for _ in 0..5 {
            assert_eq!(window.move_down(layout, store), ScrollOutcome::FocusMoved);
        }
        assert_eq!(window.current_line(), 5);
        window.jump(layout, store, 6, Some(0));

        // Rows above word 0 are never packed backward; they stay empty.
        assert_eq!(
            fixture.ranges(),
            [(0, 0), (0, 0), (0, 0), (0, 2), (2, 6), (6, 10)]
        );
        fixture.assert_partition();

        assert_eq!(fixture.up(), ScrollOutcome::FocusMoved);
        assert_eq!(fixture.up(), ScrollOutcome::FocusMoved);
        assert_eq!(fixture.window.current_line(), 3);
        assert_eq!(fixture.window.current().begin, 0);
        assert_eq!(fixture.up(), ScrollOutcome::AtStart);
    }

    #[test]
    fn backward_split_shifts_the_focus_line() {
        let store = WordStore::from_words(["aa", "abcdefghij", "bb", "cc", "dd", "ee"]);
        let mut fixture = Fixture::new(store, 3, 2, 300);
        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;

        assert_eq!(window.move_down(layout, store), ScrollOutcome::FocusMoved);
        window.jump(layout, store, 2, Some(0));
        assert_eq!(window.frames()[0], LineFrame { begin: 0, end: 2, highlight: None });

        // The row above the focus must split the long word; the focus keeps
        // pointing at "bb" after the insertion.
        window.resize(layout, store, 60);

        fixture.assert_partition();
        let frames = fixture.window.frames();
        assert_eq!((frames[0].begin, frames[0].end), (2, 3));
        assert_eq!(fixture.store[2].text(), "fghij");
        assert_eq!(frames[1].begin, 3);
        assert_eq!(fixture.store[3].text(), "bb");
        assert_eq!(fixture.store[1].to_string(), "abcde-");
    }

    #[test]
    fn narrowing_and_widening_restores_the_store() {
        let store = WordStore::from_words(["a", "incomprehensibilities", "b"]);
        let mut fixture = Fixture::new(store, 6, 2, 300);
        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;
        let original = store.len();

        window.resize(layout, store, 60);
        assert!(store.len() > original);
        fixture.assert_partition();

        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;
        window.resize(layout, store, 400);
        assert_eq!(store.len(), original);
        assert_eq!(store[1].text(), "incomprehensibilities");
        fixture.assert_partition();
    }

    #[test]
    fn widening_merges_a_split_that_opens_the_focus_line() {
        let store = WordStore::from_words(["aa", "abcdefghij", "bb", "cc", "dd"]);
        let mut fixture = Fixture::new(store, 4, 2, 60);
        assert_eq!(fixture.ranges(), [(0, 1), (1, 2), (2, 3), (3, 5)]);

        fixture.down();
        fixture.down();
        assert_eq!(fixture.window.current_line(), 2);
        assert_eq!(fixture.store[2].text(), "fghij");

        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;
        window.resize(layout, store, 400);

        assert_eq!(fixture.store.split_count(), 0);
        assert_eq!(fixture.store[1].text(), "abcdefghij");
        assert_eq!(fixture.ranges(), [(0, 0), (0, 1), (1, 5), (5, 5)]);
        assert_eq!(fixture.window.current().highlight, Some(0));
        fixture.assert_partition();

        // Narrowing again splits from the head, which now opens the line.
        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;
        window.resize(layout, store, 60);
        assert_eq!(fixture.ranges(), [(0, 0), (0, 1), (1, 2), (2, 3)]);
        assert_eq!(fixture.store[1].to_string(), "abcde-");
        fixture.assert_partition();
    }

    fn joined(store: &WordStore) -> String {
        let mut text = String::new();
        for index in 0..store.len() {
            text.push_str(store[index].text());
            if !store[index].is_continued() {
                text.push(' ');
            }
        }
        text
    }

    #[test]
    fn scrolling_up_over_a_split_shifts_the_lower_lines() {
        let words = ["w00", "w01", "abcdefghijklmnopqr"]
            .into_iter()
            .map(String::from)
            .chain((2..30).map(|i| alloc::format!("w{i:02}")));
        let mut fixture = Fixture::new(WordStore::from_words(words), 3, 1, 110);
        let original = joined(&fixture.store);
        assert_eq!(fixture.ranges(), [(0, 2), (2, 3), (3, 5)]);
        assert_eq!(fixture.store[2].to_string(), "abcdefghi-");

        assert_eq!(fixture.down(), ScrollOutcome::FocusMoved);
        for _ in 0..3 {
            assert_eq!(fixture.down(), ScrollOutcome::Scrolled);
        }
        assert_eq!(fixture.ranges(), [(5, 9), (9, 13), (13, 17)]);

        // The tail opening the new top line rejoins its head, which does not
        // fit beside it: one word fewer below.
        assert_eq!(fixture.up(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.ranges(), [(3, 4), (4, 8), (8, 12)]);
        assert_eq!(fixture.store.split_count(), 0);
        assert_eq!(fixture.store[4].text(), "w03");
        fixture.assert_partition();
        assert_eq!(joined(&fixture.store), original);

        // The whole word cannot fit alone: it splits again, one word more.
        assert_eq!(fixture.up(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.ranges(), [(3, 4), (4, 5), (5, 9)]);
        assert_eq!(fixture.store[3].text(), "jklmnopqr");
        assert_eq!(fixture.store[4].text(), "w02");
        fixture.assert_partition();
        assert_eq!(joined(&fixture.store), original);

        assert_eq!(fixture.up(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.ranges(), [(1, 3), (3, 4), (4, 5)]);
        assert_eq!(fixture.up(), ScrollOutcome::Scrolled);
        assert_eq!(fixture.ranges(), [(0, 1), (1, 3), (3, 4)]);
        fixture.assert_partition();
        assert_eq!(joined(&fixture.store), original);

        assert_eq!(fixture.up(), ScrollOutcome::FocusMoved);
        assert_eq!(fixture.up(), ScrollOutcome::AtStart);
    }

    #[test]
    fn step_highlight_walks_the_line() {
        let mut fixture = Fixture::new(pangram(), 3, 1, 110);
        let window = &mut fixture.window;

        assert!(!window.step_highlight(9));
        assert_eq!(window.current().highlighted_index(), Some(0));
        assert!(!window.step_highlight(9));
        assert!(!window.step_highlight(9));
        assert_eq!(window.current().highlighted_index(), Some(2));
        assert!(window.step_highlight(9));
        assert_eq!(window.current().highlight, None);
    }

    #[test]
    fn reanchor_keeps_the_requested_row() {
        let mut fixture = Fixture::new(uniform(40), 4, 2, 110);
        let Fixture {
            layout,
            store,
            window,
        } = &mut fixture;

        window.reanchor(layout, store, 3, 12, Some(1));
        assert_eq!(window.current_line(), 2);
        assert_eq!(window.current().highlighted_index(), Some(13));
        assert_eq!(fixture.ranges(), [(4, 8), (8, 12), (12, 16), (16, 20)]);
        fixture.assert_partition();
    }

    #[test]
    fn restore_rejects_gaps() {
        let mut window = LineWindow::new(WindowConfig {
            line_count: 2,
            focus_row: 1,
        });
        let gap = [LineFrame::empty_at(0), LineFrame::empty_at(3)];
        assert!(!window.restore(&gap, 0, 9));

        let frames = [
            LineFrame { begin: 0, end: 3, highlight: None },
            LineFrame { begin: 3, end: 6, highlight: Some(7) },
        ];
        assert!(window.restore(&frames, 1, 9));
        assert_eq!(window.current().highlight, Some(2));
        assert!(!window.restore(&frames, 1, 5));
    }
}
