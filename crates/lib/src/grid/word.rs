use std::collections::HashSet;

use super::{Pos, ScanSink};

/// Incremental matcher for a single word, fed one symbol at a time.
///
/// The matcher never looks behind it: a symbol that breaks a partial match
/// can only salvage it by starting the word over.
#[derive(Debug, Clone)]
pub struct Needle {
    word: &'static [u8],
    anchor: usize,
    matched: usize,
    mark: Option<Pos>,
}

impl Needle {
    /// A needle reporting the position of the word's first symbol.
    pub fn new(word: &'static [u8]) -> Self {
        Self::anchored(word, 0)
    }

    /// A needle reporting the position of the symbol at index `anchor`.
    pub fn anchored(word: &'static [u8], anchor: usize) -> Self {
        debug_assert!(anchor < word.len());

        Self {
            word,
            anchor,
            matched: 0,
            mark: None,
        }
    }

    /// Feed one symbol, returning the anchor position when the symbol
    /// completes the word.
    ///
    /// A completed match resets the needle, so back to back occurrences are
    /// found but overlapping ones are not.
    pub fn feed(&mut self, symbol: u8, at: Pos) -> Option<Pos> {
        if symbol == self.word[self.matched] {
            if self.matched == self.anchor {
                self.mark = Some(at);
            }

            self.matched += 1;

            if self.matched == self.word.len() {
                self.matched = 0;
                return self.mark.take();
            }

            return None;
        }

        if symbol == self.word[0] {
            self.matched = 1;
            self.mark = (self.anchor == 0).then_some(at);
        } else {
            self.matched = 0;
            self.mark = None;
        }

        None
    }

    /// Forget any partial match.
    #[inline]
    pub fn reset(&mut self) {
        self.matched = 0;
        self.mark = None;
    }
}

/// Counts completed matches of a word over everything it is fed.
///
/// Partial matches never survive a line break, so one counter can be reused
/// across any number of scans and keeps a running total.
#[derive(Debug, Clone)]
pub struct WordCount {
    needle: Needle,
    total: u64,
}

impl WordCount {
    pub fn new(word: &'static [u8]) -> Self {
        Self {
            needle: Needle::new(word),
            total: 0,
        }
    }

    /// Number of matches seen so far.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl ScanSink for WordCount {
    #[inline]
    fn ingest(&mut self, symbol: u8, at: Pos) {
        if self.needle.feed(symbol, at).is_some() {
            self.total += 1;
        }
    }

    #[inline]
    fn end_of_line(&mut self) {
        self.needle.reset();
    }
}

/// Collects the anchor position of every completed match.
#[derive(Debug, Clone)]
pub struct WordAnchors {
    needle: Needle,
    anchors: HashSet<Pos>,
}

impl WordAnchors {
    pub fn new(word: &'static [u8], anchor: usize) -> Self {
        Self {
            needle: Needle::anchored(word, anchor),
            anchors: HashSet::new(),
        }
    }

    /// The anchors recorded so far.
    #[inline]
    pub fn anchors(&self) -> &HashSet<Pos> {
        &self.anchors
    }
}

impl ScanSink for WordAnchors {
    fn ingest(&mut self, symbol: u8, at: Pos) {
        if let Some(anchor) = self.needle.feed(symbol, at) {
            let fresh = self.anchors.insert(anchor);
            // A word that reads differently in reverse completes from one
            // end of an axis only, so an anchor cannot repeat.
            debug_assert!(fresh, "duplicate anchor {anchor}");
        }
    }

    #[inline]
    fn end_of_line(&mut self) {
        self.needle.reset();
    }
}
