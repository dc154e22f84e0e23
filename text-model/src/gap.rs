use crate::error::{check_range, Result};
use crate::store::TextStore;

const DEFAULT_LOW_WATERMARK: usize = 256;
const DEFAULT_HIGH_WATERMARK: usize = 4096;
const FILLER: char = '\0';

/// A gap buffer text store.
///
/// The content vector keeps an unused region (the gap) at the location of
/// the last edit, so consecutive edits at nearby offsets only move the
/// characters between them. After a reallocation the gap is `low_watermark`
/// chars wide; a gap wider than `high_watermark` is trimmed back.
#[derive(Debug, Clone)]
pub struct GapTextStore {
    content: Vec<char>,
    gap_start: usize,
    gap_end: usize,
    low_watermark: usize,
    high_watermark: usize,
}

impl GapTextStore {
    /// Creates an empty store with the default watermarks.
    pub fn new() -> Self {
        Self::with_watermarks(DEFAULT_LOW_WATERMARK, DEFAULT_HIGH_WATERMARK)
    }

    /// Creates an empty store with custom gap watermarks.
    ///
    /// A `high_watermark` below `low_watermark` is raised to it.
    pub fn with_watermarks(low_watermark: usize, high_watermark: usize) -> Self {
        Self {
            content: vec![FILLER; low_watermark],
            gap_start: 0,
            gap_end: low_watermark,
            low_watermark,
            high_watermark: high_watermark.max(low_watermark),
        }
    }

    /// Returns the current width of the gap.
    pub fn gap_size(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Maps a text offset onto an index into `content`.
    fn physical(&self, offset: usize) -> usize {
        if offset < self.gap_start {
            offset
        } else {
            offset + self.gap_size()
        }
    }

    fn move_gap(&mut self, offset: usize) {
        if offset < self.gap_start {
            let count = self.gap_start - offset;
            let target = self.gap_end - count;
            self.content.copy_within(offset..self.gap_start, target);
            self.gap_start = offset;
            self.gap_end = target;
        } else if offset > self.gap_start {
            let count = offset - self.gap_start;
            self.content
                .copy_within(self.gap_end..self.gap_end + count, self.gap_start);
            self.gap_start += count;
            self.gap_end += count;
        }
    }

    fn reallocate(&mut self, inserted: &[char]) {
        let tail = self.content.len() - self.gap_end;
        let mut content =
            Vec::with_capacity(self.gap_start + inserted.len() + self.low_watermark + tail);
        content.extend_from_slice(&self.content[..self.gap_start]);
        content.extend_from_slice(inserted);
        let gap_start = content.len();
        content.resize(gap_start + self.low_watermark, FILLER);
        content.extend_from_slice(&self.content[self.gap_end..]);

        self.content = content;
        self.gap_start = gap_start;
        self.gap_end = gap_start + self.low_watermark;
    }

    fn trim_gap(&mut self) {
        if self.gap_size() > self.high_watermark {
            let keep_until = self.gap_start + self.low_watermark;
            self.content.drain(keep_until..self.gap_end);
            self.gap_end = keep_until;
        }
    }
}

impl Default for GapTextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GapTextStore {
    fn from(text: &str) -> Self {
        let mut store = Self::new();
        store.set(text);
        store
    }
}

impl TextStore for GapTextStore {
    fn char_at(&self, offset: usize) -> Result<char> {
        check_range(offset, 1, self.len())?;
        Ok(self.content[self.physical(offset)])
    }

    fn get(&self, offset: usize, length: usize) -> Result<String> {
        check_range(offset, length, self.len())?;
        let end = offset + length;
        let mut text = String::with_capacity(length);
        if end <= self.gap_start {
            text.extend(&self.content[offset..end]);
        } else if offset >= self.gap_start {
            text.extend(&self.content[self.physical(offset)..self.physical(end)]);
        } else {
            text.extend(&self.content[offset..self.gap_start]);
            text.extend(&self.content[self.gap_end..self.physical(end)]);
        }
        Ok(text)
    }

    fn len(&self) -> usize {
        self.content.len() - self.gap_size()
    }

    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<()> {
        check_range(offset, length, self.len())?;
        let inserted: Vec<char> = text.chars().collect();

        self.move_gap(offset);
        // Swallow the replaced range into the gap.
        self.gap_end += length;

        if inserted.len() > self.gap_size() {
            self.reallocate(&inserted);
        } else {
            let end = self.gap_start + inserted.len();
            self.content[self.gap_start..end].copy_from_slice(&inserted);
            self.gap_start = end;
        }
        self.trim_gap();
        Ok(())
    }

    fn set(&mut self, text: &str) {
        let mut content: Vec<char> = text.chars().collect();
        let len = content.len();
        content.resize(len + self.low_watermark, FILLER);
        self.content = content;
        self.gap_start = len;
        self.gap_end = len + self.low_watermark;
    }
}
