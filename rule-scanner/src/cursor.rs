use crate::config::ScannerConfig;
use crate::error::{Error, Result};
use crate::traits::CharacterScanner;
use std::sync::Arc;
use text_model::{Checkpoint, Position, StoreError, TextStore};

/// A scanner cursor over a range of a [`TextStore`].
///
/// The cursor borrows the store for its whole lifetime, so the store cannot
/// be edited while a scan is in progress. Line starts are computed once, up
/// front, from the start of the line holding the range start to the range
/// end, so columns are correct even when the range begins mid-line. Lines are
/// counted from that first line.
pub struct StoreCursor<'a, St>
where
    St: TextStore + ?Sized,
{
    store: &'a St,
    start: usize,
    end: usize,
    /// Logical read index. Reads at the end still advance it, so it can run
    /// past `end`.
    index: usize,
    line_starts: Vec<usize>,
    delimiters: Arc<[Vec<char>]>,
}

impl<'a, St> StoreCursor<'a, St>
where
    St: TextStore + ?Sized,
{
    /// Creates a cursor over the whole store.
    pub fn new(store: &'a St, config: &ScannerConfig) -> Result<Self> {
        Self::with_range(store, config, 0, store.len())
    }

    /// Creates a cursor over `offset..offset + length` of the store.
    pub fn with_range(
        store: &'a St,
        config: &ScannerConfig,
        offset: usize,
        length: usize,
    ) -> Result<Self> {
        config.validate()?;
        let len = store.len();
        let end = match offset.checked_add(length) {
            Some(end) if end <= len => end,
            _ => {
                return Err(Error::Store(StoreError::OutOfBounds {
                    offset,
                    length,
                    len,
                }))
            }
        };

        let delimiters: Arc<[Vec<char>]> = config.delimiter_chars().into();
        let anchor = line_start_before(store, offset, &delimiters)?;

        // Look past the end far enough to see a delimiter straddling it.
        let longest = delimiters.iter().map(Vec::len).max().unwrap_or(1);
        let scan_end = end.saturating_add(longest - 1).min(len);
        let text: Vec<char> = store.get(anchor, scan_end - anchor)?.chars().collect();
        let line_starts = compute_line_starts(&text, &delimiters)
            .into_iter()
            .map(|start| anchor + start)
            .take_while(|&start| start <= end)
            .collect();

        Ok(Self {
            store,
            start: offset,
            end,
            index: offset,
            line_starts,
            delimiters,
        })
    }

    /// Returns the store this cursor reads from.
    pub fn store(&self) -> &'a St {
        self.store
    }

    /// Returns the first offset of the scanned range.
    pub fn range_start(&self) -> usize {
        self.start
    }

    /// Returns the offset just past the scanned range.
    pub fn range_end(&self) -> usize {
        self.end
    }

    /// Returns true if the cursor is at the end of the range.
    pub fn is_eof(&self) -> bool {
        self.index >= self.end
    }

    /// Moves the cursor back to the start of its range.
    pub fn reset(&mut self) {
        self.index = self.start;
    }

    /// Returns the position of `offset`, which must not lie before the first
    /// line start.
    fn position_of(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position::at(line, offset.saturating_sub(line_start), offset)
    }
}

impl<St> Clone for StoreCursor<'_, St>
where
    St: TextStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            start: self.start,
            end: self.end,
            index: self.index,
            line_starts: self.line_starts.clone(),
            delimiters: Arc::clone(&self.delimiters),
        }
    }
}

impl<St> CharacterScanner for StoreCursor<'_, St>
where
    St: TextStore + ?Sized,
{
    fn read(&mut self) -> Option<char> {
        let ch = if self.index < self.end {
            self.store.char_at(self.index).ok()
        } else {
            None
        };
        self.index += 1;
        ch
    }

    fn unread(&mut self) -> Result<()> {
        if self.index <= self.start {
            return Err(Error::UnbalancedUnread { offset: self.index });
        }
        self.index -= 1;
        Ok(())
    }

    fn column(&self) -> usize {
        self.position().column
    }

    fn legal_line_delimiters(&self) -> Arc<[Vec<char>]> {
        Arc::clone(&self.delimiters)
    }

    fn offset(&self) -> usize {
        self.index.min(self.end)
    }

    fn position(&self) -> Position {
        self.position_of(self.offset())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.index, self.position())
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.index();
    }
}

/// Returns the length of the longest delimiter starting at `offset`.
fn delimiter_at<St>(store: &St, offset: usize, delimiters: &[Vec<char>]) -> Result<Option<usize>>
where
    St: TextStore + ?Sized,
{
    let mut longest = None;
    for delimiter in delimiters {
        if offset + delimiter.len() > store.len() {
            continue;
        }
        let mut matched = true;
        for (i, &expected) in delimiter.iter().enumerate() {
            if store.char_at(offset + i)? != expected {
                matched = false;
                break;
            }
        }
        if matched {
            longest = longest.max(Some(delimiter.len()));
        }
    }
    Ok(longest)
}

/// Walks back from `offset` to the start of its line.
///
/// A delimiter ending just before a candidate only counts when it is also the
/// longest delimiter at its own start, so the `\r` of `\r\n` never starts a
/// line on its own.
fn line_start_before<St>(store: &St, offset: usize, delimiters: &[Vec<char>]) -> Result<usize>
where
    St: TextStore + ?Sized,
{
    let mut i = offset;
    while i > 0 {
        let ch = store.char_at(i - 1)?;
        for delimiter in delimiters {
            if delimiter.last() != Some(&ch) || delimiter.len() > i {
                continue;
            }
            let from = i - delimiter.len();
            if delimiter_at(store, from, delimiters)? == Some(delimiter.len()) {
                return Ok(i);
            }
        }
        i -= 1;
    }
    Ok(0)
}

/// Finds the offset at which every line begins. At each offset the longest
/// matching delimiter wins, so `\r\n` ends one line rather than two.
fn compute_line_starts(text: &[char], delimiters: &[Vec<char>]) -> Vec<usize> {
    let mut starts = vec![0];
    let mut i = 0;
    while i < text.len() {
        let matched = delimiters
            .iter()
            .filter(|delimiter| text[i..].starts_with(delimiter))
            .map(Vec::len)
            .max();
        match matched {
            Some(len) => {
                i += len;
                starts.push(i);
            }
            None => i += 1,
        }
    }
    starts
}
