use crate::error::{Error, Result};

/// Settings shared by every cursor created for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// Line delimiters recognized by the cursor, tried in this order by
    /// rules that break on end of line.
    pub line_delimiters: Vec<String>,
}

impl ScannerConfig {
    /// Replaces the recognized line delimiters.
    pub fn with_line_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Checks that the delimiter set is usable.
    pub fn validate(&self) -> Result<()> {
        if self.line_delimiters.is_empty() {
            return Err(Error::NoLineDelimiters);
        }
        if let Some(index) = self.line_delimiters.iter().position(String::is_empty) {
            return Err(Error::EmptyLineDelimiter { index });
        }
        Ok(())
    }

    pub(crate) fn delimiter_chars(&self) -> Vec<Vec<char>> {
        self.line_delimiters
            .iter()
            .map(|delimiter| delimiter.chars().collect())
            .collect()
    }
}

impl Default for ScannerConfig {
    /// `\r\n`, `\r` and `\n`, longest first so CRLF is one delimiter.
    fn default() -> Self {
        Self {
            line_delimiters: vec!["\r\n".into(), "\r".into(), "\n".into()],
        }
    }
}
