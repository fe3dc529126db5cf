//! Offset-to-line mapping and short excerpts for diagnostics.

/// Byte offsets of line starts, for 1-based line lookups.
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(idx, _)| idx + 1),
        );
        Self { starts }
    }

    /// 1-based line containing `offset`.
    #[must_use]
    pub fn line(&self, offset: usize) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        u32::try_from(idx + 1).unwrap_or(u32::MAX)
    }
}

const EXCERPT_CHARS: usize = 96;

/// Whitespace-collapsed, length-capped excerpt of `text`.
#[must_use]
pub fn excerpt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= EXCERPT_CHARS {
        return collapsed;
    }
    let mut out: String = collapsed.chars().take(EXCERPT_CHARS - 1).collect();
    out.push('…');
    out
}
