//! Append-only game log.

/// Human-readable record of everything that happened in the current game.
///
/// Lines are only ever appended; a reset clears the whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLog {
    entries: Vec<String>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The last `window` lines, oldest first.
    pub fn recent(&self, window: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(window);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Extend<String> for GameLog {
    fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.entries.extend(lines);
    }
}
