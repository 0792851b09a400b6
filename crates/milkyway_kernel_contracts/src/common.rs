#![forbid(unsafe_code)]

/// Inclusive interval over block heights.
///
/// An inverted range (`start > end`) is accepted as-is and contains no block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BlockRange {
    pub start: u64,
    pub end: u64,
}

impl BlockRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, block: u64) -> bool {
        self.start <= block && block <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}
