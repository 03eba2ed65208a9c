use std::ops::Range;

/// Row ranges of a shuffled translation table: the head trains, the tail tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Range<usize>,
    pub test: Range<usize>,
}

impl TrainTestSplit {
    /// Puts the last fifth of `len` rows (rounded down, at least one) into the test range.
    pub fn new(len: usize) -> Self {
        let test_len = if len == 0 { 0 } else { (len / 5).max(1) };
        let boundary = len - test_len;
        Self {
            train: 0..boundary,
            test: boundary..len,
        }
    }
}
