// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

/// A linear navigation cursor over dataset entries
///
/// The index is always bounded to `[0, count - 1]`: stepping past either
/// end is a no-op rather than a wrap-around.
///
/// # Examples
///
/// ```
/// use vocview_core::ds::Navigator;
///
/// let mut navigator = Navigator::new(3);
///
/// assert_eq!(navigator.next(), 1);
/// assert_eq!(navigator.next(), 2);
/// assert_eq!(navigator.next(), 2);
/// assert_eq!(navigator.prev(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    index: usize,
    count: usize,
}

impl Navigator {
    /// Initialize a cursor at the first of `count` entries
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Current entry index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of navigable entries
    pub fn count(&self) -> usize {
        self.count
    }

    /// Step to the next entry; a no-op at the last index
    pub fn next(&mut self) -> usize {
        if self.index + 1 < self.count {
            self.index += 1;
        }

        self.index
    }

    /// Step to the previous entry; a no-op at index 0
    pub fn prev(&mut self) -> usize {
        if self.index > 0 {
            self.index -= 1;
        }

        self.index
    }

    /// Jump to an index, clamped to the valid range
    pub fn goto(&mut self, index: usize) -> usize {
        self.index = index.min(self.count.saturating_sub(1));
        self.index
    }
}
