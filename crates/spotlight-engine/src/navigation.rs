//! Active index tracking over the flattened result list

/// Request for the view layer to bring a row into view (nearest alignment)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIntoView {
    pub index: usize,
}

/// Single authoritative selection shared by keyboard and pointer input
///
/// Moves clamp at both ends and never wrap. With an empty list every move
/// is a no-op and the index stays at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    active_index: usize,
}

impl Navigation {
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn reset(&mut self) {
        self.active_index = 0;
    }

    /// ArrowDown
    pub fn next(&mut self, len: usize) -> Option<ScrollIntoView> {
        if len == 0 {
            return None;
        }
        self.set((self.active_index + 1).min(len - 1))
    }

    /// ArrowUp
    pub fn prev(&mut self, len: usize) -> Option<ScrollIntoView> {
        if len == 0 {
            return None;
        }
        self.set(self.active_index.saturating_sub(1))
    }

    /// Pointer hover over the row at `index`
    pub fn hover(&mut self, index: usize, len: usize) -> Option<ScrollIntoView> {
        if index >= len {
            return None;
        }
        self.set(index)
    }

    /// Force the index back into `0..len`
    pub fn clamp(&mut self, len: usize) {
        self.active_index = self.active_index.min(len.saturating_sub(1));
    }

    fn set(&mut self, index: usize) -> Option<ScrollIntoView> {
        if index == self.active_index {
            return None;
        }
        self.active_index = index;
        Some(ScrollIntoView { index })
    }
}
