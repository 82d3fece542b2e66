//! Cursor state for the list-shaped screens.
//!
//! Every row list in the app (announcements, applications, complaints,
//! helplines, notifications, profile actions) moves a single cursor over a
//! fixed number of rows. The movement rules live once in [`ListNavigation`]
//! and the screens only expose where their cursor is stored.

/// Cursor movement over `total()` rows.
///
/// Implementors supply storage. The cursor never wraps: moving past either
/// end leaves it where it is, and an empty list pins it at `0`.
pub trait ListNavigation {
    fn selected(&self) -> usize;
    fn set_selected(&mut self, idx: usize);
    fn total(&self) -> usize;

    /// Index of the final row, or `None` when there are no rows.
    fn last_index(&self) -> Option<usize> {
        self.total().checked_sub(1)
    }

    fn select_next(&mut self) {
        if let Some(last) = self.last_index() {
            let next = (self.selected() + 1).min(last);
            self.set_selected(next);
        }
    }

    fn select_prev(&mut self) {
        let prev = self.selected().saturating_sub(1);
        self.set_selected(prev);
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        let last = self.last_index().unwrap_or(0);
        self.set_selected(last);
    }
}

/// Plain cursor plus row count, embedded in the per-screen states.
///
/// `offset` is the first drawn line of the list. Renderers update it through
/// [`ListState::scroll_to`] so the cursor never leaves the viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
    pub offset: usize,
}

impl ListState {
    /// Cursor on the first of `total` rows.
    pub fn with_total(total: usize) -> Self {
        Self {
            selected: 0,
            total,
            offset: 0,
        }
    }

    /// Scroll just far enough that lines `first..=last` (the selected
    /// item) fit in a viewport of `height` lines. The top of the item wins
    /// when it is taller than the viewport.
    pub fn scroll_to(&mut self, first: usize, last: usize, height: usize) -> usize {
        if height > 0 {
            if last >= self.offset + height {
                self.offset = last + 1 - height;
            }
            if first < self.offset {
                self.offset = first;
            }
        }
        self.offset
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_both_ends() {
        let mut list = ListState::with_total(3);
        list.select_prev();
        assert_eq!(list.selected, 0);

        for _ in 0..5 {
            list.select_next();
        }
        assert_eq!(list.selected, 2);

        list.select_prev();
        assert_eq!(list.selected, 1);
    }

    #[test]
    fn test_jump_to_ends() {
        let mut list = ListState::with_total(7);
        list.go_last();
        assert_eq!(list.last_index(), Some(6));
        assert_eq!(list.selected, 6);
        list.go_first();
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_scroll_follows_cursor_down_and_up() {
        let mut list = ListState::with_total(10);
        // Two-line items in a five-line viewport
        assert_eq!(list.scroll_to(0, 1, 5), 0);
        assert_eq!(list.scroll_to(4, 5, 5), 1);
        assert_eq!(list.scroll_to(8, 9, 5), 5);
        // Moving back up inside the viewport keeps the offset
        assert_eq!(list.scroll_to(6, 7, 5), 5);
        assert_eq!(list.scroll_to(2, 3, 5), 2);
    }

    #[test]
    fn test_scroll_prefers_item_top_when_too_tall() {
        let mut list = ListState::default();
        assert_eq!(list.scroll_to(3, 9, 4), 3);
        assert_eq!(list.scroll_to(3, 9, 0), 3);
    }

    #[test]
    fn test_empty_list_pins_cursor() {
        let mut list = ListState::default();
        assert_eq!(list.last_index(), None);
        list.select_next();
        list.go_last();
        assert_eq!(list.selected, 0);
    }
}
