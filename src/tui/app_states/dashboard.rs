//! Dashboard service grid selection.

use crate::content::{ServiceTile, SERVICES};
use crate::router::NavRequest;

/// Tiles per row in the service grid.
pub const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub selected: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_service(&self) -> &'static ServiceTile {
        &SERVICES[self.selected.min(SERVICES.len() - 1)]
    }

    pub fn move_left(&mut self) {
        if self.selected % GRID_COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected % GRID_COLUMNS + 1 < GRID_COLUMNS && self.selected + 1 < SERVICES.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + GRID_COLUMNS < SERVICES.len() {
            self.selected += GRID_COLUMNS;
        }
    }

    #[must_use]
    pub fn open(&self) -> NavRequest {
        NavRequest::Navigate(self.selected_service().target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Screen;

    #[test]
    fn test_grid_moves() {
        let mut state = DashboardState::new();
        state.move_left();
        state.move_up();
        assert_eq!(state.selected, 0);

        state.move_right();
        assert_eq!(state.selected, 1);
        state.move_right();
        assert_eq!(state.selected, 1);

        state.move_down();
        assert_eq!(state.selected, 3);
        state.move_down();
        assert_eq!(state.selected, 3);

        state.move_left();
        assert_eq!(state.selected, 2);
        state.move_up();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_open_targets_selected_service() {
        let mut state = DashboardState::new();
        assert_eq!(state.open(), NavRequest::Navigate(Screen::Emergency));
        state.move_down();
        assert_eq!(state.open(), NavRequest::Navigate(Screen::Applications));
    }
}
