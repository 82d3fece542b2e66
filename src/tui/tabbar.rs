//! Bottom tab bar.
//!
//! A [`TabBar`] is a pure function of its fixed item list and the router's
//! current screen. It keeps no selection of its own: the active item is found
//! by comparing each item's target with the screen it is given, and a
//! selection only ever produces a [`NavRequest`] for the router to apply.

use crate::content::NOTIFICATION_BADGE;
use crate::model::Screen;
use crate::router::NavRequest;
use crate::tui::theme::Theme;
use crate::tui::widgets::truncate_str;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Height of the tab bar in rows, borders included.
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Marker drawn in front of the active label.
pub const ACTIVE_MARKER: &str = "●";

/// Which destination sits in the middle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabVariant {
    Emergency,
    QuickAction,
}

/// One destination in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    pub target: Screen,
    pub label: &'static str,
    pub badge: Option<u32>,
    /// The centre item is drawn emphasised even when inactive.
    pub center: bool,
}

impl TabItem {
    const fn new(target: Screen, label: &'static str) -> Self {
        Self {
            target,
            label,
            badge: None,
            center: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    variant: TabVariant,
    items: [TabItem; 5],
}

impl TabBar {
    #[must_use]
    pub fn new(variant: TabVariant) -> Self {
        let center = match variant {
            TabVariant::Emergency => TabItem {
                center: true,
                ..TabItem::new(Screen::Emergency, "Emergency")
            },
            TabVariant::QuickAction => TabItem {
                center: true,
                ..TabItem::new(Screen::QuickAction, "Quick")
            },
        };
        Self {
            variant,
            items: [
                TabItem::new(Screen::Dashboard, "Home"),
                TabItem::new(Screen::Applications, "Services"),
                center,
                TabItem {
                    badge: Some(NOTIFICATION_BADGE),
                    ..TabItem::new(Screen::Notifications, "Updates")
                },
                TabItem::new(Screen::Profile, "Profile"),
            ],
        }
    }

    #[must_use]
    pub const fn variant(&self) -> TabVariant {
        self.variant
    }

    #[must_use]
    pub const fn items(&self) -> &[TabItem; 5] {
        &self.items
    }

    /// Request for the item at `index`, or `None` past the end.
    #[must_use]
    pub fn select(&self, index: usize) -> Option<NavRequest> {
        self.items
            .get(index)
            .map(|item| NavRequest::Navigate(item.target))
    }

    /// Index of the item matching `current`. Screens outside the bar have none.
    #[must_use]
    pub fn active_index(&self, current: Screen) -> Option<usize> {
        self.items.iter().position(|item| item.target == current)
    }

    #[must_use]
    pub fn is_active(&self, index: usize, current: Screen) -> bool {
        self.items.get(index).is_some_and(|item| item.target == current)
    }

    /// Request for the item after the active one, wrapping around.
    #[must_use]
    pub fn next_from(&self, current: Screen) -> NavRequest {
        let index = self
            .active_index(current)
            .map_or(0, |i| (i + 1) % self.items.len());
        NavRequest::Navigate(self.items[index].target)
    }

    /// Request for the item before the active one, wrapping around.
    #[must_use]
    pub fn prev_from(&self, current: Screen) -> NavRequest {
        let len = self.items.len();
        let index = self
            .active_index(current)
            .map_or(len - 1, |i| (i + len - 1) % len);
        NavRequest::Navigate(self.items[index].target)
    }

    /// Cell rectangles inside the bar's border. Shared by rendering and
    /// hit-testing so clicks land where the labels are drawn.
    #[must_use]
    pub fn cell_areas(&self, area: Rect) -> Vec<Rect> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let count = self.items.len() as u32;
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(inner)
            .to_vec()
    }

    /// Request for the cell under `(column, row)`, if any.
    #[must_use]
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<NavRequest> {
        let position = Position::new(column, row);
        self.cell_areas(area)
            .iter()
            .position(|cell| cell.contains(position))
            .and_then(|index| self.select(index))
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new(TabVariant::Emergency)
    }
}

/// Label (with the active marker) and badge text for one cell, shortened
/// so a blank column is left between neighbouring cells. A badge first
/// loses its padding, then the label is truncated, and a badge that still
/// does not fit is dropped.
fn fit_cell(item: &TabItem, active: bool, width: u16) -> (String, Option<String>) {
    let budget = usize::from(width.saturating_sub(1));
    let label = if active {
        format!("{ACTIVE_MARKER} {}", item.label)
    } else {
        item.label.to_string()
    };
    let label_width = label.width();

    let badge = item.badge.and_then(|count| {
        let padded = format!(" {count} ");
        let compact = count.to_string();
        if label_width + 1 + padded.width() <= budget {
            Some(padded)
        } else if MIN_LABEL_WIDTH.min(label_width) + 1 + compact.width() <= budget {
            Some(compact)
        } else {
            None
        }
    });
    let badge_width = badge.as_ref().map_or(0, |b| b.width() + 1);
    let label = truncate_str(&label, budget.saturating_sub(badge_width));
    (label, badge)
}

/// Shortest label kept before a badge is dropped instead.
const MIN_LABEL_WIDTH: usize = 4;

/// Draw the bar with the item matching `current` highlighted.
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    tab_bar: &TabBar,
    current: Screen,
    theme: &Theme,
) {
    let colors = &theme.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(Style::default().bg(colors.surface));
    frame.render_widget(block, area);

    for (index, (item, cell)) in tab_bar
        .items()
        .iter()
        .zip(tab_bar.cell_areas(area))
        .enumerate()
    {
        let active = tab_bar.is_active(index, current);
        let style = if active {
            Style::default()
                .fg(colors.tab_active_fg)
                .bg(colors.tab_active_bg)
                .bold()
        } else if item.center {
            Style::default().fg(colors.accent).bold()
        } else {
            theme.text_muted()
        };

        let (label, badge) = fit_cell(item, active, cell.width);
        let mut spans = vec![Span::styled(label, style)];
        if let Some(badge) = badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(badge, theme.badge(crate::content::Tone::Urgent)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, cell);
    }
}
