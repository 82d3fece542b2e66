//! Complaint list and the new-complaint form.

use crate::content::{Priority, COMPLAINTS, COMPLAINT_CATEGORIES};
use crate::tui::state::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintField {
    Category,
    Title,
    Description,
    Location,
    Priority,
}

impl ComplaintField {
    pub const ALL: [Self; 5] = [
        Self::Category,
        Self::Title,
        Self::Description,
        Self::Location,
        Self::Priority,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Location => "Location",
            Self::Priority => "Priority",
        }
    }

    /// Picker fields cycle with ←/→ instead of taking text.
    #[must_use]
    pub const fn is_picker(self) -> bool {
        matches!(self, Self::Category | Self::Priority)
    }

    const fn index(self) -> usize {
        match self {
            Self::Category => 0,
            Self::Title => 1,
            Self::Description => 2,
            Self::Location => 3,
            Self::Priority => 4,
        }
    }
}

/// Draft complaint. Submitting discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintForm {
    pub focus: ComplaintField,
    pub category: usize,
    pub title: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
}

impl Default for ComplaintForm {
    fn default() -> Self {
        Self {
            focus: ComplaintField::Category,
            category: 0,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            priority: Priority::default(),
        }
    }
}

impl ComplaintForm {
    #[must_use]
    pub fn category(&self) -> &'static str {
        COMPLAINT_CATEGORIES[self.category % COMPLAINT_CATEGORIES.len()]
    }

    #[must_use]
    pub const fn is_last_field(&self) -> bool {
        self.focus.index() + 1 == ComplaintField::ALL.len()
    }

    pub fn focus_next(&mut self) {
        let i = (self.focus.index() + 1) % ComplaintField::ALL.len();
        self.focus = ComplaintField::ALL[i];
    }

    pub fn focus_prev(&mut self) {
        let len = ComplaintField::ALL.len();
        self.focus = ComplaintField::ALL[(self.focus.index() + len - 1) % len];
    }

    /// Cycle the focused picker forwards (`forward`) or backwards.
    pub fn cycle_picker(&mut self, forward: bool) {
        match self.focus {
            ComplaintField::Category => {
                let len = COMPLAINT_CATEGORIES.len();
                self.category = if forward {
                    (self.category + 1) % len
                } else {
                    (self.category + len - 1) % len
                };
            }
            ComplaintField::Priority => {
                let all = Priority::ALL;
                let i = all.iter().position(|p| *p == self.priority).unwrap_or(0);
                let len = all.len();
                self.priority = if forward {
                    all[(i + 1) % len]
                } else {
                    all[(i + len - 1) % len]
                };
            }
            ComplaintField::Title | ComplaintField::Description | ComplaintField::Location => {}
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ComplaintField::Title => Some(&mut self.title),
            ComplaintField::Description => Some(&mut self.description),
            ComplaintField::Location => Some(&mut self.location),
            ComplaintField::Category | ComplaintField::Priority => None,
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Text shown for `field`.
    #[must_use]
    pub fn value(&self, field: ComplaintField) -> &str {
        match field {
            ComplaintField::Category => self.category(),
            ComplaintField::Title => &self.title,
            ComplaintField::Description => &self.description,
            ComplaintField::Location => &self.location,
            ComplaintField::Priority => self.priority.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintsState {
    pub list: ListState,
    pub form: Option<ComplaintForm>,
}

impl Default for ComplaintsState {
    fn default() -> Self {
        Self {
            list: ListState::with_total(COMPLAINTS.len()),
            form: None,
        }
    }
}

impl ComplaintsState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn open_form(&mut self) {
        self.form = Some(ComplaintForm::default());
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// `Enter` in the form: next field, or submit from the last one.
    /// Returns `true` when the form was submitted.
    pub fn confirm(&mut self) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if form.is_last_field() {
            tracing::debug!(
                category = form.category(),
                priority = form.priority.label(),
                "complaint submitted"
            );
            self.form = None;
            true
        } else {
            form.focus_next();
            false
        }
    }
}
