//! Emergency contact selection and the simulated call banner.

use crate::content::{dialable_contacts, EmergencyContact, SOS_NUMBER};
use crate::tui::state::{ListNavigation, ListState};
use std::time::{Duration, Instant};

/// How long the "calling" banner stays up.
pub const CALL_BANNER_DURATION: Duration = Duration::from_secs(3);

/// A call in progress. Nothing is dialled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCall {
    pub service: &'static str,
    pub number: &'static str,
    pub started: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyState {
    pub list: ListState,
    pub active_call: Option<ActiveCall>,
}

impl Default for EmergencyState {
    fn default() -> Self {
        Self {
            list: ListState::with_total(dialable_contacts().count()),
            active_call: None,
        }
    }
}

impl EmergencyState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_contact(&self) -> Option<&'static EmergencyContact> {
        dialable_contacts().nth(self.list.selected())
    }

    /// Start a call to the selected contact.
    pub fn call_selected(&mut self, now: Instant) -> Option<ActiveCall> {
        let contact = self.selected_contact()?;
        Some(self.call(contact.service, contact.number, now))
    }

    pub fn call_sos(&mut self, now: Instant) -> ActiveCall {
        self.call("Emergency SOS", SOS_NUMBER, now)
    }

    fn call(&mut self, service: &'static str, number: &'static str, now: Instant) -> ActiveCall {
        tracing::info!(number, service, "simulated emergency call");
        let call = ActiveCall {
            service,
            number,
            started: now,
        };
        self.active_call = Some(call);
        call
    }

    /// Drop the banner once it has been up long enough. Returns whether it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active_call {
            Some(call) if now.saturating_duration_since(call.started) >= CALL_BANNER_DURATION => {
                self.active_call = None;
                true
            }
            _ => false,
        }
    }
}

impl ListNavigation for EmergencyState {
    fn selected(&self) -> usize {
        self.list.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.list.selected = idx;
    }

    fn total(&self) -> usize {
        self.list.total
    }
}
