//! Static content shown by the screens.
//!
//! All records are compile-time tables. Nothing here is fetched, persisted or
//! validated; filters and partitions are pure functions over the tables.

mod announcements;
mod applications;
mod complaints;
mod dashboard;
mod emergency;
mod notifications;
mod onboarding;
mod profile;

pub use announcements::*;
pub use applications::*;
pub use complaints::*;
pub use dashboard::*;
pub use emergency::*;
pub use notifications::*;
pub use onboarding::*;
pub use profile::*;

use serde::Serialize;

/// Headline number shown on a stats card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
}

/// Tone of a status badge; renderers map it to a theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Success,
    Pending,
    Action,
    Info,
    Urgent,
}
