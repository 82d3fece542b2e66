//! The closed set of application screens.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the fixed application views.
///
/// Exactly one screen is current at any time; the [`ViewRouter`](crate::router::ViewRouter)
/// owns that value. Identifiers use the kebab-case form (`quick-action`) both on the
/// command line and in serialized output.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Introductory slides shown before sign-in
    #[default]
    Onboarding,
    /// Sign in / sign up form
    Auth,
    /// Home screen with stats and the service grid
    Dashboard,
    /// Emergency numbers and helplines
    Emergency,
    /// Filed complaints and the new-complaint form
    Complaints,
    /// Certificate and license applications
    Applications,
    /// City news
    Announcements,
    /// Citizen profile and logout
    Profile,
    /// Status updates for the citizen
    Notifications,
    /// Quick actions (placeholder)
    QuickAction,
}

impl Screen {
    /// Every screen, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Onboarding,
        Self::Auth,
        Self::Dashboard,
        Self::Emergency,
        Self::Complaints,
        Self::Applications,
        Self::Announcements,
        Self::Profile,
        Self::Notifications,
        Self::QuickAction,
    ];

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Auth => "auth",
            Self::Dashboard => "dashboard",
            Self::Emergency => "emergency",
            Self::Complaints => "complaints",
            Self::Applications => "applications",
            Self::Announcements => "announcements",
            Self::Profile => "profile",
            Self::Notifications => "notifications",
            Self::QuickAction => "quick-action",
        }
    }

    /// Human readable title used in screen headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Onboarding => "Welcome",
            Self::Auth => "Account",
            Self::Dashboard => "Home",
            Self::Emergency => "Emergency",
            Self::Complaints => "My Complaints",
            Self::Applications => "My Applications",
            Self::Announcements => "City Announcements",
            Self::Profile => "My Profile",
            Self::Notifications => "Notifications",
            Self::QuickAction => "Quick Actions",
        }
    }

    /// Screens shown before a session exists. The tab bar is never drawn on these.
    #[must_use]
    pub const fn is_pre_session(self) -> bool {
        matches!(self, Self::Onboarding | Self::Auth)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

const SCREEN_IDS: &str = "onboarding, auth, dashboard, emergency, complaints, \
                          applications, announcements, profile, notifications, quick-action";

/// Error returned when text does not name a [`Screen`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown screen '{0}' (expected one of: {ids})", ids = SCREEN_IDS)]
pub struct ParseScreenError(pub String);

impl std::str::FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|screen| screen.id() == normalized)
            .ok_or_else(|| ParseScreenError(s.to_string()))
    }
}
