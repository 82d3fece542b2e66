use super::StatCard;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Entries in the profile quick-action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileAction {
    EditProfile,
    Settings,
    HelpSupport,
    Logout,
}

impl ProfileAction {
    pub const ALL: [Self; 4] = [
        Self::EditProfile,
        Self::Settings,
        Self::HelpSupport,
        Self::Logout,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EditProfile => "Edit Profile",
            Self::Settings => "Settings",
            Self::HelpSupport => "Help & Support",
            Self::Logout => "Logout",
        }
    }
}

pub const PROFILE_COMPLETION_PERCENT: u16 = 75;
pub const PROFILE_PHONE: &str = "+91 98765 43210";
pub const PROFILE_EMAIL: &str = "user@example.com";
pub const PROFILE_ADDRESS: &str = "123 Main Street, City";

pub const PROFILE_STATS: [StatCard; 3] = [
    StatCard {
        title: "Applications",
        value: "12",
        subtitle: "Completed",
    },
    StatCard {
        title: "Complaints",
        value: "5",
        subtitle: "Filed",
    },
    StatCard {
        title: "Score",
        value: "850",
        subtitle: "Citizen Points",
    },
];

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Early Adopter",
        description: "Joined in first month",
        unlocked: true,
    },
    Achievement {
        title: "Quick Solver",
        description: "Fast application processing",
        unlocked: true,
    },
    Achievement {
        title: "Helpful Citizen",
        description: "Community contributor",
        unlocked: true,
    },
    Achievement {
        title: "Digital Pioneer",
        description: "Advanced user",
        unlocked: false,
    },
];
