use super::{StatCard, Tone};
use crate::model::Screen;
use serde::Serialize;

/// Entry in the dashboard service grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceTile {
    pub target: Screen,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Recent activity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub status: &'static str,
    pub time: &'static str,
    pub tone: Tone,
}

/// Gamification figures shown by themes that enable them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CitizenProgress {
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub streak_days: u32,
}

pub const DASHBOARD_STATS: [StatCard; 3] = [
    StatCard {
        title: "Applications",
        value: "12",
        subtitle: "3 pending",
    },
    StatCard {
        title: "Complaints",
        value: "5",
        subtitle: "2 resolved",
    },
    StatCard {
        title: "Services Used",
        value: "8",
        subtitle: "This month",
    },
];

pub static SERVICES: [ServiceTile; 4] = [
    ServiceTile {
        target: Screen::Emergency,
        title: "Emergency",
        subtitle: "24/7 Support",
    },
    ServiceTile {
        target: Screen::Complaints,
        title: "File Complaint",
        subtitle: "Report Issues",
    },
    ServiceTile {
        target: Screen::Applications,
        title: "Applications",
        subtitle: "Certificates & Docs",
    },
    ServiceTile {
        target: Screen::Announcements,
        title: "City News",
        subtitle: "Updates & Info",
    },
];

pub const RECENT_ACTIVITY: [Activity; 3] = [
    Activity {
        title: "Birth Certificate",
        status: "Approved",
        time: "2 hours ago",
        tone: Tone::Success,
    },
    Activity {
        title: "Road Complaint",
        status: "In Progress",
        time: "1 day ago",
        tone: Tone::Pending,
    },
    Activity {
        title: "License Renewal",
        status: "Documents Required",
        time: "3 days ago",
        tone: Tone::Action,
    },
];

pub const CITIZEN_PROGRESS: CitizenProgress = CitizenProgress {
    level: 12,
    xp: 2450,
    next_level_xp: 3000,
    streak_days: 7,
};

/// Greeting for the hour of day (0-23).
#[must_use]
pub const fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
