use super::Tone;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplaintStatus {
    Resolved,
    InProgress,
    UnderReview,
}

impl ComplaintStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resolved => "Resolved",
            Self::InProgress => "In Progress",
            Self::UnderReview => "Under Review",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Resolved => Tone::Success,
            Self::InProgress => Tone::Pending,
            Self::UnderReview => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Pending,
            Self::High => Tone::Urgent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complaint {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub status: ComplaintStatus,
    pub priority: Priority,
    pub date: &'static str,
    pub location: &'static str,
}

pub const COMPLAINTS: [Complaint; 3] = [
    Complaint {
        id: "C001",
        title: "Street Light Not Working",
        category: "Infrastructure",
        status: ComplaintStatus::InProgress,
        priority: Priority::Medium,
        date: "2024-01-15",
        location: "Main Street & 5th Ave",
    },
    Complaint {
        id: "C002",
        title: "Pothole on Highway",
        category: "Roads",
        status: ComplaintStatus::Resolved,
        priority: Priority::High,
        date: "2024-01-10",
        location: "Highway 101, Mile 15",
    },
    Complaint {
        id: "C003",
        title: "Noise Complaint",
        category: "Public Safety",
        status: ComplaintStatus::UnderReview,
        priority: Priority::Low,
        date: "2024-01-08",
        location: "Residential Area Block 5",
    },
];

pub const COMPLAINT_CATEGORIES: [&str; 7] = [
    "Infrastructure",
    "Roads",
    "Public Safety",
    "Utilities",
    "Environment",
    "Transportation",
    "Other",
];
