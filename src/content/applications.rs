use super::Tone;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicationStatus {
    Approved,
    UnderReview,
    Processing,
    PendingDocuments,
}

impl ApplicationStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::UnderReview => "Under Review",
            Self::Processing => "Processing",
            Self::PendingDocuments => "Pending Documents",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Approved => Tone::Success,
            Self::UnderReview => Tone::Info,
            Self::Processing => Tone::Pending,
            Self::PendingDocuments => Tone::Action,
        }
    }

    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Approved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Application {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub status: ApplicationStatus,
    pub submitted: &'static str,
    pub last_update: &'static str,
    pub estimated_completion: &'static str,
    pub fee: &'static str,
    pub can_download: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickService {
    pub title: &'static str,
    pub description: &'static str,
}

/// Filter tabs on the applications screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ApplicationFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ApplicationFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub const fn matches(self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !status.is_completed(),
            Self::Completed => status.is_completed(),
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Pending => Self::All,
            Self::Completed => Self::Pending,
        }
    }
}

pub static APPLICATIONS: [Application; 4] = [
    Application {
        id: "APP001",
        title: "Birth Certificate",
        kind: "Certificate",
        status: ApplicationStatus::Approved,
        submitted: "2024-01-10",
        last_update: "2024-01-15",
        estimated_completion: "2024-01-20",
        fee: "$25.00",
        can_download: true,
    },
    Application {
        id: "APP002",
        title: "Business License Renewal",
        kind: "License",
        status: ApplicationStatus::UnderReview,
        submitted: "2024-01-12",
        last_update: "2024-01-14",
        estimated_completion: "2024-01-25",
        fee: "$150.00",
        can_download: false,
    },
    Application {
        id: "APP003",
        title: "Property Tax Assessment",
        kind: "Assessment",
        status: ApplicationStatus::Processing,
        submitted: "2024-01-08",
        last_update: "2024-01-13",
        estimated_completion: "2024-01-30",
        fee: "$50.00",
        can_download: false,
    },
    Application {
        id: "APP004",
        title: "Marriage Certificate",
        kind: "Certificate",
        status: ApplicationStatus::PendingDocuments,
        submitted: "2024-01-05",
        last_update: "2024-01-12",
        estimated_completion: "2024-02-05",
        fee: "$35.00",
        can_download: false,
    },
];

pub const QUICK_SERVICES: [QuickService; 4] = [
    QuickService {
        title: "Birth Certificate",
        description: "Request official birth certificate",
    },
    QuickService {
        title: "Business License",
        description: "Apply for business license",
    },
    QuickService {
        title: "Marriage Certificate",
        description: "Request marriage certificate",
    },
    QuickService {
        title: "Property Records",
        description: "Access property documents",
    },
];

pub fn filter_applications(
    filter: ApplicationFilter,
) -> impl Iterator<Item = &'static Application> {
    APPLICATIONS.iter().filter(move |a| filter.matches(a.status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(filter: ApplicationFilter) -> Vec<&'static str> {
        filter_applications(filter).map(|a| a.id).collect()
    }

    #[test]
    fn test_filters() {
        assert_eq!(ids(ApplicationFilter::All).len(), 4);
        assert_eq!(ids(ApplicationFilter::Pending), vec!["APP002", "APP003", "APP004"]);
        assert_eq!(ids(ApplicationFilter::Completed), vec!["APP001"]);
    }

    #[test]
    fn test_only_approved_downloadable() {
        for app in &APPLICATIONS {
            assert_eq!(app.can_download, app.status.is_completed(), "{}", app.id);
        }
    }
}
