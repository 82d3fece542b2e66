use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Success,
    Update,
    Reminder,
    City,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub is_new: bool,
    pub action_label: Option<&'static str>,
}

/// Filter tabs on the notifications screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum NotificationFilter {
    #[default]
    All,
    Updates,
    City,
}

impl NotificationFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Updates, Self::City];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Updates => "Updates",
            Self::City => "City",
        }
    }

    #[must_use]
    pub const fn matches(self, kind: NotificationKind) -> bool {
        match self {
            Self::All => true,
            Self::Updates => matches!(
                kind,
                NotificationKind::Success | NotificationKind::Update | NotificationKind::Reminder
            ),
            Self::City => matches!(kind, NotificationKind::City | NotificationKind::Achievement),
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Updates,
            Self::Updates => Self::City,
            Self::City => Self::All,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::City,
            Self::Updates => Self::All,
            Self::City => Self::Updates,
        }
    }
}

/// Count shown on the notifications tab badge.
pub const NOTIFICATION_BADGE: u32 = 3;
/// Notifications received in the current week.
pub const NOTIFICATIONS_THIS_WEEK: usize = 4;

pub static NOTIFICATIONS: [Notification; 5] = [
    Notification {
        id: 1,
        kind: NotificationKind::Success,
        title: "Application Approved",
        message: "Your birth certificate application has been approved and is ready for download.",
        time: "2 hours ago",
        is_new: true,
        action_label: Some("Download"),
    },
    Notification {
        id: 2,
        kind: NotificationKind::Update,
        title: "Status Update",
        message: "Your complaint about street lighting has been forwarded to the maintenance \
            department.",
        time: "4 hours ago",
        is_new: true,
        action_label: None,
    },
    Notification {
        id: 3,
        kind: NotificationKind::Reminder,
        title: "Document Required",
        message: "Please submit additional documents for your license renewal application.",
        time: "1 day ago",
        is_new: false,
        action_label: Some("Upload"),
    },
    Notification {
        id: 4,
        kind: NotificationKind::City,
        title: "City Update",
        message: "New digital library facility opened in Sector 21. Free access for all citizens.",
        time: "2 days ago",
        is_new: false,
        action_label: None,
    },
    Notification {
        id: 5,
        kind: NotificationKind::Achievement,
        title: "Milestone Reached",
        message: "Congratulations! You've completed 5 applications this month.",
        time: "3 days ago",
        is_new: false,
        action_label: None,
    },
];

/// Notifications visible under `filter`, in table order.
pub fn filter_notifications(
    filter: NotificationFilter,
) -> impl Iterator<Item = &'static Notification> {
    NOTIFICATIONS.iter().filter(move |n| filter.matches(n.kind))
}

#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.is_new).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(filter: NotificationFilter) -> Vec<u32> {
        filter_notifications(filter).map(|n| n.id).collect()
    }

    #[test]
    fn test_filters() {
        assert_eq!(ids(NotificationFilter::All), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(NotificationFilter::Updates), vec![1, 2, 3]);
        assert_eq!(ids(NotificationFilter::City), vec![4, 5]);
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_count(&NOTIFICATIONS), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = NotificationFilter::All;
        for _ in 0..3 {
            filter = filter.next();
        }
        assert_eq!(filter, NotificationFilter::All);
        assert_eq!(NotificationFilter::All.prev(), NotificationFilter::City);
    }
}
