use super::Tone;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnouncementKind {
    Urgent,
    Info,
    Event,
    Success,
}

impl AnnouncementKind {
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Urgent => Tone::Urgent,
            Self::Info => Tone::Info,
            Self::Event => Tone::Pending,
            Self::Success => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub id: u32,
    pub kind: AnnouncementKind,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: Option<&'static str>,
    pub location: &'static str,
    pub category: &'static str,
    pub is_new: bool,
    pub link: Option<&'static str>,
}

pub static ANNOUNCEMENTS: [Announcement; 6] = [
    Announcement {
        id: 1,
        kind: AnnouncementKind::Urgent,
        title: "Water Service Maintenance",
        description: "Scheduled water service interruption in downtown area from 8 AM to 4 PM on \
            January 20th.",
        date: "2024-01-18",
        time: None,
        location: "Downtown Area",
        category: "Utilities",
        is_new: true,
        link: Some("https://example.com/water-maintenance"),
    },
    Announcement {
        id: 2,
        kind: AnnouncementKind::Info,
        title: "New Online Tax Payment System",
        description: "We've launched a new online portal for property tax payments. Register now \
            for convenient 24/7 access.",
        date: "2024-01-16",
        time: None,
        location: "Citywide",
        category: "Digital Services",
        is_new: true,
        link: Some("https://example.com/tax-portal"),
    },
    Announcement {
        id: 3,
        kind: AnnouncementKind::Event,
        title: "Community Town Hall Meeting",
        description: "Join us for the monthly town hall meeting to discuss community issues and \
            upcoming projects.",
        date: "2024-01-25",
        time: Some("7:00 PM"),
        location: "City Hall Auditorium",
        category: "Community",
        is_new: false,
        link: None,
    },
    Announcement {
        id: 4,
        kind: AnnouncementKind::Success,
        title: "Street Repairs Completed",
        description: "Road construction on Main Street has been completed ahead of schedule. \
            Traffic flow has been restored.",
        date: "2024-01-14",
        time: None,
        location: "Main Street",
        category: "Infrastructure",
        is_new: false,
        link: None,
    },
    Announcement {
        id: 5,
        kind: AnnouncementKind::Info,
        title: "New Business License Requirements",
        description: "Updated regulations for business licenses are now in effect. Please review \
            the new requirements.",
        date: "2024-01-12",
        time: None,
        location: "Citywide",
        category: "Business",
        is_new: false,
        link: Some("https://example.com/business-requirements"),
    },
    Announcement {
        id: 6,
        kind: AnnouncementKind::Event,
        title: "Public Library Extended Hours",
        description: "The central library will now be open until 9 PM on weekdays to better serve \
            our community.",
        date: "2024-01-10",
        time: None,
        location: "Central Library",
        category: "Public Services",
        is_new: false,
        link: None,
    },
];

pub fn urgent_announcements() -> impl Iterator<Item = &'static Announcement> {
    ANNOUNCEMENTS
        .iter()
        .filter(|a| a.kind == AnnouncementKind::Urgent)
}

pub fn other_announcements() -> impl Iterator<Item = &'static Announcement> {
    ANNOUNCEMENTS
        .iter()
        .filter(|a| a.kind != AnnouncementKind::Urgent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_complete() {
        let urgent: Vec<_> = urgent_announcements().map(|a| a.id).collect();
        let other: Vec<_> = other_announcements().map(|a| a.id).collect();
        assert_eq!(urgent, vec![1]);
        assert_eq!(other, vec![2, 3, 4, 5, 6]);
    }
}
