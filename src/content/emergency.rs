use serde::Serialize;

/// A dialable emergency number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

/// National emergency number used by the SOS panel.
pub const SOS_NUMBER: &str = "112";

pub static EMERGENCY_CONTACTS: [EmergencyContact; 3] = [
    EmergencyContact {
        service: "Police",
        number: "100",
        description: "Crime & Safety",
    },
    EmergencyContact {
        service: "Fire Department",
        number: "101",
        description: "Fire & Rescue",
    },
    EmergencyContact {
        service: "Medical Emergency",
        number: "108",
        description: "Health Emergency",
    },
];

pub static HELPLINES: [EmergencyContact; 4] = [
    EmergencyContact {
        service: "Women Helpline",
        number: "1091",
        description: "24/7 support for women",
    },
    EmergencyContact {
        service: "Child Helpline",
        number: "1098",
        description: "Child protection",
    },
    EmergencyContact {
        service: "Traffic Police",
        number: "103",
        description: "Accidents & traffic",
    },
    EmergencyContact {
        service: "Disaster Help",
        number: "1070",
        description: "Floods, earthquakes, storms",
    },
];

/// Contacts in on-screen selection order: primary contacts, then helplines.
pub fn dialable_contacts() -> impl Iterator<Item = &'static EmergencyContact> {
    EMERGENCY_CONTACTS.iter().chain(HELPLINES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialable_order() {
        let numbers: Vec<_> = dialable_contacts().map(|c| c.number).collect();
        assert_eq!(numbers, ["100", "101", "108", "1091", "1098", "103", "1070"]);
    }
}
