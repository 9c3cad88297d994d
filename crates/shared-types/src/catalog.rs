use serde::Serialize;

/// An id/label pair for select inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: &'static str,
    pub label: &'static str,
}

pub static CASE_TYPES: [Choice; 6] = [
    Choice { id: "family", label: "Family Law" },
    Choice { id: "criminal", label: "Criminal Law" },
    Choice { id: "corporate", label: "Corporate Law" },
    Choice { id: "property", label: "Property Law" },
    Choice { id: "civil", label: "Civil Law" },
    Choice { id: "consumer", label: "Consumer Law" },
];

pub static URGENCY_LEVELS: [Choice; 3] = [
    Choice { id: "flexible", label: "Flexible" },
    Choice { id: "moderate", label: "Moderate" },
    Choice { id: "urgent", label: "Urgent" },
];

/// How a consultation is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    Call,
    Video,
    Chat,
    InPerson,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 4] = [
        ConsultationType::Call,
        ConsultationType::Video,
        ConsultationType::Chat,
        ConsultationType::InPerson,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::Call => "Call Consultation",
            ConsultationType::Video => "Video Consultation",
            ConsultationType::Chat => "Chat Consultation",
            ConsultationType::InPerson => "In-Person Meeting",
        }
    }
}

/// Label for a case type id; unknown ids are returned as-is.
pub fn case_type_label(id: &str) -> &str {
    CASE_TYPES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label)
        .unwrap_or(id)
}
