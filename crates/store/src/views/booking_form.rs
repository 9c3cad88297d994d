use serde::Serialize;
use shared_types::catalog::{Choice, ConsultationType, CASE_TYPES, URGENCY_LEVELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsultationOption {
    pub kind: ConsultationType,
    pub label: &'static str,
}

/// Choices offered by the new booking form.
#[derive(Debug, Clone, Serialize)]
pub struct BookingFormOptions {
    pub case_types: &'static [Choice],
    pub urgency_levels: &'static [Choice],
    pub consultation_types: Vec<ConsultationOption>,
}

impl BookingFormOptions {
    pub fn build() -> Self {
        Self {
            case_types: &CASE_TYPES,
            urgency_levels: &URGENCY_LEVELS,
            consultation_types: ConsultationType::ALL
                .iter()
                .map(|&kind| ConsultationOption {
                    kind,
                    label: kind.label(),
                })
                .collect(),
        }
    }
}
