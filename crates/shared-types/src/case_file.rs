use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Folder a case document is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Evidence,
    Statements,
    CourtDocuments,
    Agreements,
}

impl FileCategory {
    pub const ALL: [FileCategory; 4] = [
        FileCategory::Evidence,
        FileCategory::Statements,
        FileCategory::CourtDocuments,
        FileCategory::Agreements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Evidence => "Evidence",
            FileCategory::Statements => "Statements",
            FileCategory::CourtDocuments => "Court Documents",
            FileCategory::Agreements => "Agreements",
        }
    }

    /// Accepts either the label or the snake_case key.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Evidence" | "evidence" => Some(FileCategory::Evidence),
            "Statements" | "statements" => Some(FileCategory::Statements),
            "Court Documents" | "court_documents" => Some(FileCategory::CourtDocuments),
            "Agreements" | "agreements" => Some(FileCategory::Agreements),
            _ => None,
        }
    }
}

/// Metadata for a stored case document. No file content is held.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    /// Document format, e.g. "PDF".
    pub kind: String,
    pub category: FileCategory,
}

impl CaseFile {
    /// Human-readable size: "2.4 MB", "856 KB", "0 B".
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size_bytes {
            b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
            b if b >= KB => format!("{} KB", b / KB),
            b => format!("{} B", b),
        }
    }
}
