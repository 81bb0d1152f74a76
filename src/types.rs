use serde::{Deserialize, Serialize};

/// The two supported interface languages. Each language has its own
/// checklist dataset and its own persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

impl Language {
    /// Short code used in storage keys and the audit instruction.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One actionable SEO task. `id` is stable across languages and is the key
/// the audit reconciliation matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    pub description: String,
    pub priority: Priority,
    pub is_completed: bool,
}

/// Named grouping of checklist items. Membership is fixed at runtime —
/// only the contained items' completion flags mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pass,
    Fail,
}

/// Per-item verdict returned by the audit service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub task_id: String,
    pub status: AuditStatus,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRecommendations {
    pub title: String,
    pub description: String,
    pub advice: String,
}

/// Full response of one audit call. Replaced wholesale on each new audit,
/// cleared on reset. serde decoding doubles as schema validation: any
/// missing required field fails the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub overall_score: f64,
    pub checklist_results: Vec<AuditFinding>,
    pub ai_recommendations: AiRecommendations,
    pub content_gap: String,
    pub priority_action: String,
}

/// Screen phase reported to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Auditing,
    Error,
}

/// Snapshot of everything the single screen renders. Returned by every
/// command so the frontend never has to derive state itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistView {
    pub language: Language,
    pub categories: Vec<Category>,
    /// Locally computed completion percentage (0-100).
    pub progress: u8,
    /// What the score panel shows: `overall_score` when an audit result is
    /// present, otherwise `progress`.
    pub display_score: f64,
    pub audit: Option<AuditResult>,
    pub phase: Phase,
    pub error: Option<String>,
}
