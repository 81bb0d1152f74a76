//! Client for the external Gemini audit service.
//!
//! One audit call = one `generateContent` request carrying the target URL,
//! an auditor persona instruction that enumerates every valid `task_id`,
//! and a strict response schema. The service replies with a JSON document
//! that decodes into [`AuditResult`]; anything that deviates from the
//! contract is a `Service` error and the caller keeps its prior state.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::types::{AuditResult, Language};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-3-pro-preview";
const USER_AGENT: &str = "OujSEO-Audit-Pro/0.1.0";

/// Audit failure taxonomy. `InvalidUrl` and `MissingApiKey` are raised
/// before any network traffic; `Service` wraps everything past that point.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid URL (must start with http): {0:?}")]
    InvalidUrl(String),

    #[error("audit service credential not configured")]
    MissingApiKey,

    #[error("audit service error: {0}")]
    Service(String),
}

impl AuditError {
    /// Message shown inline in the UI, in the active interface language.
    pub fn user_message(&self, lang: Language) -> String {
        match (self, lang) {
            (AuditError::InvalidUrl(_), Language::Ar) => {
                "يرجى إدخال رابط صحيح يبدأ بـ http".to_string()
            }
            (AuditError::InvalidUrl(_), Language::En) => {
                "Please enter a valid URL starting with http".to_string()
            }
            (AuditError::MissingApiKey, Language::Ar) => {
                "مفتاح الـ API غير متوفر. يرجى مراجعة إعدادات الاستضافة.".to_string()
            }
            (AuditError::MissingApiKey, Language::En) => {
                "API Key is missing. Please check hosting settings.".to_string()
            }
            (AuditError::Service(detail), Language::Ar) => {
                format!("خطأ: فشل الاتصال بالذكاء الاصطناعي ({detail})")
            }
            (AuditError::Service(detail), Language::En) => {
                format!("Error: AI connection failed ({detail})")
            }
        }
    }
}

/// Check the target URL before any network call: non-empty after trimming
/// and a case-sensitive `http` prefix. Returns the trimmed URL.
pub fn validate_url(url: &str) -> Result<&str, AuditError> {
    let trimmed = url.trim();
    if trimmed.is_empty() || !trimmed.starts_with("http") {
        return Err(AuditError::InvalidUrl(url.to_string()));
    }
    Ok(trimmed)
}

/// Resolve the service credential from the environment.
/// `GEMINI_API_KEY` first, then the legacy `API_KEY` name.
pub fn resolve_api_key() -> Result<String, AuditError> {
    for var in ["GEMINI_API_KEY", "API_KEY"] {
        if let Ok(key) = std::env::var(var) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
    }
    Err(AuditError::MissingApiKey)
}

/// Gemini REST client. One instance per audit call is fine — reqwest
/// clients are cheap enough here and the app audits at most one URL at a
/// time.
pub struct AuditClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl AuditClient {
    /// No request timeout: the call either resolves or rejects, and the UI
    /// stays in the auditing phase until it does.
    pub fn new(api_key: String) -> Result<Self, AuditError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuditError::Service(e.to_string()))?;
        Ok(Self { http_client, api_key })
    }

    /// Run one audit of `url`. `task_ids` is the exhaustive id enumeration
    /// from the active dataset. No retries, no streaming.
    pub async fn run_audit(
        &self,
        url: &str,
        lang: Language,
        task_ids: &[String],
    ) -> Result<AuditResult, AuditError> {
        let endpoint = format!("{GEMINI_BASE_URL}/{GEMINI_MODEL}:generateContent");
        let body = request_body(url, lang, task_ids);

        tracing::debug!(url, lang = lang.code(), "requesting audit");

        let response = self
            .http_client
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuditError::Service(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail: String = detail.chars().take(200).collect();
            return Err(AuditError::Service(format!("HTTP {status}: {detail}")));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AuditError::Service(format!("unreadable response: {e}")))?;
        let text = extract_text(envelope)?;
        parse_audit_text(&text)
    }
}

// ─── Request construction ──────────────────────────────────────────────────────

/// The auditor persona plus the output contract. The allowed `task_id`
/// enumeration is computed from the dataset rather than hard-coded so the
/// instruction can never drift from the checklist.
fn system_instruction(lang: Language, task_ids: &[String]) -> String {
    let ids = task_ids.join(", ");
    let output_language = match lang {
        Language::Ar => "Arabic",
        Language::En => "English",
    };
    format!(
        "Role: You are the engine of the \"OujSEO Audit Pro\" tool, acting as a \
         technical SEO auditor and content strategist.\n\
         Task: Perform a full audit of the website at the provided URL. Use the \
         googleSearch tool to reach the site's current data.\n\
         Required output (JSON only):\n\
         - overall_score: a number from 0 to 100.\n\
         - checklist_results: an array of (task_id, status: \"pass\"/\"fail\", reason).\n\
           Allowed task_id values: {ids}.\n\
         - ai_recommendations: {{ title: suggested title tag, description: suggested \
         meta description, advice: one actionable tip }}.\n\
         - content_gap: the biggest missing content opportunity.\n\
         - priority_action: the single most urgent fix.\n\
         All free-text fields must be written in {output_language}."
    )
}

/// Strict output schema the service must conform to, in Gemini's schema
/// dialect (uppercase type names).
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overall_score": { "type": "NUMBER" },
            "checklist_results": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "task_id": { "type": "STRING" },
                        "status": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["task_id", "status", "reason"]
                }
            },
            "ai_recommendations": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "advice": { "type": "STRING" }
                },
                "required": ["title", "description", "advice"]
            },
            "content_gap": { "type": "STRING" },
            "priority_action": { "type": "STRING" }
        },
        "required": [
            "overall_score",
            "checklist_results",
            "ai_recommendations",
            "content_gap",
            "priority_action"
        ]
    })
}

fn request_body(url: &str, lang: Language, task_ids: &[String]) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": format!("Audit the following URL now: {url}") }]
        }],
        "systemInstruction": {
            "parts": [{ "text": system_instruction(lang, task_ids) }]
        },
        "tools": [{ "google_search": {} }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

// ─── Response handling ─────────────────────────────────────────────────────────

/// Transport envelope of `generateContent`. Only the path down to the
/// generated text matters; everything else is ignored.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// First candidate → first part → text. An empty or blocked response has
/// no text and is a `Service` error.
fn extract_text(envelope: GenerateContentResponse) -> Result<String, AuditError> {
    envelope
        .candidates
        .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|mut p| if p.is_empty() { None } else { Some(p.remove(0)) })
        .and_then(|p| p.text)
        .ok_or_else(|| AuditError::Service("empty response from audit service".to_string()))
}

/// Decode the generated JSON into the audit contract. serde enforces the
/// schema: a missing required field or a status outside pass/fail fails
/// the parse.
pub fn parse_audit_text(text: &str) -> Result<AuditResult, AuditError> {
    serde_json::from_str(text)
        .map_err(|e| AuditError::Service(format!("malformed audit response: {e}")))
}
