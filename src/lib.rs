pub mod audit;
pub mod checklist;
pub mod commands;
pub mod dataset;
pub mod export;
pub mod storage;
pub mod types;

use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::types::{AuditResult, Category, ChecklistView, Language, Phase};

/// All runtime state shared across Tauri commands.
///
/// The whole screen is derived from this one struct: the active language,
/// that language's checklist, the last audit result (if any), and the
/// Idle/Auditing/Error phase. Commands lock it briefly and never across
/// the audit network call.
pub struct AppState {
    pub language: Language,
    pub categories: Vec<Category>,
    /// Result of the last successful audit. Replaced wholesale per audit,
    /// cleared on reset, preserved when an audit fails.
    pub audit: Option<AuditResult>,
    pub phase: Phase,
    /// Localized message shown inline while `phase == Error`.
    pub error: Option<String>,
    /// SQLite file backing the persistence adapter. Resolved from the
    /// app-data dir during startup.
    pub store_path: PathBuf,
}

impl AppState {
    pub fn new(store_path: PathBuf) -> Self {
        // Arabic-first, matching the shipped product.
        let language = Language::Ar;
        Self {
            language,
            categories: dataset::default_checklist(language),
            audit: None,
            phase: Phase::Idle,
            error: None,
            store_path,
        }
    }

    /// Snapshot handed to the frontend after every command.
    pub fn view(&self) -> ChecklistView {
        let progress = checklist::progress(&self.categories);
        let display_score = self
            .audit
            .as_ref()
            .map(|a| a.overall_score)
            .unwrap_or_else(|| f64::from(progress));
        ChecklistView {
            language: self.language,
            categories: self.categories.clone(),
            progress,
            display_score,
            audit: self.audit.clone(),
            phase: self.phase,
            error: self.error.clone(),
        }
    }

    /// Write-through persistence. A failed write is logged and dropped —
    /// the in-memory state stays authoritative for this session.
    fn persist(&self) {
        if let Err(e) = storage::save(&self.store_path, self.language, &self.categories) {
            tracing::warn!("failed to persist checklist: {e}");
        }
    }

    /// Manual toggle. Allowed in any phase; does not change the phase.
    /// Returns false (state untouched) for an unknown category/item id.
    pub fn toggle(&mut self, category_id: &str, item_id: &str) -> bool {
        if !checklist::toggle_item(&mut self.categories, category_id, item_id) {
            return false;
        }
        self.persist();
        true
    }

    /// Enter the auditing phase. Returns false (state untouched) when an
    /// audit is already outstanding — at most one is in flight at a time.
    pub fn begin_audit(&mut self) -> bool {
        if self.phase == Phase::Auditing {
            return false;
        }
        self.phase = Phase::Auditing;
        self.error = None;
        true
    }

    /// Audit succeeded: reconcile completion flags, keep the result, and
    /// return to idle.
    pub fn apply_audit(&mut self, result: AuditResult) {
        checklist::merge(&mut self.categories, &result);
        self.audit = Some(result);
        self.phase = Phase::Idle;
        self.error = None;
        self.persist();
    }

    /// Audit failed (validation, configuration, or service): surface the
    /// message, leave checklist and prior audit result untouched.
    pub fn fail_audit(&mut self, message: String) {
        self.phase = Phase::Error;
        self.error = Some(message);
    }

    /// Revert the active language to its pristine dataset and drop its
    /// stored document. The URL field is cleared frontend-side. Refused
    /// (returns false) while an audit is outstanding.
    pub fn reset(&mut self) -> bool {
        if self.phase == Phase::Auditing {
            return false;
        }
        self.categories = dataset::default_checklist(self.language);
        self.audit = None;
        self.phase = Phase::Idle;
        self.error = None;
        if let Err(e) = storage::clear(&self.store_path, self.language) {
            tracing::warn!("failed to clear stored checklist: {e}");
        }
        true
    }

    /// Switch to the other language's independently persisted checklist.
    /// No cross-language merge; the audit result, phase, and error carry
    /// over. Refused (returns false) while an audit is outstanding, so the
    /// eventual merge lands in the checklist it was requested for.
    pub fn switch_language(&mut self, lang: Language) -> bool {
        if self.phase == Phase::Auditing {
            return false;
        }
        self.language = lang;
        self.categories = storage::load(&self.store_path, lang);
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

/// Type alias used in Tauri command signatures and background tasks.
pub type AppMutex = Mutex<AppState>;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Only log WARN and above in production builds.
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt::init();
    #[cfg(not(debug_assertions))]
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();
    tauri::Builder::default()
        .manage(AppMutex::new(AppState::default()))
        .invoke_handler(tauri::generate_handler![
            commands::get_state,
            commands::set_language,
            commands::toggle_item,
            commands::run_audit,
            commands::reset_checklist,
            commands::export_csv,
        ])
        .setup(|app| {
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                commands::startup_init(handle).await;
            });
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AiRecommendations, AuditFinding, AuditStatus};
    use tempfile::TempDir;

    fn state_with_store(dir: &TempDir) -> AppState {
        AppState::new(dir.path().join("checklist.sqlite"))
    }

    fn audit_scoring(score: f64, findings: Vec<AuditFinding>) -> AuditResult {
        AuditResult {
            overall_score: score,
            checklist_results: findings,
            ai_recommendations: AiRecommendations {
                title: "t".into(),
                description: "d".into(),
                advice: "a".into(),
            },
            content_gap: "g".into(),
            priority_action: "p".into(),
        }
    }

    #[test]
    fn display_score_prefers_audit_over_progress() {
        let dir = TempDir::new().unwrap();
        let mut s = state_with_store(&dir);
        assert_eq!(s.view().display_score, 0.0);

        s.toggle("foundation", "f-1");
        assert_eq!(s.view().display_score, f64::from(s.view().progress));

        s.apply_audit(audit_scoring(
            87.0,
            vec![AuditFinding {
                task_id: "f-2".into(),
                status: AuditStatus::Pass,
                reason: "ok".into(),
            }],
        ));
        assert_eq!(s.view().display_score, 87.0);
        // f-2 was incomplete; the merge flipped it.
        assert!(s.categories[0].items[1].is_completed);
    }

    #[test]
    fn failed_audit_preserves_checklist_and_prior_result() {
        let dir = TempDir::new().unwrap();
        let mut s = state_with_store(&dir);
        s.toggle("content", "c-1");
        s.apply_audit(audit_scoring(70.0, vec![]));
        let categories_before = s.categories.clone();

        assert!(s.begin_audit());
        assert_eq!(s.phase, Phase::Auditing);
        s.fail_audit("boom".into());

        assert_eq!(s.phase, Phase::Error);
        assert_eq!(s.error.as_deref(), Some("boom"));
        assert_eq!(s.categories, categories_before);
        assert_eq!(s.audit.as_ref().unwrap().overall_score, 70.0);
    }

    #[test]
    fn reset_restores_defaults_and_clears_storage() {
        let dir = TempDir::new().unwrap();
        let mut s = state_with_store(&dir);
        s.toggle("foundation", "f-1");
        s.apply_audit(audit_scoring(55.0, vec![]));
        assert!(storage::has_saved(&s.store_path, s.language).unwrap());

        assert!(s.reset());

        assert_eq!(s.categories, dataset::default_checklist(s.language));
        assert!(s.audit.is_none());
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.error.is_none());
        assert!(!storage::has_saved(&s.store_path, s.language).unwrap());
    }

    #[test]
    fn language_switch_loads_independent_state() {
        let dir = TempDir::new().unwrap();
        let mut s = state_with_store(&dir);
        assert_eq!(s.language, Language::Ar);
        s.toggle("foundation", "f-1");

        assert!(s.switch_language(Language::En));
        assert_eq!(s.categories, dataset::default_checklist(Language::En));

        assert!(s.switch_language(Language::Ar));
        assert!(s.categories[0].items[0].is_completed);
    }

    #[test]
    fn language_switch_preserves_audit_phase_and_error() {
        let dir = TempDir::new().unwrap();
        let mut s = state_with_store(&dir);
        s.apply_audit(audit_scoring(70.0, vec![]));
        let audit_before = s.audit.clone();

        assert!(s.switch_language(Language::En));
        assert_eq!(s.audit, audit_before);
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.error.is_none());

        // Same across a switch out of the error phase.
        s.fail_audit("boom".into());
        assert!(s.switch_language(Language::Ar));
        assert_eq!(s.audit, audit_before);
        assert_eq!(s.phase, Phase::Error);
        assert_eq!(s.error.as_deref(), Some("boom"));
    }

    #[test]
    fn one_audit_in_flight_at_a_time() {
        let dir = TempDir::new().unwrap();
        let mut s = state_with_store(&dir);
        assert!(s.begin_audit());
        assert_eq!(s.phase, Phase::Auditing);

        // A second submission is rejected; so are reset and language
        // switch while the call is outstanding.
        assert!(!s.begin_audit());
        assert!(!s.reset());
        assert!(!s.switch_language(Language::En));
        assert_eq!(s.language, Language::Ar);
        assert_eq!(s.phase, Phase::Auditing);

        // Manual toggles stay permitted and do not change the phase.
        assert!(s.toggle("foundation", "f-1"));
        assert_eq!(s.phase, Phase::Auditing);

        // Once the audit settles, submissions are accepted again.
        s.fail_audit("boom".into());
        assert!(s.begin_audit());
    }

    #[test]
    fn toggle_survives_restart_via_store() {
        let dir = TempDir::new().unwrap();
        let store_path = dir.path().join("checklist.sqlite");
        {
            let mut s = AppState::new(store_path.clone());
            s.toggle("technical", "t-4");
        }
        let mut restarted = AppState::new(store_path);
        restarted.categories = storage::load(&restarted.store_path, restarted.language);
        let technical = restarted.categories.iter().find(|c| c.id == "technical").unwrap();
        assert!(technical.items.iter().find(|i| i.id == "t-4").unwrap().is_completed);
    }
}
