use tauri::Manager;

use crate::audit::{self, AuditClient};
use crate::types::{ChecklistView, Language};
use crate::{checklist, storage, AppMutex};

// ─── Tauri commands ────────────────────────────────────────────────────────────

/// Full screen snapshot. Called once on frontend load and after language
/// or phase changes it did not initiate.
#[tauri::command]
pub async fn get_state(state: tauri::State<'_, AppMutex>) -> Result<ChecklistView, String> {
    Ok(state.lock().await.view())
}

/// Switch the interface language. Each language has its own persisted
/// checklist; rejected while an audit is outstanding so the eventual merge
/// lands in the checklist it was requested for.
#[tauri::command]
pub async fn set_language(
    lang: Language,
    state: tauri::State<'_, AppMutex>,
) -> Result<ChecklistView, String> {
    let mut s = state.lock().await;
    if !s.switch_language(lang) {
        return Err("audit_in_progress".to_string());
    }
    Ok(s.view())
}

/// Manual completion toggle. Permitted in any phase; persists immediately.
#[tauri::command]
pub async fn toggle_item(
    category_id: String,
    item_id: String,
    state: tauri::State<'_, AppMutex>,
) -> Result<ChecklistView, String> {
    let mut s = state.lock().await;
    if !s.toggle(&category_id, &item_id) {
        return Err("unknown_item".to_string());
    }
    Ok(s.view())
}

/// Run the AI audit against `url` and reconcile the checklist with the
/// result.
///
/// Bad input (empty/non-http URL) and a missing credential short-circuit
/// to the error phase without any network traffic. While the service call
/// is outstanding the phase is `Auditing` and re-submission is rejected;
/// the lock is NOT held across the call, so toggles stay responsive.
#[tauri::command]
pub async fn run_audit(
    url: String,
    state: tauri::State<'_, AppMutex>,
) -> Result<ChecklistView, String> {
    let (lang, task_ids, target, api_key) = {
        let mut s = state.lock().await;
        if !s.begin_audit() {
            return Err("audit_in_progress".to_string());
        }
        let lang = s.language;
        // The lock is held through validation, so the transient auditing
        // phase is never observable on the bad-input path.
        let prepared = audit::validate_url(&url)
            .map(str::to_string)
            .and_then(|target| audit::resolve_api_key().map(|key| (target, key)));
        match prepared {
            Ok((target, key)) => (lang, checklist::all_task_ids(&s.categories), target, key),
            Err(e) => {
                s.fail_audit(e.user_message(lang));
                return Ok(s.view());
            }
        }
    }; // lock released here — the network call runs without it

    let outcome = match AuditClient::new(api_key) {
        Ok(client) => client.run_audit(&target, lang, &task_ids).await,
        Err(e) => Err(e),
    };

    let mut s = state.lock().await;
    match outcome {
        Ok(result) => {
            tracing::info!(score = result.overall_score, "audit complete");
            s.apply_audit(result);
        }
        Err(e) => {
            tracing::warn!("audit failed: {e}");
            s.fail_audit(e.user_message(lang));
        }
    }
    Ok(s.view())
}

/// Reset the active language to its pristine dataset: audit result gone,
/// stored document removed. Frontend confirms before calling.
#[tauri::command]
pub async fn reset_checklist(state: tauri::State<'_, AppMutex>) -> Result<ChecklistView, String> {
    let mut s = state.lock().await;
    if !s.reset() {
        return Err("audit_in_progress".to_string());
    }
    Ok(s.view())
}

/// Render the current checklist (+ audit reasons) as CSV text. The
/// frontend turns it into a download.
#[tauri::command]
pub async fn export_csv(state: tauri::State<'_, AppMutex>) -> Result<String, String> {
    let s = state.lock().await;
    Ok(crate::export::to_csv(&s.categories, s.audit.as_ref()))
}

// ─── Internal helpers ──────────────────────────────────────────────────────────

/// Called once on startup: resolve the app-data store location and load
/// the persisted checklist for the default language.
pub async fn startup_init(app: tauri::AppHandle) {
    let store_path = match app.path().app_data_dir() {
        Ok(dir) => storage::store_file_path(&dir),
        Err(e) => {
            tracing::warn!("app data dir unavailable ({e}), storing beside the binary");
            storage::store_file_path(std::path::Path::new("."))
        }
    };

    let state = app.state::<AppMutex>();
    let mut s = state.lock().await;
    s.store_path = store_path;
    s.categories = storage::load(&s.store_path, s.language);
    tracing::debug!(lang = s.language.code(), "startup state loaded");
}
