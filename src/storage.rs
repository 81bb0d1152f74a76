//! Key-value persistence for the checklist.
//!
//! One SQLite file under the app-data directory holds a single
//! `checklist_store` table. Each language persists its full category list
//! as one JSON document under `ouj_seo_checklist_v3_<lang>`. Reads that
//! fail for any reason fall back to the static defaults — a bad or missing
//! document is "no saved data", never a user-visible error.

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::dataset::default_checklist;
use crate::types::{Category, Language};

const KEY_PREFIX: &str = "ouj_seo_checklist_v3";

/// Storage key for one language's checklist document.
pub fn storage_key(lang: Language) -> String {
    format!("{KEY_PREFIX}_{}", lang.code())
}

/// Default location of the store: `<app-data>/oujseo-audit/checklist.sqlite`.
pub fn store_file_path(app_data_dir: &Path) -> PathBuf {
    app_data_dir.join("oujseo-audit").join("checklist.sqlite")
}

/// Open (and if needed create) the store. The schema is a plain key-value
/// table so the document format can evolve behind the key suffix alone.
fn open_store(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         CREATE TABLE IF NOT EXISTS checklist_store (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         );",
    )?;
    Ok(conn)
}

/// Load the persisted checklist for `lang`, or the static defaults.
///
/// The saved document is trusted only if it decodes to a non-empty
/// `Vec<Category>`. Anything else — missing row, invalid JSON, wrong
/// shape, empty array — silently reverts to the defaults.
pub fn load(path: &Path, lang: Language) -> Vec<Category> {
    match load_raw(path, lang) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Category>>(&raw) {
            Ok(categories) if !categories.is_empty() => categories,
            Ok(_) => {
                tracing::warn!(lang = lang.code(), "saved checklist is empty, using defaults");
                default_checklist(lang)
            }
            Err(e) => {
                tracing::warn!(lang = lang.code(), "saved checklist unreadable ({e}), using defaults");
                default_checklist(lang)
            }
        },
        Ok(None) => default_checklist(lang),
        Err(e) => {
            tracing::warn!(lang = lang.code(), "checklist store unavailable ({e}), using defaults");
            default_checklist(lang)
        }
    }
}

fn load_raw(path: &Path, lang: Language) -> Result<Option<String>> {
    let conn = open_store(path)?;
    let mut stmt = conn.prepare("SELECT value FROM checklist_store WHERE key = ?1")?;
    let mut rows = stmt.query_map([storage_key(lang)], |row| row.get::<_, String>(0))?;
    Ok(rows.next().transpose()?)
}

/// Persist the full checklist document for `lang`. Called on every state
/// change; the whole document is rewritten each time.
pub fn save(path: &Path, lang: Language, categories: &[Category]) -> Result<()> {
    let conn = open_store(path)?;
    let value = serde_json::to_string(categories)?;
    conn.execute(
        "INSERT INTO checklist_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (storage_key(lang), value),
    )?;
    Ok(())
}

/// Remove the stored document for `lang`. Subsequent loads return defaults.
pub fn clear(path: &Path, lang: Language) -> Result<()> {
    let conn = open_store(path)?;
    conn.execute(
        "DELETE FROM checklist_store WHERE key = ?1",
        [storage_key(lang)],
    )?;
    Ok(())
}

/// True if a document is stored for `lang`. Used by tests and diagnostics.
pub fn has_saved(path: &Path, lang: Language) -> Result<bool> {
    Ok(load_raw(path, lang)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::toggle_item;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("checklist.sqlite")
    }

    #[test]
    fn missing_store_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = load(&store_path(&dir), Language::En);
        assert_eq!(loaded, default_checklist(Language::En));
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let mut categories = default_checklist(Language::En);
        toggle_item(&mut categories, "technical", "t-3");
        toggle_item(&mut categories, "content", "c-1");
        save(&path, Language::En, &categories).unwrap();
        assert_eq!(load(&path, Language::En), categories);
    }

    #[test]
    fn languages_persist_independently() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let mut ar = default_checklist(Language::Ar);
        toggle_item(&mut ar, "foundation", "f-1");
        save(&path, Language::Ar, &ar).unwrap();

        // The English key was never written: defaults, untouched.
        assert_eq!(load(&path, Language::En), default_checklist(Language::En));
        assert_eq!(load(&path, Language::Ar), ar);
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let conn = open_store(&path).unwrap();
        conn.execute(
            "INSERT INTO checklist_store (key, value) VALUES (?1, ?2)",
            (storage_key(Language::En), "{not json"),
        )
        .unwrap();
        assert_eq!(load(&path, Language::En), default_checklist(Language::En));
    }

    #[test]
    fn empty_array_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let conn = open_store(&path).unwrap();
        conn.execute(
            "INSERT INTO checklist_store (key, value) VALUES (?1, ?2)",
            (storage_key(Language::En), "[]"),
        )
        .unwrap();
        assert_eq!(load(&path, Language::En), default_checklist(Language::En));
    }

    #[test]
    fn wrong_shape_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let conn = open_store(&path).unwrap();
        conn.execute(
            "INSERT INTO checklist_store (key, value) VALUES (?1, ?2)",
            (storage_key(Language::En), r#"[{"id":"x"}]"#),
        )
        .unwrap();
        assert_eq!(load(&path, Language::En), default_checklist(Language::En));
    }

    #[test]
    fn clear_removes_only_the_given_language() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        save(&path, Language::Ar, &default_checklist(Language::Ar)).unwrap();
        save(&path, Language::En, &default_checklist(Language::En)).unwrap();
        clear(&path, Language::Ar).unwrap();
        assert!(!has_saved(&path, Language::Ar).unwrap());
        assert!(has_saved(&path, Language::En).unwrap());
    }

    #[test]
    fn storage_keys_are_language_scoped() {
        assert_eq!(storage_key(Language::Ar), "ouj_seo_checklist_v3_ar");
        assert_eq!(storage_key(Language::En), "ouj_seo_checklist_v3_en");
    }
}
