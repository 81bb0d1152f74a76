//! Pure operations over the in-memory checklist.
//!
//! Everything here takes state by reference and returns new values or
//! mutates in a single obvious place, so the command layer stays thin and
//! the behavior is unit-testable without Tauri.

use crate::types::{AuditResult, AuditStatus, Category};

/// Completion percentage across all categories, rounded half-up.
/// Defined as 0 for an empty checklist.
pub fn progress(categories: &[Category]) -> u8 {
    let mut total = 0u32;
    let mut completed = 0u32;
    for cat in categories {
        for item in &cat.items {
            total += 1;
            if item.is_completed {
                completed += 1;
            }
        }
    }
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(completed) / f64::from(total)).round() as u8
}

/// Flip one item's completion flag. Returns false if no such item exists
/// (unknown category or item id), leaving the checklist untouched.
pub fn toggle_item(categories: &mut [Category], category_id: &str, item_id: &str) -> bool {
    for cat in categories.iter_mut() {
        if cat.id != category_id {
            continue;
        }
        for item in cat.items.iter_mut() {
            if item.id == item_id {
                item.is_completed = !item.is_completed;
                return true;
            }
        }
    }
    false
}

/// Fold audit findings into the checklist by exact id match.
///
/// Matched items get `is_completed = (status == pass)` — a full replace
/// that discards whatever manual state they had. Items whose id does not
/// appear in the findings are left untouched. Applying the same result
/// twice is a no-op the second time.
pub fn merge(categories: &mut [Category], audit: &AuditResult) {
    for cat in categories.iter_mut() {
        for item in cat.items.iter_mut() {
            if let Some(finding) = audit
                .checklist_results
                .iter()
                .find(|f| f.task_id == item.id)
            {
                item.is_completed = finding.status == AuditStatus::Pass;
            }
        }
    }
}

/// Every item id in the checklist, in display order. Sent to the audit
/// service as the exhaustive set of valid `task_id` values.
pub fn all_task_ids(categories: &[Category]) -> Vec<String> {
    categories
        .iter()
        .flat_map(|c| c.items.iter().map(|i| i.id.clone()))
        .collect()
}

/// The audit reason attached to an item id, if the last audit covered it.
pub fn find_reason<'a>(audit: &'a AuditResult, item_id: &str) -> Option<&'a str> {
    audit
        .checklist_results
        .iter()
        .find(|f| f.task_id == item_id)
        .map(|f| f.reason.as_str())
}
