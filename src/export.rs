//! Tabular export of the current checklist.
//!
//! One CSV row per item: category, task, priority, completion state, and
//! the AI reason from the last audit when that item was covered by it.
//! The rendered file is handed to the frontend, which saves or opens it —
//! formatting beyond the row contract is the spreadsheet's problem.

use crate::checklist::find_reason;
use crate::types::{AuditResult, Category, Priority};

const HEADER: &str = "category,task,priority,completed,ai_reason";
const NO_REASON: &str = "-";

/// RFC-4180-style quoting: wrap in quotes, double any inner quote.
/// Arabic task text routinely contains commas, so every field is quoted.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// Render the full checklist (and audit reasons, if any) as CSV text.
pub fn to_csv(categories: &[Category], audit: Option<&AuditResult>) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for cat in categories {
        for item in &cat.items {
            let reason = audit
                .and_then(|a| find_reason(a, &item.id))
                .unwrap_or(NO_REASON);
            out.push_str(&csv_field(&cat.name));
            out.push(',');
            out.push_str(&csv_field(&item.task));
            out.push(',');
            out.push_str(priority_label(item.priority));
            out.push(',');
            out.push_str(if item.is_completed { "yes" } else { "no" });
            out.push(',');
            out.push_str(&csv_field(reason));
            out.push('\n');
        }
    }
    out
}
