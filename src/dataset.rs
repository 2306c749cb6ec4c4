//! Loads a fully materialized event from a JSON or YAML file.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, HelperId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load(path: &Path) -> AppResult<Event> {
    let content = fs::read_to_string(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let event: Event = match ext.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
    };

    validate(&event)?;
    debug!(
        event = %event.name,
        helpers = event.helpers.len(),
        jobs = event.jobs.len(),
        "dataset loaded"
    );
    Ok(event)
}

/// Helper ids must be unique, every reference must resolve and no helper
/// may be listed twice for the same shift or as coordinator of the same job.
pub fn validate(event: &Event) -> AppResult<()> {
    let mut known: HashSet<HelperId> = HashSet::new();
    for helper in &event.helpers {
        if !known.insert(helper.id) {
            return Err(AppError::DuplicateHelper(helper.id));
        }
    }

    for job in &event.jobs {
        check_assignments(&known, &job.coordinators, || {
            format!("coordinators of job '{}'", job.name)
        })?;
        for shift in &job.shifts {
            check_assignments(&known, &shift.helpers, || {
                format!("shift '{}' of job '{}'", shift.time(), job.name)
            })?;
        }
    }

    Ok(())
}

fn check_assignments<F>(known: &HashSet<HelperId>, ids: &[HelperId], context: F) -> AppResult<()>
where
    F: Fn() -> String,
{
    let mut seen: HashSet<HelperId> = HashSet::new();
    for id in ids {
        if !known.contains(id) {
            return Err(AppError::UnknownHelper {
                helper: *id,
                context: context(),
            });
        }
        if !seen.insert(*id) {
            return Err(AppError::DuplicateAssignment {
                helper: *id,
                context: context(),
            });
        }
    }
    Ok(())
}
