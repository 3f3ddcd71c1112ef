//! Engine warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet that repeats the same bad
//! declaration only reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Lock the warning set, recovering it if a previous holder panicked.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Format the deduplication key for a warning.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a rejected or unsupported input (prints once per unique message).
///
/// # Example
/// ```
/// use tessel_common::warning::warn_once;
///
/// warn_once("CSS", "unsupported unit 'pt' in margin");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[Tessel {component}] ⚠ {message}").yellow());
    }
}

/// Check whether a warning has been reported since the last clear.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call when starting a new stylesheet).
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
