//! Engine warnings with colored terminal output.
//!
//! Parse errors in HTML are recoverable by design, so components report them
//! as warnings and keep going. Each unique message is printed at most once
//! per process to keep noisy documents from flooding the terminal.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages that have already been printed, keyed by `[component] message`.
static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn warned_set() -> &'static Mutex<HashSet<String>> {
    WARNED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Report a recoverable condition (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("HTML Tokenizer", "parse error at position 42: eof-in-tag");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned_set().lock().unwrap().insert(key);

    if should_print {
        eprintln!("{YELLOW}[Wallaby {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when starting a new document).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    warned_set().lock().unwrap().clear();
}
