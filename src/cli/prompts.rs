//! Centralized warning and error messages for CLI output.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::pass::{ClassDictionary, output};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence warnings for the rest of the run (`-q`)
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if QUIET.load(Ordering::Relaxed) {
        return;
    }
    if io::stderr().is_tty() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Dump every class pool to stderr - NOT suppressed, the user asked for it
pub fn pools(dict: &ClassDictionary) {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    let _ = output::dump_pools(dict, &mut err).and_then(|_| err.flush());
}

pub fn settings_unreadable(err: &io::Error) {
    warn(&format!("Failed to load settings: {err}"));
}

pub fn settings_not_saved(err: &io::Error) {
    warn(&format!("Failed to save settings: {err}"));
}
