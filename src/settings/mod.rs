//! Saved defaults for `-k`, `-l` and `-n`.

mod file;

use std::env;
use std::io;
use std::path::PathBuf;

use crate::pass::config::{DEFAULT_COUNT, DEFAULT_KINDS, DEFAULT_LENGTH};

/// Overrides the settings file location.
pub const PATH_ENV: &str = "GOTPASSWD_SETTINGS";

/// Unvalidated generation defaults. Validation happens when they are turned
/// into a `Config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub kinds: String,
    pub pass_length: i64,
    pub number_of_passwords: i64,
}

impl Settings {
    /// Load saved defaults. A missing file yields the built-in defaults.
    pub fn load_from_file() -> io::Result<Self> {
        let mut settings = Settings::default();
        file::load(&path(), &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> io::Result<()> {
        file::save(&path(), self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_KINDS.to_string(),
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: DEFAULT_COUNT,
        }
    }
}

/// `$GOTPASSWD_SETTINGS`, else `$HOME/.config/gotpasswd/settings`.
pub fn path() -> PathBuf {
    if let Some(p) = env::var_os(PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/gotpasswd/settings")
}
