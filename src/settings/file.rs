//! Settings file persistence.
//!
//! The file holds a single line: `length,number,kinds`. Kinds go last so the
//! commas inside the class list need no escaping.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        settings.pass_length, settings.number_of_passwords, settings.kinds
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

/// Overlay the file's values onto `settings`.
///
/// Numbers that do not parse keep their current value. A line without all
/// three fields is rejected as `InvalidData` and leaves `settings` untouched.
pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings file at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(());
    }

    let parts: Vec<&str> = line.splitn(3, ',').collect();
    let &[length, number, kinds] = parts.as_slice() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("expected `length,number,kinds`, found {line:?}"),
        ));
    };

    settings.pass_length = length.trim().parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = number
        .trim()
        .parse()
        .unwrap_or(settings.number_of_passwords);
    settings.kinds = kinds.to_string();

    log::debug!("loaded settings from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        load(&dir.path().join("absent"), &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!dir.path().join("absent").exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/settings");
        let saved = Settings {
            kinds: "number,underscore".into(),
            pass_length: 12,
            number_of_passwords: 3,
        };
        save(&path, &saved).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "12,3,number,underscore\n");

        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn bad_numbers_fall_back_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        write(&path, "twelve,4,alphabet\n");

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();
        assert_eq!(settings.pass_length, 8);
        assert_eq!(settings.number_of_passwords, 4);
        assert_eq!(settings.kinds, "alphabet");
    }

    #[test]
    fn non_positive_values_are_loaded_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        write(&path, "0,-2,space");

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();
        assert_eq!(settings.pass_length, 0);
        assert_eq!(settings.number_of_passwords, -2);
    }

    #[test]
    fn truncated_line_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        write(&path, "16,2\n");

        let mut settings = Settings::default();
        let err = load(&path, &mut settings).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        write(&path, "\n");

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
