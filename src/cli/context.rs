//! CLI context - bundles flags and saved settings.

use std::io;

use super::{CliFlags, prompts};
use crate::error::Result;
use crate::pass::{self, Config, DICTIONARY, Generator, SecureBufWriter};
use crate::rand::OsSource;
use crate::settings::Settings;

/// Application context for one run.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Pair parsed flags with the saved defaults (or the built-in ones under
    /// `--defaults`). An unreadable settings file is a warning, not an error.
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.defaults {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_unreadable(&e);
                Settings::default()
            })
        };

        Self { settings, flags }
    }

    /// Flag value where given, saved value otherwise.
    pub fn resolved(&self) -> Settings {
        Settings {
            kinds: self
                .flags
                .kinds
                .clone()
                .unwrap_or_else(|| self.settings.kinds.clone()),
            pass_length: self.flags.length.unwrap_or(self.settings.pass_length),
            number_of_passwords: self.flags.number.unwrap_or(self.settings.number_of_passwords),
        }
    }

    pub fn run(&self) -> Result<()> {
        if self.flags.debug {
            prompts::pools(&DICTIONARY);
        }

        let resolved = self.resolved();
        let config = Config::new(
            &resolved.kinds,
            resolved.pass_length,
            resolved.number_of_passwords,
        )?;

        if self.flags.save
            && let Err(e) = resolved.save_to_file()
        {
            prompts::settings_not_saved(&e);
        }

        let generator = Generator::new(&config, &DICTIONARY)?;
        log::debug!(
            "generating {} password(s) of {} chars, pool of {}, source getrandom",
            config.count(),
            config.length(),
            generator.pool_size()
        );

        let stdout = io::stdout();
        let mut out = SecureBufWriter::new(stdout.lock());
        pass::write_batch(&generator, config.count(), &mut OsSource, &mut out)
    }
}
