//! Password generation.

use zeroize::Zeroizing;

use super::charset::ClassDictionary;
use super::config::Config;
use crate::error::{Error, Result};
use crate::rand::{self, Source};

/// Draws passwords of a fixed length from a prepared candidate pool.
pub struct Generator {
    chars: Vec<char>,
    length: usize,
}

impl Generator {
    /// Build the candidate pool for `config`. Overlapping classes are not
    /// deduplicated.
    pub fn new(config: &Config, dict: &ClassDictionary) -> Result<Self> {
        let chars = dict.candidates(config.classes());
        if chars.is_empty() {
            return Err(Error::EmptyCandidates);
        }
        log::debug!(
            "candidate pool: {} chars from {:?}",
            chars.len(),
            config.classes()
        );
        Ok(Self {
            chars,
            length: config.length(),
        })
    }

    pub fn pool_size(&self) -> usize {
        self.chars.len()
    }

    /// Generate a single password.
    pub fn generate<S: Source + ?Sized>(&self, source: &mut S) -> Result<Zeroizing<String>> {
        let mut pass = Zeroizing::new(String::new());
        pass.try_reserve_exact(self.length).map_err(|_| Error::TooLong(self.length))?;
        for _ in 0..self.length {
            let idx = rand::below(source, self.chars.len()).map_err(Error::Entropy)?;
            pass.push(self.chars[idx]);
        }
        Ok(pass)
    }
}
