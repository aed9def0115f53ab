//! Validated generation request.

use super::charset::CharacterClass;
use crate::error::{Error, Result};

pub const DEFAULT_KINDS: &str = "alphabet,number,symbol,underscore,space";
pub const DEFAULT_LENGTH: i64 = 8;
pub const DEFAULT_COUNT: i64 = 1;

/// Parse a comma-separated list of class names.
///
/// Repeated names collapse to their first occurrence.
pub fn parse_classes(list: &str) -> Result<Vec<CharacterClass>> {
    let mut classes = Vec::with_capacity(CharacterClass::ALL.len());
    for name in list.split(',') {
        let class: CharacterClass = name.parse()?;
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    Ok(classes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    classes: Vec<CharacterClass>,
    length: usize,
    count: usize,
}

impl Config {
    /// Checks classes, then length, then count; the first failure wins.
    pub fn new(kinds: &str, length: i64, count: i64) -> Result<Self> {
        let classes = parse_classes(kinds)?;
        let length = positive(length).ok_or(Error::NonPositiveLength)?;
        let count = positive(count).ok_or(Error::NonPositiveCount)?;
        Ok(Self {
            classes,
            length,
            count,
        })
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

fn positive(n: i64) -> Option<usize> {
    usize::try_from(n).ok().filter(|&n| n > 0)
}
