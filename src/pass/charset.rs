//! Character classes and the per-class pools of printable ASCII.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;

/// Printable ASCII, space through tilde.
const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7e;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Alphabet,
    Number,
    Symbol,
    Underscore,
    Space,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Alphabet,
        CharacterClass::Number,
        CharacterClass::Symbol,
        CharacterClass::Underscore,
        CharacterClass::Space,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Alphabet => "alphabet",
            CharacterClass::Number => "number",
            CharacterClass::Symbol => "symbol",
            CharacterClass::Underscore => "underscore",
            CharacterClass::Space => "space",
        }
    }

    /// Which class a character falls into, if any.
    ///
    /// Underscore is connector punctuation, so it is matched before the
    /// general punctuation arm claims it.
    pub fn of(c: char) -> Option<CharacterClass> {
        match c {
            '_' => Some(CharacterClass::Underscore),
            c if c.is_alphabetic() => Some(CharacterClass::Alphabet),
            c if c.is_numeric() => Some(CharacterClass::Number),
            c if c.is_ascii_punctuation() => Some(CharacterClass::Symbol),
            c if c.is_whitespace() => Some(CharacterClass::Space),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| Error::UnknownClass(s.to_string()))
    }
}

/// Process-wide dictionary, classified on first use.
pub static DICTIONARY: LazyLock<ClassDictionary> = LazyLock::new(ClassDictionary::classify);

/// Ordered pool of characters for each class.
#[derive(Debug, Clone)]
pub struct ClassDictionary {
    pools: [Vec<char>; 5],
}

impl ClassDictionary {
    /// Sort every printable ASCII character into its class.
    ///
    /// # Panics
    /// Panics if the range yields a non-printable character, which would mean
    /// the range constant itself is wrong.
    pub fn classify() -> Self {
        let mut pools: [Vec<char>; 5] = Default::default();

        for code in PRINTABLE {
            let c = char::from(code);
            if !(c == ' ' || c.is_ascii_graphic()) {
                panic!("internal error: cannot construct character dictionary at {code:#04x}");
            }
            if let Some(class) = CharacterClass::of(c) {
                pools[class.index()].push(c);
            }
        }

        Self { pools }
    }

    pub fn pool(&self, class: CharacterClass) -> &[char] {
        &self.pools[class.index()]
    }

    /// Concatenated pools of `classes`, in the order given.
    pub fn candidates(&self, classes: &[CharacterClass]) -> Vec<char> {
        let mut chars = Vec::with_capacity(classes.iter().map(|&c| self.pool(c).len()).sum());
        for &class in classes {
            chars.extend_from_slice(self.pool(class));
        }
        chars
    }
}

#[cfg(test)]
impl ClassDictionary {
    pub(crate) fn clear(&mut self, class: CharacterClass) {
        self.pools[class.index()].clear();
    }
}
