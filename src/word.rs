use std::fmt::{Display, Formatter};
use strum_macros::EnumIter;

/// How the preprocessor decided a letter is pronounced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Marker {
    #[default]
    Plain,
    /// Part of a voiced `th`.
    Voiced,
    /// Palatalized `c` or `g` before e, i or y.
    Soft,
    Hard,
    /// `c` that opens a `ch`.
    DigraphStart,
    /// `r` directly before a vowel.
    PreVowel,
    /// `y` used as a consonant.
    Consonantal,
}

impl TryFrom<&str> for Marker {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use Marker::*;
        Ok(match value.to_ascii_lowercase().as_str() {
            "plain" => Plain,
            "voiced" => Voiced,
            "soft" => Soft,
            "hard" => Hard,
            "digraph-start" => DigraphStart,
            "pre-vowel" => PreVowel,
            "consonantal" => Consonantal,
            _ => return Err(()),
        })
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Marker::Plain => "plain",
                Marker::Voiced => "voiced",
                Marker::Soft => "soft",
                Marker::Hard => "hard",
                Marker::DigraphStart => "digraph-start",
                Marker::PreVowel => "pre-vowel",
                Marker::Consonantal => "consonantal",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub base: char,
    pub marker: Marker,
}

impl Letter {
    pub fn plain(base: char) -> Self {
        Self {
            base,
            marker: Marker::Plain,
        }
    }

    pub fn marked(base: char, marker: Marker) -> Self {
        Self { base, marker }
    }

    /// True for an unmarked `base`.
    pub fn is(&self, base: char) -> bool {
        self.marker == Marker::Plain && self.base == base
    }

    pub fn is_any_of(&self, letters: &str) -> bool {
        self.marker == Marker::Plain && letters.contains(self.base)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.marker {
            Marker::Plain => write!(f, "{}", self.base),
            m => write!(f, "{}[{}]", self.base, m),
        }
    }
}

/// Inflections taken off a word before transduction and put back afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuffixFlags {
    pub s: bool,
    pub e: bool,
}

/// A word token lowercased, stripped of apostrophes and split into annotated letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    pub(crate) letters: Vec<Letter>,
    pub(crate) suffixes: SuffixFlags,
}

impl NormalizedWord {
    pub fn new(token: &str) -> Self {
        Self {
            letters: token
                .to_lowercase()
                .chars()
                .filter(|c| *c != '\'')
                .map(Letter::plain)
                .collect(),
            suffixes: SuffixFlags::default(),
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn suffixes(&self) -> SuffixFlags {
        self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The base letters, ignoring markers.
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.base).collect()
    }

    /// Whether the letters starting at `at` are exactly the unmarked `pattern`.
    pub fn matches_at(&self, at: usize, pattern: &str) -> bool {
        let mut letters = self.letters.iter().skip(at);
        pattern
            .chars()
            .all(|c| letters.next().map(|l| l.is(c)).unwrap_or(false))
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        self.matches_at(0, pattern)
    }

    pub fn is_exactly(&self, pattern: &str) -> bool {
        self.letters.len() == pattern.chars().count() && self.starts_with(pattern)
    }
}

impl Display for NormalizedWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for l in &self.letters {
            write!(f, "{}", l)?;
        }
        Ok(())
    }
}
