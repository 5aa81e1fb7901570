#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod conlang;
mod raw_data;
pub mod rewrite;
pub mod script;
pub mod tables;
pub mod tokenizer;
pub mod word;

pub use app::ScribeApp;
pub use conlang::ConlangTransliterator;
pub use script::{ErrorPolicy, ScriptTransliterator, Transliteration};
pub use tables::{ConlangTables, ScriptTables};
use std::fmt::Formatter;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslitError {
    /// A letter survived preprocessing without a consonant, vowel or digraph entry.
    UnsupportedGrapheme {
        word: String,
        letter: char,
        position: usize,
    },
    MalformedTable {
        table: String,
        reason: String,
    },
    /// A vowel had to sit on a glyph that has no vowel class.
    UnclassifiedGlyph(char),
}

pub type TranslitResult<T> = Result<T, TranslitError>;

impl TranslitError {
    pub(crate) fn malformed(table: &str, reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for TranslitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslitError::UnsupportedGrapheme {
                word,
                letter,
                position,
            } => write!(
                f,
                "Unsupported letter '{}' at position {} of \"{}\"",
                letter, position, word
            ),
            TranslitError::MalformedTable { table, reason } => {
                write!(f, "Malformed table {} ({})", table, reason)
            }
            TranslitError::UnclassifiedGlyph(g) => {
                write!(f, "Glyph '{}' has no vowel class", g)
            }
        }
    }
}

impl std::error::Error for TranslitError {}

/// Transliterates English text into the glyph script using the builtin tables.
/// Fails on the first word that contains a letter the tables cannot spell.
pub fn script_transliterate(text: &str) -> TranslitResult<String> {
    ScriptTransliterator::builtin()?.transliterate(text)
}

/// Rewrites English text into the conlang using the builtin dictionary and rules.
pub fn conlang_transliterate(text: &str) -> TranslitResult<String> {
    Ok(ConlangTransliterator::builtin()?.transliterate(text))
}

pub use conlang_transliterate as convert_black_speech;
pub use script_transliterate as convert;
pub use script_transliterate as convert_tengwar;
