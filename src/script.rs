mod postprocess;
mod preprocess;
mod transducer;

use crate::tables::ScriptTables;
use crate::tokenizer::Token;
use crate::word::NormalizedWord;
use crate::{TranslitError, TranslitResult};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum_macros::EnumIter;

/// What to do with a word the tables cannot spell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum ErrorPolicy {
    /// Fail the whole call with the first error.
    #[default]
    Abort,
    /// Replace the word with the error marker and carry on.
    Mark,
}

impl Display for ErrorPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ErrorPolicy::Abort => "Stop at the first error",
                ErrorPolicy::Mark => "Mark unsupported words",
            }
        )
    }
}

/// Output of a conversion that kept going past bad words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliteration {
    pub output: String,
    pub errors: Vec<TranslitError>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScriptTransliterator<'t> {
    tables: &'t ScriptTables,
    policy: ErrorPolicy,
}

impl<'t> ScriptTransliterator<'t> {
    pub fn new(tables: &'t ScriptTables) -> Self {
        Self {
            tables,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn builtin() -> TranslitResult<ScriptTransliterator<'static>> {
        Ok(ScriptTransliterator::new(ScriptTables::builtin()?))
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn transliterate(&self, text: &str) -> TranslitResult<String> {
        if text.chars().all(char::is_whitespace) {
            return Ok(text.to_string());
        }
        match self.policy {
            ErrorPolicy::Abort => self
                .tables
                .tokenizer()
                .tokenize(text)
                .into_iter()
                .map(|t| self.token(t.token))
                .collect(),
            ErrorPolicy::Mark => Ok(self.transliterate_report(text).output),
        }
    }

    /// Converts everything it can, marking each bad word and collecting its error.
    pub fn transliterate_report(&self, text: &str) -> Transliteration {
        let mut report = Transliteration::default();
        if text.chars().all(char::is_whitespace) {
            report.output = text.to_string();
            return report;
        }
        for spanned in self.tables.tokenizer().tokenize(text) {
            match self.token(spanned.token) {
                Ok(glyphs) => report.output.push_str(&glyphs),
                Err(e) => {
                    warn!("marking \"{}\": {}", &text[spanned.span], e);
                    report.output.push_str(self.tables.error_marker());
                    report.errors.push(e);
                }
            }
        }
        report
    }

    fn token(&self, token: Token<'_>) -> TranslitResult<String> {
        match token {
            Token::Punctuation(c) | Token::Whitespace(c) => Ok(self
                .tables
                .punctuation_glyph(c)
                .map(String::from)
                .unwrap_or_else(|| self.tables.carrier().to_string())),
            Token::Digit(_) => Ok(self.tables.numeral().to_string()),
            Token::Word(w) => self.word(w),
        }
    }

    /// Glyphs for a single word.
    pub fn word(&self, token: &str) -> TranslitResult<String> {
        let mut word = NormalizedWord::new(token);
        if let Some(glyph) = self.tables.irregular(&word.text()) {
            return Ok(glyph.to_string());
        }
        preprocess::preprocess(&mut word, self.tables.voicing());
        let glyphs = transducer::transduce(&word, self.tables)?;
        let output = postprocess::postprocess(&glyphs, word.suffixes(), self.tables);
        trace!("{} -> {} -> {}", token, word, output);
        Ok(output)
    }
}
