use crate::{TranslitError, TranslitResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

// `\w` here lacks "other number" characters such as fractions and superscripts,
// which count as word characters in English text.
const WORD_CHAR: &str = r"[\w\p{No}]";
const WORD_RUN: &str = r"(?:[^\W_]|\p{No})+";

static CONLANG_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}+|[^\w\p{{No}}\s]", WORD_CHAR)).expect("conlang token pattern")
});
static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Nd}+$").expect("numeral pattern"));

/// One classified unit of script-mode input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Punctuation(char),
    Digit(&'a str),
    Whitespace(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    /// Byte range of the token in the input.
    pub span: Range<usize>,
    pub token: Token<'a>,
}

/// Splits text into maximal runs of word characters and single recognized
/// punctuation or whitespace characters. Everything else is dropped.
#[derive(Debug)]
pub struct ScriptTokenizer {
    pattern: Regex,
}

impl ScriptTokenizer {
    pub fn new(recognized: impl IntoIterator<Item = char>) -> TranslitResult<Self> {
        let mut singles = recognized
            .into_iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect::<Vec<_>>();
        // Stable pattern text regardless of table order.
        singles.sort();
        let pattern = if singles.is_empty() {
            WORD_RUN.to_string()
        } else {
            format!(r"{}|{}", WORD_RUN, singles.join("|"))
        };
        let pattern = Regex::new(&pattern)
            .map_err(|e| TranslitError::malformed("punctuation", e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Spanned<'a>> {
        self.pattern
            .find_iter(text)
            .map(|m| Spanned {
                span: m.range(),
                token: classify(m.as_str()),
            })
            .collect()
    }
}

fn classify(text: &str) -> Token<'_> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_whitespace() => Token::Whitespace(c),
        (Some(c), None) if !c.is_alphanumeric() => Token::Punctuation(c),
        _ if NUMERAL.is_match(text) => Token::Digit(text),
        _ => Token::Word(text),
    }
}

/// Conlang-mode tokens: word runs and single non-space symbols, whitespace dropped.
pub fn conlang_tokens(text: &str) -> impl Iterator<Item = &str> {
    CONLANG_TOKEN.find_iter(text).map(|m| m.as_str())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tables::ScriptTables;

    fn tokenizer() -> &'static ScriptTokenizer {
        ScriptTables::builtin().unwrap().tokenizer()
    }

    #[test]
    fn t_classification() {
        let tokens = tokenizer()
            .tokenize("I'm 42, ok?\n")
            .into_iter()
            .map(|s| s.token)
            .collect::<Vec<_>>();
        assert_eq!(
            tokens,
            vec![
                Token::Word("I"),
                Token::Punctuation('\''),
                Token::Word("m"),
                Token::Whitespace(' '),
                Token::Digit("42"),
                Token::Punctuation(','),
                Token::Whitespace(' '),
                Token::Word("ok"),
                Token::Punctuation('?'),
                Token::Whitespace('\n'),
            ]
        );
    }

    #[test]
    fn t_word_runs_are_greedy() {
        let tokens = tokenizer().tokenize("abc1 x_y");
        assert_eq!(tokens[0].token, Token::Word("abc1"));
        assert_eq!(tokens[0].span, 0..4);
        assert_eq!(tokens[2].token, Token::Word("x"));
        assert_eq!(tokens[3].token, Token::Punctuation('_'));
        assert_eq!(tokens[4].token, Token::Word("y"));
    }

    #[test]
    fn t_spans_rebuild_input() {
        let tables = ScriptTables::builtin().unwrap();
        let input = "Tengwar \u{2013} not \u{201c}modes\u{201d}, I\u{2019}ve\r\n(seen) ~it~ 12\tx!";
        let rebuilt = tables
            .tokenizer()
            .tokenize(input)
            .iter()
            .map(|t| &input[t.span.clone()])
            .collect::<String>();
        let expected = input
            .chars()
            .filter(|c| c.is_alphanumeric() || tables.is_recognized(*c))
            .collect::<String>();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn t_unrecognized_characters_are_dropped() {
        let tokens = tokenizer().tokenize("a\u{2019}b ~");
        assert_eq!(
            tokens.iter().map(|t| t.token).collect::<Vec<_>>(),
            vec![Token::Word("a"), Token::Word("b"), Token::Whitespace(' ')]
        );
    }

    #[test]
    fn t_only_decimal_digits_are_numerals() {
        let tokens = tokenizer()
            .tokenize("\u{216b} \u{663}\u{664} \u{bd}llj")
            .into_iter()
            .map(|s| s.token)
            .collect::<Vec<_>>();
        assert_eq!(
            tokens,
            vec![
                Token::Word("\u{216b}"),
                Token::Whitespace(' '),
                Token::Digit("\u{663}\u{664}"),
                Token::Whitespace(' '),
                Token::Word("\u{bd}llj"),
            ]
        );
    }

    #[test]
    fn t_conlang_tokens() {
        let tokens = conlang_tokens("hello, world! x_y 42").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["hello", ",", "world", "!", "x_y", "42"]);

        let tokens = conlang_tokens("\u{bd}ring x\u{b2}!").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["\u{bd}ring", "x\u{b2}", "!"]);
    }
}
