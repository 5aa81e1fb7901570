use crate::tables::ConlangTables;
use crate::tokenizer::conlang_tokens;
use crate::TranslitResult;
use itertools::Itertools;
use log::trace;

/// Rewrites English into the conlang: dictionary words first, sound rules for the rest.
#[derive(Debug, Clone, Copy)]
pub struct ConlangTransliterator<'t> {
    tables: &'t ConlangTables,
}

impl<'t> ConlangTransliterator<'t> {
    pub fn new(tables: &'t ConlangTables) -> Self {
        Self { tables }
    }

    pub fn builtin() -> TranslitResult<ConlangTransliterator<'static>> {
        Ok(ConlangTransliterator::new(ConlangTables::builtin()?))
    }

    pub fn transliterate(&self, text: &str) -> String {
        if text.chars().all(char::is_whitespace) {
            return text.to_string();
        }
        let lower = text.to_lowercase();
        let output = conlang_tokens(&lower)
            .filter_map(|token| {
                if token.chars().all(char::is_alphabetic) {
                    self.word(token)
                } else {
                    Some(token.to_string())
                }
            })
            .join(" ");
        output
    }

    /// `None` when the dictionary drops the word.
    pub fn word(&self, word: &str) -> Option<String> {
        match self.tables.translation(word) {
            Some("") => None,
            Some(translation) => Some(translation.to_string()),
            None => {
                let rewritten = self.tables.rules().apply_to_str(word);
                trace!("{} -> {}", word, rewritten);
                Some(rewritten)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tables::ConlangTableSources;

    fn convert(text: &str) -> String {
        ConlangTransliterator::builtin().unwrap().transliterate(text)
    }

    #[test]
    fn t_dictionary_words() {
        assert_eq!(
            convert("One Ring to rule them all"),
            "ash nazg gimbatul agh burzum-ishi"
        );
        assert_eq!(convert("Moon and stars"), "ithil agh starz");
        assert_eq!(convert("change"), "wend");
    }

    #[test]
    fn t_elided_words_leave_no_gap() {
        assert_eq!(convert("the cat sat on the mat."), "kat sat on mat .");
        assert_eq!(convert("to the of in"), "");
    }

    #[test]
    fn t_punctuation_passes_through() {
        assert_eq!(convert("Hello, world!"), "hello , vorld !");
        assert_eq!(convert("abc1 x_y"), "abc1 x_y");
    }

    #[test]
    fn t_sound_rules() {
        let cases = [
            ("quick brown fox", "kvikk brovn fokz"),
            ("nation", "nazhon"),
            ("vision", "fizhon"),
            ("shadowy", "shradovi"),
            ("wheel", "vhel"),
            ("coolness", "kolnesz"),
            ("booed", "boad"),
            ("walking", "valkugh"),
            ("jumped", "zhumpad"),
            ("ooo", "\u{fb}"),
            ("eee wheee", "\u{ee} vh\u{ee}"),
            ("geography", "geografi"),
            ("misses", "missez"),
        ];
        for (input, expected) in cases {
            assert_eq!(convert(input), expected, "{}", input);
        }
    }

    #[test]
    fn t_dictionary_beats_rules() {
        let sources = ConlangTableSources {
            dictionary: "english,black_speech\nwolf,warg\nthe,",
            phonetic_rules: "kind,pattern,replacement\nliteral,w,v",
        };
        let tables = ConlangTables::from_sources(&sources).unwrap();
        let engine = ConlangTransliterator::new(&tables);
        assert_eq!(engine.transliterate("The wolf wanders"), "warg vanders");
        assert_eq!(engine.word("the"), None);
    }

    #[test]
    fn t_fractions_stay_inside_words() {
        assert_eq!(convert("\u{bd} ring"), "\u{bd} nazg");
        assert_eq!(convert("x\u{b2}!"), "x\u{b2} !");
    }

    #[test]
    fn t_whitespace_is_kept() {
        assert_eq!(convert(" \n"), " \n");
    }
}
