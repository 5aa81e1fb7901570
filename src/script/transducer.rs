//! Turns a preprocessed word into glyphs.
//!
//! A vowel's glyph depends on the first glyph emitted after it, so the word is
//! first split into units and only then emitted, with each vowel held back until
//! the glyph it sits on is known.

use crate::tables::{Glyphs, ScriptTables};
use crate::word::NormalizedWord;
use crate::{TranslitError, TranslitResult};
use smallvec::smallvec;

#[derive(Debug, Clone, PartialEq)]
enum Unit<'t> {
    Glyphs(Glyphs),
    Vowel(&'t [char; 4]),
}

fn segment<'t>(word: &NormalizedWord, tables: &'t ScriptTables) -> TranslitResult<Vec<Unit<'t>>> {
    let letters = word.letters();
    let mut units = Vec::with_capacity(letters.len());
    let mut i = 0;
    while i < letters.len() {
        let cur = letters[i];
        if !cur.base.is_alphabetic() {
            units.push(Unit::Glyphs(smallvec![tables.carrier()]));
            i += 1;
            continue;
        }
        if let Some(glyph) = letters
            .get(i + 1)
            .and_then(|next| tables.digraph(cur, *next))
        {
            units.push(Unit::Glyphs(smallvec![glyph]));
            i += 2;
            continue;
        }
        if let Some(series) = tables.vowel_series(cur) {
            units.push(Unit::Vowel(series));
        } else if let Some(glyphs) = tables.consonant(cur) {
            units.push(Unit::Glyphs(glyphs.clone()));
        } else {
            return Err(TranslitError::UnsupportedGrapheme {
                word: word.text(),
                letter: cur.base,
                position: i,
            });
        }
        i += 1;
    }
    Ok(units)
}

/// Glyphs for `word`. An empty word becomes a lone carrier.
pub fn transduce(word: &NormalizedWord, tables: &ScriptTables) -> TranslitResult<Vec<char>> {
    if word.is_empty() {
        return Ok(vec![tables.carrier()]);
    }
    let mut output = vec![];
    let mut pending: Option<&[char; 4]> = None;
    let carried = |series: &[char; 4], output: &mut Vec<char>| -> TranslitResult<()> {
        let carrier = tables.carrier();
        output.push(carrier);
        output.push(series[tables.vowel_class(carrier)?.index()]);
        Ok(())
    };

    for unit in segment(word, tables)? {
        match unit {
            Unit::Vowel(series) => {
                // Two vowels in a row: the first one cannot wait any longer.
                if let Some(prev) = pending.replace(series) {
                    carried(prev, &mut output)?;
                }
            }
            Unit::Glyphs(glyphs) => {
                let (first, rest) = match glyphs.split_first() {
                    Some(split) => split,
                    None => continue,
                };
                output.push(*first);
                if let Some(series) = pending.take() {
                    output.push(series[tables.vowel_class(*first)?.index()]);
                }
                output.extend_from_slice(rest);
            }
        }
    }
    if let Some(series) = pending {
        carried(series, &mut output)?;
    }
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::script::preprocess::preprocess;

    fn glyphs(input: &str) -> TranslitResult<String> {
        let tables = ScriptTables::builtin().unwrap();
        let mut word = NormalizedWord::new(input);
        preprocess(&mut word, tables.voicing());
        transduce(&word, tables).map(|g| g.into_iter().collect())
    }

    #[test]
    fn t_consonants_and_digraphs() {
        assert_eq!(glyphs("sh").unwrap(), "d");
        assert_eq!(glyphs("rhythm").unwrap(), "694\u{d8}t");
        assert_eq!(glyphs("church").unwrap(), "a6Ua");
        assert_eq!(glyphs("catch").unwrap(), "z1Ea");
    }

    #[test]
    fn t_vowel_takes_class_of_next_glyph() {
        // 'o' before 'n' (class 0) and before 't' (class 1).
        assert_eq!(glyphs("on").unwrap(), "5^");
        assert_eq!(glyphs("ot").unwrap(), "1Y");
        assert_eq!(glyphs("thorough").unwrap(), "37H`Nv&");
    }

    #[test]
    fn t_vowel_on_carrier() {
        assert_eq!(glyphs("a").unwrap(), "`C");
        assert_eq!(glyphs("i").unwrap(), "`B");
        assert_eq!(glyphs("ea").unwrap(), "`V`C");
        assert_eq!(glyphs("you").unwrap(), "l`N`M");
    }

    #[test]
    fn t_vowel_before_x_sits_on_first_glyph() {
        assert_eq!(glyphs("box").unwrap(), "wzH\u{e6}");
        assert_eq!(glyphs("x").unwrap(), "z\u{e6}");
    }

    #[test]
    fn t_non_letters_become_carriers() {
        assert_eq!(glyphs("ab12c").unwrap(), "w#``z");
    }

    #[test]
    fn t_empty_word_is_a_carrier() {
        let tables = ScriptTables::builtin().unwrap();
        let word = NormalizedWord::new("");
        assert_eq!(transduce(&word, tables).unwrap(), vec!['`']);
    }

    #[test]
    fn t_unsupported_letter() {
        assert_eq!(
            glyphs("café"),
            Err(TranslitError::UnsupportedGrapheme {
                word: "café".to_string(),
                letter: 'é',
                position: 3,
            })
        );
        assert!(matches!(
            glyphs("naïve"),
            Err(TranslitError::UnsupportedGrapheme { letter: 'ï', position: 2, .. })
        ));
    }
}
