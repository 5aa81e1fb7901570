//! The glyph and conlang tables, parsed from CSV and checked once when a table
//! set is built. Engines only ever borrow a finished, immutable table set.

use crate::raw_data;
use crate::rewrite::{RewriteRule, RewriteRuleCollection};
use crate::tokenizer::ScriptTokenizer;
use crate::word::{Letter, Marker};
use crate::{TranslitError, TranslitResult};
use log::debug;
use once_cell::sync::OnceCell;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub type Glyphs = SmallVec<[char; 2]>;

static BUILTIN_SCRIPT: OnceCell<ScriptTables> = OnceCell::new();
static BUILTIN_CONLANG: OnceCell<ConlangTables> = OnceCell::new();

/// Index into a vowel series. Every glyph a vowel can sit on belongs to one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum VowelClass {
    First,
    Second,
    Third,
    Fourth,
}

impl VowelClass {
    pub fn index(self) -> usize {
        match self {
            VowelClass::First => 0,
            VowelClass::Second => 1,
            VowelClass::Third => 2,
            VowelClass::Fourth => 3,
        }
    }
}

impl TryFrom<&str> for VowelClass {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use VowelClass::*;
        Ok(match value.trim() {
            "0" => First,
            "1" => Second,
            "2" => Third,
            "3" => Fourth,
            _ => return Err(()),
        })
    }
}

impl Display for VowelClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub(crate) fn parse_csv_to_map(
    table: &str,
    input: &str,
) -> TranslitResult<Vec<HashMap<String, String>>> {
    let mut rdr = csv::Reader::from_reader(input.as_bytes());
    let mut records = vec![];
    let headers = rdr
        .headers()
        .map_err(|e| TranslitError::malformed(table, e.to_string()))?
        .clone();
    for result in rdr.records() {
        let record = result.map_err(|e| TranslitError::malformed(table, e.to_string()))?;
        let mut map = HashMap::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            map.insert(header.to_string(), value.to_string());
        }
        records.push(map);
    }
    Ok(records)
}

fn field<'a>(
    table: &str,
    record: &'a HashMap<String, String>,
    name: &str,
) -> TranslitResult<&'a str> {
    record
        .get(name)
        .map(|v| v.as_str())
        .ok_or_else(|| TranslitError::malformed(table, format!("no {} column", name)))
}

fn single_char(table: &str, value: &str) -> TranslitResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TranslitError::malformed(
            table,
            format!("expected a single character, found \"{}\"", value),
        )),
    }
}

fn marker(table: &str, value: &str) -> TranslitResult<Marker> {
    Marker::try_from(value)
        .map_err(|_| TranslitError::malformed(table, format!("unknown marker \"{}\"", value)))
}

fn insert_unique<K: Hash + Eq + Display, V>(
    table: &str,
    map: &mut HashMap<K, V>,
    key: K,
    value: V,
) -> TranslitResult<()> {
    if map.contains_key(&key) {
        return Err(TranslitError::malformed(
            table,
            format!("duplicate entry \"{}\"", key),
        ));
    }
    map.insert(key, value);
    Ok(())
}

/// Word lists deciding which `th` is voiced, in order of precedence.
#[derive(Debug, Default, Clone)]
pub struct VoicingLists {
    /// Every occurrence inside a word is voiced.
    pub always_safe: Vec<String>,
    /// Voiced only when the word is exactly the entry.
    pub solo: Vec<String>,
    /// Voiced when the word starts with the entry.
    pub prefix: Vec<String>,
    /// Like `prefix`, but only the second `th` of the entry is voiced.
    pub special: Vec<String>,
}

/// Raw CSV text for every script table. `Default` gives the builtin tables.
#[derive(Debug, Clone, Copy)]
pub struct ScriptTableSources<'a> {
    pub special_glyphs: &'a str,
    pub irregular_words: &'a str,
    pub consonants: &'a str,
    pub digraphs: &'a str,
    pub vowel_series: &'a str,
    pub vowel_classes: &'a str,
    pub tehtar: &'a str,
    pub non_post_vocalic: &'a str,
    pub suffix_s: &'a str,
    pub voiced_th: &'a str,
    pub punctuation: &'a [(char, &'a str)],
}

impl Default for ScriptTableSources<'static> {
    fn default() -> Self {
        Self {
            special_glyphs: raw_data::SPECIAL_GLYPHS,
            irregular_words: raw_data::IRREGULAR_WORDS,
            consonants: raw_data::CONSONANTS,
            digraphs: raw_data::DIGRAPHS,
            vowel_series: raw_data::VOWEL_SERIES,
            vowel_classes: raw_data::VOWEL_CLASSES,
            tehtar: raw_data::TEHTAR,
            non_post_vocalic: raw_data::NON_POST_VOCALIC,
            suffix_s: raw_data::SUFFIX_S,
            voiced_th: raw_data::VOICED_TH,
            punctuation: raw_data::PUNCTUATION,
        }
    }
}

#[derive(Debug)]
pub struct ScriptTables {
    carrier: char,
    numeral: String,
    error_marker: String,
    suffix_e: char,
    default_suffix_s: char,
    irregular: HashMap<String, String>,
    consonants: HashMap<Letter, Glyphs>,
    digraphs: HashMap<(Letter, Letter), char>,
    vowels: HashMap<char, [char; 4]>,
    vowel_classes: HashMap<char, VowelClass>,
    tehtar: HashSet<char>,
    non_post_vocalic: HashMap<char, char>,
    suffix_s: Vec<(String, char)>,
    voicing: VoicingLists,
    punctuation: HashMap<char, String>,
    tokenizer: ScriptTokenizer,
}

impl ScriptTables {
    /// The embedded tables, built on first use.
    pub fn builtin() -> TranslitResult<&'static ScriptTables> {
        BUILTIN_SCRIPT.get_or_try_init(|| Self::from_sources(&ScriptTableSources::default()))
    }

    pub fn from_sources(sources: &ScriptTableSources<'_>) -> TranslitResult<Self> {
        let special = parse_special_glyphs(sources.special_glyphs)?;
        let special_glyph = |role: &str| {
            special.get(role).cloned().ok_or_else(|| {
                TranslitError::malformed("special glyphs", format!("no {} glyph", role))
            })
        };
        let single = |role: &str| -> TranslitResult<char> {
            single_char("special glyphs", &special_glyph(role)?)
        };

        let mut punctuation = HashMap::new();
        for (c, glyph) in sources.punctuation {
            insert_unique("punctuation", &mut punctuation, *c, glyph.to_string())?;
        }
        let tokenizer = ScriptTokenizer::new(punctuation.keys().copied())?;

        let tables = Self {
            carrier: single("carrier")?,
            numeral: special_glyph("numeral")?,
            error_marker: special_glyph("error")?,
            suffix_e: single("suffix-e")?,
            default_suffix_s: single("suffix-s")?,
            irregular: parse_irregular(sources.irregular_words)?,
            consonants: parse_consonants(sources.consonants)?,
            digraphs: parse_digraphs(sources.digraphs)?,
            vowels: parse_vowel_series(sources.vowel_series)?,
            vowel_classes: parse_vowel_classes(sources.vowel_classes)?,
            tehtar: sources.tehtar.chars().collect(),
            non_post_vocalic: parse_non_post_vocalic(sources.non_post_vocalic)?,
            suffix_s: parse_suffix_s(sources.suffix_s)?,
            voicing: parse_voicing(sources.voiced_th)?,
            punctuation,
            tokenizer,
        };
        tables.validate()?;
        debug!(
            "built script tables: {} consonants, {} digraphs, {} vowels, {} punctuation marks",
            tables.consonants.len(),
            tables.digraphs.len(),
            tables.vowels.len(),
            tables.punctuation.len()
        );
        Ok(tables)
    }

    /// Checks that a vowel can sit on every glyph the transducer may put after it.
    fn validate(&self) -> TranslitResult<()> {
        const TABLE: &str = "vowel classes";
        for class in VowelClass::iter() {
            if !self.vowel_classes.values().any(|c| *c == class) {
                return Err(TranslitError::malformed(
                    TABLE,
                    format!("class {} has no glyph", class),
                ));
            }
        }
        let leading = std::iter::once(self.carrier)
            .chain(self.consonants.values().filter_map(|g| g.first().copied()))
            .chain(self.digraphs.values().copied());
        for glyph in leading {
            if !self.vowel_classes.contains_key(&glyph) {
                return Err(TranslitError::malformed(
                    TABLE,
                    format!("glyph '{}' has no class", glyph),
                ));
            }
        }
        if self.tehtar.is_empty() {
            return Err(TranslitError::malformed("tehtar", "no tehta glyphs"));
        }
        Ok(())
    }

    pub fn carrier(&self) -> char {
        self.carrier
    }

    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    pub fn suffix_e(&self) -> char {
        self.suffix_e
    }

    /// Suffix glyph for a detached `s`, chosen by the glyph it follows.
    pub fn suffix_s_after(&self, last: Option<char>) -> char {
        last.and_then(|l| {
            self.suffix_s
                .iter()
                .find(|(after, _)| after.contains(l))
                .map(|(_, suffix)| *suffix)
        })
        .unwrap_or(self.default_suffix_s)
    }

    pub fn irregular(&self, word: &str) -> Option<&str> {
        self.irregular.get(word).map(|g| g.as_str())
    }

    pub fn consonant(&self, letter: Letter) -> Option<&Glyphs> {
        self.consonants.get(&letter)
    }

    pub fn digraph(&self, first: Letter, second: Letter) -> Option<char> {
        self.digraphs.get(&(first, second)).copied()
    }

    pub fn vowel_series(&self, letter: Letter) -> Option<&[char; 4]> {
        if letter.marker != Marker::Plain {
            return None;
        }
        self.vowels.get(&letter.base)
    }

    pub fn vowel_class(&self, glyph: char) -> TranslitResult<VowelClass> {
        self.vowel_classes
            .get(&glyph)
            .copied()
            .ok_or(TranslitError::UnclassifiedGlyph(glyph))
    }

    pub fn is_tehta(&self, glyph: char) -> bool {
        self.tehtar.contains(&glyph)
    }

    pub fn non_post_vocalic(&self, glyph: char) -> Option<char> {
        self.non_post_vocalic.get(&glyph).copied()
    }

    pub fn voicing(&self) -> &VoicingLists {
        &self.voicing
    }

    pub fn punctuation_glyph(&self, c: char) -> Option<&str> {
        self.punctuation.get(&c).map(|g| g.as_str())
    }

    /// Whether `c` survives tokenization on its own.
    pub fn is_recognized(&self, c: char) -> bool {
        self.punctuation.contains_key(&c)
    }

    pub fn tokenizer(&self) -> &ScriptTokenizer {
        &self.tokenizer
    }
}

fn parse_special_glyphs(input: &str) -> TranslitResult<HashMap<String, String>> {
    const TABLE: &str = "special glyphs";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        let glyph = field(TABLE, &r, "glyph")?;
        if glyph.is_empty() {
            return Err(TranslitError::malformed(TABLE, "empty glyph"));
        }
        insert_unique(
            TABLE,
            &mut result,
            field(TABLE, &r, "role")?.to_string(),
            glyph.to_string(),
        )?;
    }
    Ok(result)
}

fn parse_irregular(input: &str) -> TranslitResult<HashMap<String, String>> {
    const TABLE: &str = "irregular words";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        insert_unique(
            TABLE,
            &mut result,
            field(TABLE, &r, "word")?.to_lowercase(),
            field(TABLE, &r, "glyph")?.to_string(),
        )?;
    }
    Ok(result)
}

fn parse_consonants(input: &str) -> TranslitResult<HashMap<Letter, Glyphs>> {
    const TABLE: &str = "consonants";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        let letter = Letter::marked(
            single_char(TABLE, field(TABLE, &r, "letter")?)?,
            marker(TABLE, field(TABLE, &r, "marker")?)?,
        );
        let glyphs = field(TABLE, &r, "glyph")?.chars().collect::<Glyphs>();
        if glyphs.is_empty() {
            return Err(TranslitError::malformed(TABLE, format!("{} has no glyph", letter)));
        }
        insert_unique(TABLE, &mut result, letter, glyphs)?;
    }
    Ok(result)
}

fn parse_digraphs(input: &str) -> TranslitResult<HashMap<(Letter, Letter), char>> {
    const TABLE: &str = "digraphs";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        let first = Letter::marked(
            single_char(TABLE, field(TABLE, &r, "first")?)?,
            marker(TABLE, field(TABLE, &r, "first_marker")?)?,
        );
        let second = Letter::marked(
            single_char(TABLE, field(TABLE, &r, "second")?)?,
            marker(TABLE, field(TABLE, &r, "second_marker")?)?,
        );
        let glyph = single_char(TABLE, field(TABLE, &r, "glyph")?)?;
        if result.insert((first, second), glyph).is_some() {
            return Err(TranslitError::malformed(
                TABLE,
                format!("duplicate entry \"{}{}\"", first, second),
            ));
        }
    }
    Ok(result)
}

fn parse_vowel_series(input: &str) -> TranslitResult<HashMap<char, [char; 4]>> {
    const TABLE: &str = "vowel series";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        let vowel = single_char(TABLE, field(TABLE, &r, "vowel")?)?;
        let series = field(TABLE, &r, "series")?;
        let glyphs: [char; 4] = series
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| {
                TranslitError::malformed(
                    TABLE,
                    format!("series for '{}' must have exactly four glyphs", vowel),
                )
            })?;
        insert_unique(TABLE, &mut result, vowel, glyphs)?;
    }
    Ok(result)
}

fn parse_vowel_classes(input: &str) -> TranslitResult<HashMap<char, VowelClass>> {
    const TABLE: &str = "vowel classes";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        let glyph = single_char(TABLE, field(TABLE, &r, "glyph")?)?;
        let class_str = field(TABLE, &r, "class")?;
        let class = VowelClass::try_from(class_str).map_err(|_| {
            TranslitError::malformed(TABLE, format!("no vowel class \"{}\"", class_str))
        })?;
        insert_unique(TABLE, &mut result, glyph, class)?;
    }
    Ok(result)
}

fn parse_non_post_vocalic(input: &str) -> TranslitResult<HashMap<char, char>> {
    const TABLE: &str = "non-post-vocalic forms";
    let mut result = HashMap::new();
    for r in parse_csv_to_map(TABLE, input)? {
        insert_unique(
            TABLE,
            &mut result,
            single_char(TABLE, field(TABLE, &r, "glyph")?)?,
            single_char(TABLE, field(TABLE, &r, "alternate")?)?,
        )?;
    }
    Ok(result)
}

fn parse_suffix_s(input: &str) -> TranslitResult<Vec<(String, char)>> {
    const TABLE: &str = "suffix s";
    let buckets = parse_csv_to_map(TABLE, input)?
        .iter()
        .map(|r| -> TranslitResult<(String, char)> {
            Ok((
                field(TABLE, r, "after")?.to_string(),
                single_char(TABLE, field(TABLE, r, "suffix")?)?,
            ))
        })
        .collect::<TranslitResult<Vec<_>>>()?;
    let mut seen = HashSet::new();
    for c in buckets.iter().flat_map(|(after, _)| after.chars()) {
        if !seen.insert(c) {
            return Err(TranslitError::malformed(
                TABLE,
                format!("glyph '{}' is in more than one bucket", c),
            ));
        }
    }
    Ok(buckets)
}

fn parse_voicing(input: &str) -> TranslitResult<VoicingLists> {
    const TABLE: &str = "voiced th";
    let mut lists = VoicingLists::default();
    for r in parse_csv_to_map(TABLE, input)? {
        let word = field(TABLE, &r, "word")?.to_lowercase();
        if !word.contains("th") {
            return Err(TranslitError::malformed(
                TABLE,
                format!("\"{}\" has no th", word),
            ));
        }
        let list = field(TABLE, &r, "list")?;
        match list {
            "always-safe" => lists.always_safe.push(word),
            "solo" => lists.solo.push(word),
            "prefix" => lists.prefix.push(word),
            "special" => lists.special.push(word),
            _ => {
                return Err(TranslitError::malformed(
                    TABLE,
                    format!("unknown list \"{}\"", list),
                ))
            }
        }
    }
    Ok(lists)
}

/// Raw CSV text for the conlang tables. `Default` gives the builtin tables.
#[derive(Debug, Clone, Copy)]
pub struct ConlangTableSources<'a> {
    pub dictionary: &'a str,
    pub phonetic_rules: &'a str,
}

impl Default for ConlangTableSources<'static> {
    fn default() -> Self {
        Self {
            dictionary: raw_data::DICTIONARY,
            phonetic_rules: raw_data::PHONETIC_RULES,
        }
    }
}

#[derive(Debug)]
pub struct ConlangTables {
    dictionary: HashMap<String, String>,
    rules: RewriteRuleCollection,
}

impl ConlangTables {
    pub fn builtin() -> TranslitResult<&'static ConlangTables> {
        BUILTIN_CONLANG.get_or_try_init(|| Self::from_sources(&ConlangTableSources::default()))
    }

    pub fn from_sources(sources: &ConlangTableSources<'_>) -> TranslitResult<Self> {
        const DICTIONARY: &str = "dictionary";
        let mut dictionary = HashMap::new();
        for r in parse_csv_to_map(DICTIONARY, sources.dictionary)? {
            insert_unique(
                DICTIONARY,
                &mut dictionary,
                field(DICTIONARY, &r, "english")?.to_lowercase(),
                field(DICTIONARY, &r, "black_speech")?.to_string(),
            )?;
        }

        const RULES: &str = "phonetic rules";
        let rules = parse_csv_to_map(RULES, sources.phonetic_rules)?
            .iter()
            .map(|r| -> TranslitResult<RewriteRule> {
                RewriteRule::try_parse(
                    field(RULES, r, "kind")?,
                    field(RULES, r, "pattern")?,
                    field(RULES, r, "replacement")?,
                )
            })
            .collect::<TranslitResult<Vec<_>>>()?;

        debug!(
            "built conlang tables: {} dictionary entries, {} phonetic rules",
            dictionary.len(),
            rules.len()
        );
        Ok(Self {
            dictionary,
            rules: RewriteRuleCollection::new(rules),
        })
    }

    /// `Some("")` means the word is dropped from the output.
    pub fn translation(&self, word: &str) -> Option<&str> {
        self.dictionary.get(word).map(|t| t.as_str())
    }

    pub fn rules(&self) -> &RewriteRuleCollection {
        &self.rules
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_builtin_tables_load() {
        let tables = ScriptTables::builtin().unwrap();
        assert_eq!(tables.carrier(), '`');
        assert_eq!(tables.numeral(), "`````");
        assert_eq!(tables.irregular("of"), Some("W"));
        assert_eq!(tables.irregular("the"), Some("@"));
        assert_eq!(
            tables.consonant(Letter::plain('x')).map(|g| g.to_vec()),
            Some(vec!['z', '\u{e6}'])
        );
        assert_eq!(
            tables.digraph(
                Letter::marked('t', Marker::Voiced),
                Letter::marked('h', Marker::Voiced)
            ),
            Some('4')
        );
        assert_eq!(tables.digraph(Letter::plain('t'), Letter::plain('h')), Some('3'));
        assert_eq!(tables.vowel_series(Letter::plain('a')), Some(&['#', 'E', 'D', 'C']));
        assert_eq!(
            tables.vowel_series(Letter::marked('y', Marker::Consonantal)),
            None
        );
        assert_eq!(tables.vowel_class(','), Ok(VowelClass::Third));
        assert_eq!(tables.vowel_class('Q'), Err(TranslitError::UnclassifiedGlyph('Q')));
    }

    #[test]
    fn t_suffix_buckets() {
        let tables = ScriptTables::builtin().unwrap();
        assert_eq!(tables.suffix_s_after(Some('7')), '\u{c5}');
        assert_eq!(tables.suffix_s_after(Some('w')), '\u{c6}');
        assert_eq!(tables.suffix_s_after(Some('9')), '\u{a5}');
        assert_eq!(tables.suffix_s_after(Some('O')), '_');
        assert_eq!(tables.suffix_s_after(None), '_');
    }

    #[test]
    fn t_recognized_set() {
        let tables = ScriptTables::builtin().unwrap();
        for c in ".,!?;\"'_-`:/\\<>[]{}()@#$%^&*=+| \n\t".chars() {
            assert!(tables.is_recognized(c), "{:?}", c);
        }
        for c in "~\r\u{2019}\u{2013}a7".chars() {
            assert!(!tables.is_recognized(c), "{:?}", c);
        }
        assert_eq!(tables.punctuation_glyph(' '), Some(" "));
        assert_eq!(tables.punctuation_glyph('\t'), Some("\u{b7}-\u{b7}"));
    }

    #[test]
    fn t_short_vowel_series_is_malformed() {
        let sources = ScriptTableSources {
            vowel_series: "vowel,series\na,#ED",
            ..Default::default()
        };
        let err = ScriptTables::from_sources(&sources).unwrap_err();
        assert!(matches!(err, TranslitError::MalformedTable { ref table, .. } if table == "vowel series"));
    }

    #[test]
    fn t_uncovered_vowel_class_is_malformed() {
        let classes = raw_data::VOWEL_CLASSES
            .lines()
            .filter(|l| !l.ends_with(",3"))
            .collect::<Vec<_>>()
            .join("\n");
        let sources = ScriptTableSources {
            vowel_classes: &classes,
            ..Default::default()
        };
        assert!(matches!(
            ScriptTables::from_sources(&sources),
            Err(TranslitError::MalformedTable { .. })
        ));
    }

    #[test]
    fn t_out_of_range_vowel_class_is_malformed() {
        let classes = format!("{}\nA,4", raw_data::VOWEL_CLASSES);
        let sources = ScriptTableSources {
            vowel_classes: &classes,
            ..Default::default()
        };
        assert!(matches!(
            ScriptTables::from_sources(&sources),
            Err(TranslitError::MalformedTable { .. })
        ));
    }

    #[test]
    fn t_unclassified_consonant_is_malformed() {
        let consonants = format!("{}\nq,plain,Q", raw_data::CONSONANTS);
        let sources = ScriptTableSources {
            consonants: &consonants,
            ..Default::default()
        };
        let err = ScriptTables::from_sources(&sources).unwrap_err();
        assert_eq!(
            err,
            TranslitError::malformed("vowel classes", "glyph 'Q' has no class")
        );
    }

    #[test]
    fn t_ragged_row_is_malformed() {
        let sources = ScriptTableSources {
            irregular_words: "word,glyph\nof,W,extra",
            ..Default::default()
        };
        assert!(matches!(
            ScriptTables::from_sources(&sources),
            Err(TranslitError::MalformedTable { ref table, .. }) if table == "irregular words"
        ));
    }

    #[test]
    fn t_duplicate_dictionary_entry_is_malformed() {
        let sources = ConlangTableSources {
            dictionary: "english,black_speech\nlose,delu\nlose,delu",
            ..Default::default()
        };
        assert!(matches!(
            ConlangTables::from_sources(&sources),
            Err(TranslitError::MalformedTable { .. })
        ));
    }

    #[test]
    fn t_builtin_dictionary() {
        let tables = ConlangTables::builtin().unwrap();
        assert_eq!(tables.translation("ring"), Some("nazg"));
        assert_eq!(tables.translation("to"), Some(""));
        assert_eq!(tables.translation("dirty"), Some("gorth"));
        assert_eq!(tables.translation("hobbit"), None);
    }
}
