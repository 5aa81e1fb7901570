//! Phonological rewrites applied to a normalized word before transduction.
//! Every pass scans the current buffer, so the order of the passes matters.

use crate::tables::VoicingLists;
use crate::word::{Letter, Marker, NormalizedWord, SuffixFlags};
use log::trace;

const SOFTENING: &str = "eiy";
const VOWELS: &str = "aeiouy";
const STRICT_VOWELS: &str = "aeiou";
/// A final `s` after one of these belongs to the stem.
const STEM_S: &str = "aiou";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Voicing {
    Every,
    Second,
}

pub fn preprocess(word: &mut NormalizedWord, voicing: &VoicingLists) {
    mark_voiced_th(word, voicing);
    palatalize(&mut word.letters);
    mark_before(&mut word.letters, 'r', VOWELS, Marker::PreVowel);
    fold(&mut word.letters, 'q', 'k');
    mark_before(&mut word.letters, 'y', STRICT_VOWELS, Marker::Consonantal);
    word.suffixes = detach_suffixes(&mut word.letters);
    trace!("preprocessed to {} ({:?})", word, word.suffixes);
}

fn mark_voiced_th(word: &mut NormalizedWord, lists: &VoicingLists) {
    for w in &lists.always_safe {
        voice_occurrences(word, w, Voicing::Every);
    }
    for w in &lists.solo {
        if word.is_exactly(w) {
            voice_occurrences(word, "th", Voicing::Every);
        }
    }
    for w in &lists.prefix {
        if word.starts_with(w) {
            voice_occurrences(word, w, Voicing::Every);
        }
    }
    for w in &lists.special {
        if word.starts_with(w) {
            voice_occurrences(word, w, Voicing::Second);
        }
    }
}

/// Char offsets of each `th` inside `pattern`.
fn th_offsets(pattern: &str) -> Vec<usize> {
    let chars = pattern.chars().collect::<Vec<_>>();
    let mut result = vec![];
    let mut i = 0;
    while i + 1 < chars.len() {
        if chars[i] == 't' && chars[i + 1] == 'h' {
            result.push(i);
            i += 2;
        } else {
            i += 1;
        }
    }
    result
}

/// Marks the `th` pairs of every non-overlapping, still unmarked occurrence of `pattern`.
fn voice_occurrences(word: &mut NormalizedWord, pattern: &str, voicing: Voicing) {
    let len = pattern.chars().count();
    let offsets = match voicing {
        Voicing::Every => th_offsets(pattern),
        Voicing::Second => th_offsets(pattern).into_iter().skip(1).take(1).collect(),
    };
    let mut at = 0;
    while len > 0 && at + len <= word.letters.len() {
        if word.matches_at(at, pattern) {
            for offset in &offsets {
                word.letters[at + offset].marker = Marker::Voiced;
                word.letters[at + offset + 1].marker = Marker::Voiced;
            }
            at += len;
        } else {
            at += 1;
        }
    }
}

/// Soft, hard and `ch` forms of `c`, soft `g`.
fn palatalize(letters: &mut [Letter]) {
    for i in 1..letters.len() {
        let next = letters[i];
        let cur = &mut letters[i - 1];
        if cur.is('g') {
            if next.is_any_of(SOFTENING) {
                cur.marker = Marker::Soft;
            }
        } else if cur.is('c') {
            cur.marker = if next.is_any_of(SOFTENING) {
                Marker::Soft
            } else if next.is('h') {
                Marker::DigraphStart
            } else {
                Marker::Hard
            };
        }
    }
    if let Some(last) = letters.last_mut() {
        if last.is('c') {
            last.marker = Marker::Hard;
        }
    }
}

fn mark_before(letters: &mut [Letter], letter: char, followers: &str, marker: Marker) {
    for i in 1..letters.len() {
        if letters[i - 1].is(letter) && letters[i].is_any_of(followers) {
            letters[i - 1].marker = marker;
        }
    }
}

fn fold(letters: &mut [Letter], from: char, to: char) {
    letters
        .iter_mut()
        .filter(|l| l.is(from))
        .for_each(|l| l.base = to);
}

fn detach_suffixes(letters: &mut Vec<Letter>) -> SuffixFlags {
    let mut flags = SuffixFlags::default();
    if matches!(letters.as_slice(), [.., prev, last] if last.is('s') && !prev.is_any_of(STEM_S))
    {
        letters.pop();
        flags.s = true;
    }
    if letters.len() >= 3
        && matches!(letters.as_slice(), [.., prev, last] if last.is('e') && !prev.is_any_of(VOWELS))
    {
        letters.pop();
        flags.e = true;
    }
    flags
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tables::ScriptTables;

    fn run(input: &str) -> NormalizedWord {
        let mut word = NormalizedWord::new(input);
        preprocess(&mut word, ScriptTables::builtin().unwrap().voicing());
        word
    }

    fn voiced_positions(word: &NormalizedWord) -> Vec<usize> {
        word.letters()
            .iter()
            .enumerate()
            .filter(|(_, l)| l.marker == Marker::Voiced)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn t_voicing_always_safe() {
        assert_eq!(voiced_positions(&run("feather")), vec![3, 4]);
        assert_eq!(voiced_positions(&run("altogether")), vec![6, 7]);
    }

    #[test]
    fn t_voicing_is_not_applied_twice() {
        // Matches both "brother" and "other"; only one pair may be voiced.
        assert_eq!(voiced_positions(&run("brotherhood")), vec![3, 4]);
    }

    #[test]
    fn t_voicing_solo() {
        assert_eq!(voiced_positions(&run("that")), vec![0, 1]);
        assert_eq!(voiced_positions(&run("thank")), Vec::<usize>::new());
        assert_eq!(voiced_positions(&run("thatch")), Vec::<usize>::new());
    }

    #[test]
    fn t_voicing_prefix() {
        assert_eq!(voiced_positions(&run("therefore")), vec![0, 1]);
        assert_eq!(voiced_positions(&run("then")), Vec::<usize>::new());
    }

    #[test]
    fn t_voicing_second_occurrence() {
        let lists = VoicingLists {
            special: vec!["thither".to_string()],
            ..Default::default()
        };
        let mut word = NormalizedWord::new("thither");
        preprocess(&mut word, &lists);
        assert_eq!(voiced_positions(&word), vec![3, 4]);
        // The builtin lists reach the same result through "hither".
        assert_eq!(voiced_positions(&run("thither")), vec![3, 4]);
    }

    #[test]
    fn t_palatalization() {
        let markers = |w: &str| {
            run(w)
                .letters()
                .iter()
                .map(|l| l.marker)
                .collect::<Vec<_>>()
        };
        use Marker::*;
        assert_eq!(markers("cyc"), vec![Soft, Plain, Hard]);
        assert_eq!(markers("chic"), vec![DigraphStart, Plain, Plain, Hard]);
        assert_eq!(markers("gig"), vec![Soft, Plain, Plain]);
        assert_eq!(markers("ngh"), vec![Plain, Plain, Plain]);
    }

    #[test]
    fn t_pre_vowel_r_and_consonantal_y() {
        let word = run("rory");
        assert_eq!(word.letters()[0].marker, Marker::PreVowel);
        assert_eq!(word.letters()[2].marker, Marker::PreVowel);
        assert_eq!(word.letters()[3].marker, Marker::Plain);
        let word = run("yay");
        assert_eq!(word.letters()[0].marker, Marker::Consonantal);
        assert_eq!(word.letters()[2].marker, Marker::Plain);
    }

    #[test]
    fn t_q_folds_to_k() {
        assert_eq!(run("quick").text(), "kuick");
        assert_eq!(run("quick").letters()[3].marker, Marker::Hard);
    }

    #[test]
    fn t_suffix_detachment() {
        let notes = run("notes");
        assert_eq!(notes.text(), "not");
        assert_eq!(notes.suffixes(), SuffixFlags { s: true, e: true });

        let bus = run("bus");
        assert_eq!(bus.text(), "bus");
        assert_eq!(bus.suffixes(), SuffixFlags::default());

        let kiss = run("kiss");
        assert_eq!(kiss.text(), "kis");
        assert!(kiss.suffixes().s);

        let tree = run("tree");
        assert_eq!(tree.text(), "tree");
        assert!(!tree.suffixes().e);

        let bye = run("bye");
        assert_eq!(bye.text(), "by");
        assert!(bye.suffixes().e);

        assert!(!run("s").suffixes().s);
        assert!(!run("me").suffixes().e);
    }
}
