use crate::tables::ScriptTables;
use crate::word::SuffixFlags;
use itertools::Itertools;

/// Swaps in the non-post-vocalic forms and reattaches detached suffixes.
pub fn postprocess(glyphs: &[char], suffixes: SuffixFlags, tables: &ScriptTables) -> String {
    let mut output = glyphs
        .iter()
        .tuple_windows()
        .map(|(cur, next)| match tables.non_post_vocalic(*cur) {
            Some(alternate) if !tables.is_tehta(*next) => alternate,
            _ => *cur,
        })
        .collect::<String>();
    output.extend(glyphs.last());

    if suffixes.e {
        output.push(tables.suffix_e());
    }
    if suffixes.s {
        let suffix = tables.suffix_s_after(output.chars().last());
        output.push(suffix);
    }
    output
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(glyphs: &str, s: bool, e: bool) -> String {
        let glyphs = glyphs.chars().collect::<Vec<_>>();
        postprocess(
            &glyphs,
            SuffixFlags { s, e },
            ScriptTables::builtin().unwrap(),
        )
    }

    #[test]
    fn t_non_post_vocalic_forms() {
        assert_eq!(run("iG", false, false), "iG");
        assert_eq!(run("iz", false, false), "8z");
        assert_eq!(run(",D", false, false), ",D");
        assert_eq!(run(",w", false, false), "kw");
        // The last glyph has nothing after it and stays.
        assert_eq!(run("zi", false, false), "zi");
        // The y series is not a tehta.
        assert_eq!(run("i\u{d8}", false, false), "8\u{d8}");
    }

    #[test]
    fn t_suffix_pairing() {
        assert_eq!(run("7", true, false), "7\u{c5}");
        assert_eq!(run("zw", true, false), "zw\u{c6}");
        assert_eq!(run("j9", true, false), "j9\u{a5}");
        assert_eq!(run("z", true, false), "z_");
        assert_eq!(run("1Y", false, true), "1YO");
        // The s follows the e glyph, which is in no bucket.
        assert_eq!(run("51Y", true, true), "51YO_");
    }

    #[test]
    fn t_exactly_one_suffix_glyph() {
        let suffix_glyphs = ['\u{c5}', '\u{c6}', '\u{a5}', '_'];
        for glyphs in ["7", "q", "l", "x", "`C", "1Y"] {
            let plain = run(glyphs, false, false);
            let with_s = run(glyphs, true, false);
            assert_eq!(with_s.chars().count(), plain.chars().count() + 1);
            assert!(suffix_glyphs.contains(&with_s.chars().last().unwrap()));
        }
    }
}
