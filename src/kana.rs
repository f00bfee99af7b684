//! Codepoint classifier.
//!
//! Maps one resolved character to a structural descriptor: its place in the
//! gojūon table for kana, or its bucket for everything else. Look-back
//! resolution of chôon and iteration marks happens in [`crate::collate`];
//! this module only reports what a character is on its own.

pub mod data;

use crate::unicode::{
    self, digit_value, fullwidth_to_halfwidth, is_choon, is_dakuten, is_handakuten,
    is_katakana_extension, is_plain_iteration_mark, is_voiced_iteration_mark,
};
use data::{
    GOJUON, HIRAGANA_BASE, KATAKANA_BASE, KATAKANA_EXTENSION, KanaCell, NARROW_TO_WIDE, VOICED_WA,
};

/// Consonant row of the fifty-sound table, in conventional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Row {
    A,
    Ka,
    Sa,
    Ta,
    Na,
    Ha,
    Ma,
    Ya,
    Ra,
    Wa,
    /// ん
    N,
}

impl Row {
    /// Whether a kana of this row and column has a dakuten form.
    #[inline]
    pub const fn admits_dakuten(self, column: u8) -> bool {
        match self {
            Row::Ka | Row::Sa | Row::Ta | Row::Ha | Row::Wa => true,
            Row::A => column == 2,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Voicing {
    #[default]
    Plain,
    Dakuten,
    Handakuten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Size {
    Small,
    #[default]
    Normal,
}

/// Script and width of the source character. The declaration order is the
/// tie-break order used by the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
    NarrowKatakana,
    Halfwidth,
    Fullwidth,
    Other,
}

/// How a voicing mark is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkStyle {
    /// U+3099 / U+309A
    Combining,
    /// U+309B / U+309C
    Standalone,
    /// U+FF9E / U+FF9F
    Halfwidth,
}

/// Position of a kana in the fifty-sound table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gojuon {
    pub row: Row,
    pub column: u8,
    pub voicing: Voicing,
    pub script: Script,
    pub size: Size,
}

impl Gojuon {
    fn from_cell(cell: KanaCell, script: Script) -> Self {
        Self {
            row: cell.row,
            column: cell.column,
            voicing: cell.voicing,
            script,
            size: cell.size,
        }
    }

    /// The same kana with a voicing mark applied. Voicing marks stack by
    /// replacement, so the last mark wins.
    #[inline]
    pub fn voiced(self, voicing: Voicing) -> Self {
        Self { voicing, ..self }
    }
}

/// Classification of a single Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Kana(Gojuon),
    VoicingMark(Voicing, MarkStyle),
    Choon(Script),
    IterationMark { voiced: bool, script: Script },
    Digit { value: u8, script: Script },
    /// Lowercase ASCII letter after width and case folding.
    Latin { letter: char, script: Script },
    Other(char),
}

/// Classifies one character in isolation.
pub fn classify(c: char) -> CharClass {
    let cp = c as u32;
    match cp {
        0x3041..=0x3096 => {
            CharClass::Kana(Gojuon::from_cell(GOJUON[(cp - HIRAGANA_BASE) as usize], Script::Hiragana))
        }
        0x30A1..=0x30F6 => {
            CharClass::Kana(Gojuon::from_cell(GOJUON[(cp - KATAKANA_BASE) as usize], Script::Katakana))
        }
        0x30F7..=0x30FA => {
            CharClass::Kana(Gojuon::from_cell(VOICED_WA[(cp - 0x30F7) as usize], Script::Katakana))
        }
        _ if is_katakana_extension(c) => CharClass::Kana(Gojuon::from_cell(
            KATAKANA_EXTENSION[(cp - 0x31F0) as usize],
            Script::Katakana,
        )),
        _ if is_choon(c) => CharClass::Choon(if cp == 0x30FC {
            Script::Katakana
        } else {
            Script::NarrowKatakana
        }),
        _ if is_plain_iteration_mark(c) || is_voiced_iteration_mark(c) => CharClass::IterationMark {
            voiced: is_voiced_iteration_mark(c),
            script: if cp < 0x30A0 {
                Script::Hiragana
            } else {
                Script::Katakana
            },
        },
        _ if is_dakuten(c) => CharClass::VoicingMark(Voicing::Dakuten, mark_style(c)),
        _ if is_handakuten(c) => CharClass::VoicingMark(Voicing::Handakuten, mark_style(c)),
        0xFF66..=0xFF9D => match NARROW_TO_WIDE.get(&c).map(|&wide| classify(wide)) {
            Some(CharClass::Kana(g)) => CharClass::Kana(Gojuon {
                script: Script::NarrowKatakana,
                ..g
            }),
            _ => CharClass::Other(c),
        },
        _ => classify_non_kana(c),
    }
}

fn classify_non_kana(c: char) -> CharClass {
    let script = if c.is_ascii() {
        Script::Halfwidth
    } else {
        Script::Fullwidth
    };
    if let Some(value) = digit_value(c) {
        return CharClass::Digit { value, script };
    }
    if unicode::is_latin(c) {
        return CharClass::Latin {
            letter: fullwidth_to_halfwidth(c).to_ascii_lowercase(),
            script,
        };
    }
    CharClass::Other(c)
}

fn mark_style(c: char) -> MarkStyle {
    match c as u32 {
        0x3099 | 0x309A => MarkStyle::Combining,
        0x309B | 0x309C => MarkStyle::Standalone,
        _ => MarkStyle::Halfwidth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gojuon(c: char) -> Gojuon {
        match classify(c) {
            CharClass::Kana(g) => g,
            other => panic!("{c} classified as {other:?}"),
        }
    }

    #[test]
    fn test_rows_follow_gojuon_order() {
        let heads = ['あ', 'か', 'さ', 'た', 'な', 'は', 'ま', 'や', 'ら', 'わ', 'ん'];
        let rows: Vec<Row> = heads.iter().map(|&c| gojuon(c).row).collect();
        let mut sorted = rows.clone();
        sorted.sort();
        assert_eq!(rows, sorted);
        sorted.dedup();
        assert_eq!(sorted.len(), heads.len());
    }

    #[test]
    fn test_row_is_independent_of_script() {
        for (h, k) in [('き', 'キ'), ('ぽ', 'ポ'), ('ゃ', 'ャ'), ('を', 'ヲ'), ('ん', 'ン')] {
            let (h, k) = (gojuon(h), gojuon(k));
            assert_eq!((h.row, h.column, h.voicing, h.size), (k.row, k.column, k.voicing, k.size));
            assert_eq!(h.script, Script::Hiragana);
            assert_eq!(k.script, Script::Katakana);
        }
    }

    #[test]
    fn test_voicing_levels() {
        assert_eq!(gojuon('は').voicing, Voicing::Plain);
        assert_eq!(gojuon('ば').voicing, Voicing::Dakuten);
        assert_eq!(gojuon('ぱ').voicing, Voicing::Handakuten);
        assert_eq!(gojuon('ヴ'), Gojuon { voicing: Voicing::Dakuten, ..gojuon('ウ') });
        assert_eq!(gojuon('ヺ').row, Row::Wa);
        assert_eq!(gojuon('ヺ').column, 4);
    }

    #[test]
    fn test_small_kana() {
        assert_eq!(gojuon('っ').size, Size::Small);
        assert_eq!(gojuon('っ').row, Row::Ta);
        assert_eq!(gojuon('ヶ').row, Row::Ka);
        assert_eq!(gojuon('ㇰ').size, Size::Small);
        assert_eq!(gojuon('ㇿ').row, Row::Ra);
    }

    #[test]
    fn test_narrow_katakana() {
        let g = gojuon('ｶ');
        assert_eq!(g.script, Script::NarrowKatakana);
        assert_eq!((g.row, g.column), (Row::Ka, 0));
        assert_eq!(gojuon('ｯ').size, Size::Small);
        assert_eq!(classify('ｰ'), CharClass::Choon(Script::NarrowKatakana));
    }

    #[test]
    fn test_every_voicing_representation_has_the_same_level() {
        for c in ['\u{3099}', '゛', 'ﾞ'] {
            assert!(matches!(classify(c), CharClass::VoicingMark(Voicing::Dakuten, _)));
        }
        for c in ['\u{309A}', '゜', 'ﾟ'] {
            assert!(matches!(classify(c), CharClass::VoicingMark(Voicing::Handakuten, _)));
        }
    }

    #[test]
    fn test_marks_and_non_kana() {
        assert_eq!(
            classify('ゞ'),
            CharClass::IterationMark { voiced: true, script: Script::Hiragana }
        );
        assert_eq!(
            classify('ヽ'),
            CharClass::IterationMark { voiced: false, script: Script::Katakana }
        );
        assert_eq!(classify('５'), CharClass::Digit { value: 5, script: Script::Fullwidth });
        assert_eq!(classify('Q'), CharClass::Latin { letter: 'q', script: Script::Halfwidth });
        assert_eq!(classify('ｑ'), CharClass::Latin { letter: 'q', script: Script::Fullwidth });
        assert_eq!(classify('漢'), CharClass::Other('漢'));
        assert_eq!(classify('𩸽'), CharClass::Other('𩸽'));
        assert_eq!(classify('ゟ'), CharClass::Other('ゟ'));
    }

    #[test]
    fn test_admits_dakuten() {
        assert!(Row::Ka.admits_dakuten(0));
        assert!(Row::A.admits_dakuten(2));
        assert!(!Row::A.admits_dakuten(0));
        assert!(!Row::Ma.admits_dakuten(1));
    }
}
