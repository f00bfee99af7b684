use crate::{
    stage::{Combinate, Stage, ToWideKatakana},
    testing::stage_contract::StageTestConfig,
    unicode::{DAKUTEN, DAKUTEN_COMBINING, HANDAKUTEN, is_narrow_katakana, katakana_to_hiragana},
};
use std::borrow::Cow;

/// Converts katakana (wide and narrow) to hiragana.
///
/// `ヷ ヸ ヹ ヺ` have no precomposed hiragana and decompose to
/// `わ ゐ ゑ を` + combining dakuten. With `combinate` set, standalone voicing
/// marks are folded into their combining forms afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToHiragana {
    pub combinate: bool,
}

#[inline]
fn unvoiced_wa(c: char) -> Option<char> {
    match c {
        'ヷ' => Some('わ'),
        'ヸ' => Some('ゐ'),
        'ヹ' => Some('ゑ'),
        'ヺ' => Some('を'),
        _ => None,
    }
}

#[inline(always)]
fn is_target(c: char) -> bool {
    is_narrow_katakana(c) || unvoiced_wa(c).is_some() || katakana_to_hiragana(c) != c
}

impl Stage for ToHiragana {
    fn name(&self) -> &'static str {
        "to_hiragana"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars()
            .any(|c| is_target(c) || (self.combinate && (c == DAKUTEN || c == HANDAKUTEN)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let text = ToWideKatakana.apply(text);
        let text = if text.chars().any(is_target) {
            let mut out = String::with_capacity(text.len() + 3);
            for c in text.chars() {
                match unvoiced_wa(c) {
                    Some(base) => {
                        out.push(base);
                        out.push(DAKUTEN_COMBINING);
                    }
                    None => out.push(katakana_to_hiragana(c)),
                }
            }
            Cow::Owned(out)
        } else {
            text
        };
        if self.combinate {
            Combinate.apply(text)
        } else {
            text
        }
    }
}

impl StageTestConfig for ToHiragana {
    fn samples() -> &'static [&'static str] {
        &["カタカナ", "ひらがな", "ﾊﾝｶｸ", "ヷヺ", "ヽヾ", "ラーメン"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["ひらがな", "か゛", "ー", "漢字 abc", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("カタカナ", "かたかな"),
            ("ァィゥェォッャュョヮヵヶ", "ぁぃぅぇぉっゃゅょゎゕゖ"),
            ("ヷヸヹヺ", "わ\u{3099}ゐ\u{3099}ゑ\u{3099}を\u{3099}"),
            ("ヴァイオリン", "ゔぁいおりん"),
            ("ヽヾヿ", "ゝゞゟ"),
            ("ｶﾞｯｺｳ", "がっこう"),
            ("ﾜﾞ", "わ\u{3099}"),
            ("ラーメン", "らーめん"),
            ("ｱﾞ", "あ゛"),
        ]
    }
}
