use crate::{
    stage::{Stage, ToWideKatakana},
    testing::stage_contract::StageTestConfig,
    unicode::{hiragana_to_katakana, is_dakuten, is_hiragana, is_narrow_katakana},
};
use std::borrow::Cow;

/// Converts hiragana to wide katakana.
///
/// With `to_wide` set (the default) narrow katakana are widened first. The
/// historical sequences `わ゛ ゐ゛ ゑ゛ を゛` (dakuten in any representation)
/// become `ヷ ヸ ヹ ヺ`; every other hiragana is shifted into the katakana
/// block.
#[derive(Debug, Clone, Copy)]
pub struct ToKatakana {
    pub to_wide: bool,
}

impl Default for ToKatakana {
    fn default() -> Self {
        Self { to_wide: true }
    }
}

#[inline]
fn voiced_wa(c: char) -> Option<char> {
    match c {
        'わ' => Some('ヷ'),
        'ゐ' => Some('ヸ'),
        'ゑ' => Some('ヹ'),
        'を' => Some('ヺ'),
        _ => None,
    }
}

impl Stage for ToKatakana {
    fn name(&self) -> &'static str {
        "to_katakana"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars()
            .any(|c| is_hiragana(c) || (self.to_wide && is_narrow_katakana(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let text = if self.to_wide {
            ToWideKatakana.apply(text)
        } else {
            text
        };
        if !text.chars().any(is_hiragana) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match (voiced_wa(c), chars.peek()) {
                (Some(voiced), Some(&m)) if is_dakuten(m) => {
                    out.push(voiced);
                    chars.next();
                }
                _ => out.push(hiragana_to_katakana(c)),
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for ToKatakana {
    fn samples() -> &'static [&'static str] {
        &["ひらがな", "カタカナ", "ﾊﾝｶｸ", "わ゛を゛", "ゝゞ", "まぜこぜ ﾏｾﾞｺｾﾞ"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["カタカナ", "ヴァイオリン", "漢字 abc", "ー", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ひらがな", "ヒラガナ"),
            ("ぁぃぅぇぉっゃゅょゎゕゖ", "ァィゥェォッャュョヮヵヶ"),
            ("わ゛ゐ\u{3099}ゑﾞを゛", "ヷヸヹヺ"),
            ("ゔぁいおりん", "ヴァイオリン"),
            ("ゝゞゟ", "ヽヾヿ"),
            ("ﾊﾝｶｸとひらがな", "ハンカクトヒラガナ"),
            ("らーめん", "ラーメン"),
            ("か゛", "カ゛"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ToKatakana::default());
    }

    #[test]
    fn test_without_widening_narrow_kana_survive() {
        let stage = ToKatakana { to_wide: false };
        assert_eq!(stage.apply(Cow::Borrowed("ﾊﾝｶｸとひらがな")), "ﾊﾝｶｸトヒラガナ");
        assert!(!stage.needs_apply("ﾊﾝｶｸ"));
    }

    #[test]
    fn test_lone_marks_are_not_shifted() {
        let out = ToKatakana::default().apply(Cow::Borrowed("゛゜\u{3099}"));
        assert_eq!(out, "゛゜\u{3099}");
    }

    #[test]
    fn test_wa_without_mark_is_plain_shift() {
        let out = ToKatakana::default().apply(Cow::Borrowed("わをん"));
        assert_eq!(out, "ワヲン");
    }
}
