use crate::{
    kana::data::WIDE_TO_NARROW,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{
        DAKUTEN, DAKUTEN_COMBINING, HANDAKUTEN, HANDAKUTEN_COMBINING, NARROW_DAKUTEN,
        NARROW_HANDAKUTEN,
    },
};
use std::borrow::Cow;

/// Converts wide katakana to narrow (halfwidth) katakana.
///
/// Voiced katakana are split into the bare narrow kana and a halfwidth
/// voicing mark (`ガ` → `ｶﾞ`, `ポ` → `ﾎﾟ`). Combining and standalone voicing
/// marks become their halfwidth forms. Small katakana without a narrow form
/// (`ヮ ヵ ヶ`) stay wide.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToNarrowKatakana;

#[inline(always)]
fn is_target(c: char) -> bool {
    matches!(c, DAKUTEN | DAKUTEN_COMBINING | HANDAKUTEN | HANDAKUTEN_COMBINING)
        || WIDE_TO_NARROW.contains_key(&c)
}

impl Stage for ToNarrowKatakana {
    fn name(&self) -> &'static str {
        "to_narrow_katakana"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_target)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        // Voiced forms expand to two narrow characters of the same byte width.
        let mut out = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            match c {
                DAKUTEN | DAKUTEN_COMBINING => out.push(NARROW_DAKUTEN),
                HANDAKUTEN | HANDAKUTEN_COMBINING => out.push(NARROW_HANDAKUTEN),
                _ => match WIDE_TO_NARROW.get(&c) {
                    Some(narrow) => out.push_str(narrow),
                    None => out.push(c),
                },
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for ToNarrowKatakana {
    fn samples() -> &'static [&'static str] {
        &["ガギグゲゴ", "パーティー", "ｶﾀｶﾅ", "ひらがな", "ヷヸヹヺ", "テスト123"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["ｶﾞｷﾞ", "ひらがな", "ヮヵヶ", "漢字 abc", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ガ", "ｶﾞ"),
            ("パピプペポ", "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ"),
            ("ヴァイオリン", "ｳﾞｧｲｵﾘﾝ"),
            ("ヷヸヹヺ", "ﾜﾞｲﾞｴﾞｦﾞ"),
            ("ヰヱ", "ｲｴ"),
            ("コンピューター", "ｺﾝﾋﾟｭｰﾀｰ"),
            ("ア゛イ\u{3099}ウ゜エ\u{309A}", "ｱﾞｲﾞｳﾟｴﾟ"),
            ("ひらがなのか゛", "ひらがなのかﾞ"),
        ]
    }
}
