use crate::{
    kana::data::{NARROW_DAKUTEN_TO_WIDE, NARROW_HANDAKUTEN_TO_WIDE, NARROW_TO_WIDE},
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{
        DAKUTEN, HANDAKUTEN, NARROW_DAKUTEN, NARROW_HANDAKUTEN, is_dakuten, is_handakuten,
        is_narrow_katakana,
    },
};
use std::borrow::Cow;

/// Converts narrow (halfwidth) katakana to wide katakana.
///
/// A narrow katakana followed by a voicing mark in any representation
/// becomes the precomposed wide character when one exists:
///
/// - `ｶﾞ` → `ガ`, `ﾊﾟ` → `パ`, `ｳﾞ` → `ヴ`, `ﾜﾞ` → `ヷ`
/// - `ｶ゛` and `ｶ\u{3099}` → `ガ`
///
/// Without a precomposed target the kana is widened on its own and a narrow
/// voicing mark becomes the standalone one (`ｱﾞ` → `ア゛`).
///
/// Idempotent on wide input; hiragana and non-kana pass through.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToWideKatakana;

impl Stage for ToWideKatakana {
    fn name(&self) -> &'static str {
        "to_wide_katakana"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_narrow_katakana)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if !is_narrow_katakana(c) {
                out.push(c);
                continue;
            }
            let composed = match chars.peek() {
                Some(&m) if is_dakuten(m) => NARROW_DAKUTEN_TO_WIDE.get(&c),
                Some(&m) if is_handakuten(m) => NARROW_HANDAKUTEN_TO_WIDE.get(&c),
                _ => None,
            };
            match composed {
                Some(&wide) => {
                    out.push(wide);
                    chars.next();
                }
                None => out.push(widen(c)),
            }
        }
        Cow::Owned(out)
    }
}

#[inline]
fn widen(c: char) -> char {
    match c {
        NARROW_DAKUTEN => DAKUTEN,
        NARROW_HANDAKUTEN => HANDAKUTEN,
        _ => NARROW_TO_WIDE.get(&c).copied().unwrap_or(c),
    }
}

impl StageTestConfig for ToWideKatakana {
    fn samples() -> &'static [&'static str] {
        &["ｶﾞｷﾞｸﾞ", "ﾊﾟﾋﾟﾌﾟ ﾍﾞﾎﾞ", "ｱｲｳｴｵ", "カタカナ", "ﾜﾞｲﾞｳﾞｴﾞｦﾞ", "ﾃｽﾄ123"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["カタカナ", "ひらがな", "ガギグ", "abc 123", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ｶﾞ", "ガ"),
            ("ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ", "パピプペポ"),
            ("ｳﾞｧｲｵﾘﾝ", "ヴァイオリン"),
            ("ﾜﾞｲﾞｴﾞｦﾞ", "ヷヸヹヺ"),
            ("ｶ゛ｷ\u{3099}", "ガギ"),
            ("ｱﾞ", "ア゛"),
            ("ﾏﾟ", "マ゜"),
            ("ｷｬｯﾁｰ", "キャッチー"),
            ("ｺﾝﾋﾟｭｰﾀｰ", "コンピューター"),
            ("ひらがなとﾊﾝｶｸ", "ひらがなとハンカク"),
        ]
    }
}
