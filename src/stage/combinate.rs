use crate::{
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{DAKUTEN, DAKUTEN_COMBINING, HANDAKUTEN, HANDAKUTEN_COMBINING},
};
use std::borrow::Cow;

/// Replaces the standalone (spacing) voicing marks `゛` `゜` with their
/// combining forms U+3099 / U+309A. Script independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Combinate;

impl Stage for Combinate {
    fn name(&self) -> &'static str {
        "combinate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(|c| c == DAKUTEN || c == HANDAKUTEN)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(
            text.chars()
                .map(|c| match c {
                    DAKUTEN => DAKUTEN_COMBINING,
                    HANDAKUTEN => HANDAKUTEN_COMBINING,
                    _ => c,
                })
                .collect(),
        )
    }
}

impl StageTestConfig for Combinate {
    fn samples() -> &'static [&'static str] {
        &["か゛", "は゜", "ｶﾞ", "ガ", "\u{3099}"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["か\u{3099}", "ｶﾞ", "がぎぐ", "abc", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("か゛", "か\u{3099}"),
            ("ハ゜", "ハ\u{309A}"),
            ("゛゜", "\u{3099}\u{309A}"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Combinate);
    }

    #[test]
    fn test_halfwidth_marks_are_left_alone() {
        let out = Combinate.apply(Cow::Borrowed("ｶﾞ゛"));
        assert_eq!(out, "ｶﾞ\u{3099}");
    }
}
