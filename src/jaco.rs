//! Chainable script/width normalizer.
//!
//! ```
//! use kanasort::Jaco;
//!
//! let s = Jaco::new("ｶﾞｯｺｳとがっこう").to_hiragana().into_string();
//! assert_eq!(s, "がっこうとがっこう");
//! ```

use crate::{
    process::run_stage,
    stage::{Combinate, Stage, ToHiragana, ToKatakana, ToNarrowKatakana, ToWideKatakana},
};
use std::{borrow::Cow, fmt};

/// A string buffer transformed in place by chained conversions.
///
/// Every conversion consumes and returns the value, so calls chain; the
/// buffer stays borrowed until a conversion actually rewrites it.
/// Conversions with a parameter come in a default form and a `_with` form;
/// any other stage runs through [`Jaco::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Jaco<'a> {
    text: Cow<'a, str>,
}

impl<'a> Jaco<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into() }
    }

    /// Runs an arbitrary stage over the buffer.
    #[inline]
    pub fn apply<S: Stage>(self, stage: S) -> Self {
        Self {
            text: run_stage(&stage, self.text),
        }
    }

    /// Standalone voicing marks → combining voicing marks.
    pub fn combinate(self) -> Self {
        self.apply(Combinate)
    }

    /// Katakana → hiragana, leaving standalone voicing marks as they are.
    pub fn to_hiragana(self) -> Self {
        self.apply(ToHiragana::default())
    }

    /// Katakana → hiragana; with `combinate` the standalone voicing marks
    /// become combining ones.
    pub fn to_hiragana_with(self, combinate: bool) -> Self {
        self.apply(ToHiragana { combinate })
    }

    /// Hiragana → wide katakana, widening narrow katakana first.
    pub fn to_katakana(self) -> Self {
        self.apply(ToKatakana::default())
    }

    /// Hiragana → katakana; narrow katakana are widened only with `to_wide`.
    pub fn to_katakana_with(self, to_wide: bool) -> Self {
        self.apply(ToKatakana { to_wide })
    }

    pub fn to_narrow_katakana(self) -> Self {
        self.apply(ToNarrowKatakana)
    }

    pub fn to_wide_katakana(self) -> Self {
        self.apply(ToWideKatakana)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_cow(self) -> Cow<'a, str> {
        self.text
    }

    pub fn into_string(self) -> String {
        self.text.into_owned()
    }
}

impl AsRef<str> for Jaco<'_> {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Jaco<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Jaco<'_>> for String {
    fn from(jaco: Jaco<'_>) -> Self {
        jaco.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaining() {
        let s = Jaco::new("ひらがな").to_katakana().to_narrow_katakana();
        assert_eq!(s.as_str(), "ﾋﾗｶﾞﾅ");
        let s = s.to_wide_katakana().to_hiragana();
        assert_eq!(s.to_string(), "ひらがな");
    }

    #[test]
    fn test_stays_borrowed_until_rewritten() {
        let input = "漢字";
        let jaco = Jaco::new(input).to_hiragana().combinate().to_wide_katakana();
        assert!(matches!(jaco.into_cow(), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn test_stage_parameters_via_apply() {
        let keep_narrow = Jaco::new("ﾊﾝｶｸとひらがな").apply(ToKatakana { to_wide: false });
        assert_eq!(keep_narrow.as_str(), "ﾊﾝｶｸトヒラガナ");

        let combined = Jaco::new("ハ゜").apply(ToHiragana { combinate: true });
        assert_eq!(String::from(combined), "は\u{309A}");
    }

    #[test]
    fn test_parameterised_conversions() {
        let s = Jaco::new("ﾊﾝｶｸとひらがな").to_katakana_with(false);
        assert_eq!(s.as_str(), "ﾊﾝｶｸトヒラガナ");
        let s = Jaco::new("ﾊﾝｶｸとひらがな").to_katakana_with(true);
        assert_eq!(s.as_str(), "ハンカクトヒラガナ");

        let s = Jaco::new("カ゛ハ゜").to_hiragana_with(true);
        assert_eq!(s.as_str(), "か\u{3099}は\u{309A}");
        let s = Jaco::new("カ゛ハ゜").to_hiragana_with(false);
        assert_eq!(s.as_str(), "か゛は゜");
    }

    #[test]
    fn test_combinate_is_script_independent() {
        let s = Jaco::new("カ゛か゛").combinate().into_string();
        assert_eq!(s, "カ\u{3099}か\u{3099}");
    }

    #[test]
    fn test_owned_input() {
        let s = Jaco::new(String::from("ｱｲｳ")).to_wide_katakana();
        assert_eq!(s.as_ref(), "アイウ");
    }
}
