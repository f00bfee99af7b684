//! Japanese kana normalization and natural kana sort.
//!
//! ```
//! assert_eq!(kanasort::katakana("ひらがなとﾊﾝｶｸ"), "ヒラガナトハンカク");
//! assert_eq!(kanasort::hiragana("カタカナ"), "かたかな");
//!
//! let sorted = kanasort::sort(Some(&["10ぱ", "2ぱ", "あー", "あい"][..])).unwrap();
//! assert_eq!(sorted, ["あー", "あい", "2ぱ", "10ぱ"]);
//! ```

pub mod collate;
pub mod jaco;
pub mod kana;
pub mod pipeline;
pub mod process;
pub mod sort;
pub mod stage;
pub mod testing;
pub mod unicode;

pub use collate::{CollationKey, SortToken};
pub use jaco::Jaco;
pub use kana::{CharClass, Gojuon, classify};
pub use pipeline::Pipeline;
pub use sort::{Collator, SortError};
pub use stage::{Combinate, Stage, ToHiragana, ToKatakana, ToNarrowKatakana, ToWideKatakana};

use std::cmp::Ordering;

/// Wide katakana, narrow katakana widened first.
pub fn katakana(text: &str) -> String {
    Jaco::new(text).to_katakana().into_string()
}

/// Hiragana, standalone voicing marks left as they are.
pub fn hiragana(text: &str) -> String {
    Jaco::new(text).to_hiragana().into_string()
}

/// Stable natural kana sort with the default [`Collator`].
pub fn sort<S: AsRef<str> + Clone>(strings: Option<&[S]>) -> Result<Vec<S>, SortError> {
    Collator::default().sort(strings)
}

/// Natural kana order of two strings with the default [`Collator`].
pub fn compare(a: &str, b: &str) -> Ordering {
    Collator::default().compare(a, b)
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
