//! Script/width normalization stages.
//!
//! Every transformation of the normalizer is a [`Stage`]: a stateless value
//! that rewrites a whole string. Stages work on `Cow<str>` so that text which
//! needs no rewriting is handed back without allocating.
//!
//! Stages that rewrite multi-character sequences (voiced pairs, historical
//! digraphs) resolve those sequences in the same scan that performs the
//! single-character mapping, looking one character ahead. A sequence is
//! therefore never split by an earlier single-character pass.

pub mod combinate;
pub mod to_hiragana;
pub mod to_katakana;
pub mod to_narrow_katakana;
pub mod to_wide_katakana;

pub use combinate::Combinate;
pub use to_hiragana::ToHiragana;
pub use to_katakana::ToKatakana;
pub use to_narrow_katakana::ToNarrowKatakana;
pub use to_wide_katakana::ToWideKatakana;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in trace events.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returns `true` exactly when [`Stage::apply`] would
    /// change the text.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Returns the input untouched (and
    /// still borrowed) when nothing needs rewriting.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
