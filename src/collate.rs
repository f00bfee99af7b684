//! Collation key builder.
//!
//! A [`CollationKey`] is the sequence of [`SortToken`]s for one string. Keys
//! compare level by level over the whole sequence, in the manner of a
//! multi-level collation:
//!
//! 1. primary weights (bucket, then row/column, numeral value or letter),
//!    a strict prefix sorting first
//! 2. voicing
//! 3. form (chôon < small kana < iteration mark < normal kana)
//! 4. script and width
//! 5. digit count of numerals, so `7` < `007` but `007` < `７`
//!
//! Two strings whose keys are equal are ordered by their raw codepoints; that
//! last step lives in [`crate::sort`].

use crate::{
    kana::{CharClass, Gojuon, MarkStyle, Row, Script, Size, Voicing, classify},
    unicode::{CHOON, DAKUTEN, GETA, HANDAKUTEN, is_supplementary},
};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Primary weight. Variant order is the bucket order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primary {
    Kana { row: Row, column: u8 },
    Number(Numeral),
    Latin(char),
    /// Supplementary-plane scalar values (emoji, CJK extension ideographs).
    Astral(char),
    /// Everything else in the BMP: ideographs, symbols, punctuation, spaces.
    Other(char),
    /// 〓, the placeholder for characters that cannot be represented.
    Geta,
}

/// Value of a digit run, kept as its significant decimal digits so that runs
/// of any length compare by magnitude without overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Numeral {
    digits: SmallVec<[u8; 8]>,
}

impl Numeral {
    fn push(&mut self, digit: u8) {
        if self.digits.is_empty() && digit == 0 {
            return;
        }
        self.digits.push(digit);
    }

    /// The value, when it fits in a `u128`.
    pub fn value(&self) -> Option<u128> {
        self.digits.iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u128::from(d))
        })
    }
}

impl Ord for Numeral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Numeral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tertiary weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Form {
    Choon,
    Small,
    Iteration,
    Normal,
}

/// The atomic comparable unit of a collation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortToken {
    pub primary: Primary,
    pub voicing: Voicing,
    pub form: Form,
    pub script: Script,
    /// Digits in the original run; 1 for every other unit.
    pub digits: usize,
}

impl SortToken {
    fn kana(g: Gojuon) -> Self {
        Self {
            primary: Primary::Kana {
                row: g.row,
                column: g.column,
            },
            voicing: g.voicing,
            form: match g.size {
                Size::Small => Form::Small,
                Size::Normal => Form::Normal,
            },
            script: g.script,
            digits: 1,
        }
    }

    fn other(c: char) -> Self {
        let primary = if c == GETA {
            Primary::Geta
        } else if is_supplementary(c) {
            Primary::Astral(c)
        } else {
            Primary::Other(c)
        };
        Self {
            primary,
            voicing: Voicing::Plain,
            form: Form::Normal,
            script: Script::Other,
            digits: 1,
        }
    }

    /// A mark with nothing to attach to. Every encoding of the same mark
    /// shares one primary; the encoding only shows at the script level.
    fn orphan_mark(canonical: char, voicing: Voicing, script: Script) -> Self {
        Self {
            primary: Primary::Other(canonical),
            voicing,
            form: Form::Normal,
            script,
            digits: 1,
        }
    }

    #[inline]
    pub fn is_kana(&self) -> bool {
        matches!(self.primary, Primary::Kana { .. })
    }
}

/// Ordered token sequence for one string. Pure data; the source string is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CollationKey {
    tokens: Vec<SortToken>,
}

impl CollationKey {
    /// Builds a key with digit runs collapsed into numerals.
    pub fn new(text: &str) -> Self {
        KeyBuilder::new(true).build(text)
    }

    /// Builds a key, collapsing digit runs only when `numeric` is set.
    pub fn with_numeric(text: &str, numeric: bool) -> Self {
        KeyBuilder::new(numeric).build(text)
    }

    pub fn tokens(&self) -> &[SortToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.tokens.as_slice(), other.tokens.as_slice());
        compare_level(a, b, |t| &t.primary)
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| compare_level(a, b, |t| t.voicing))
            .then_with(|| compare_level(a, b, |t| t.form))
            .then_with(|| compare_level(a, b, |t| t.script))
            .then_with(|| compare_level(a, b, |t| t.digits))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// First difference of one level over the common prefix.
fn compare_level<'t, K: Ord + 't>(
    a: &'t [SortToken],
    b: &'t [SortToken],
    weight: impl Fn(&'t SortToken) -> K,
) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| weight(x).cmp(&weight(y)))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Single-pass scanner. `last_kana` is the nearest genuine kana seen so far;
/// chôon and iteration marks resolve against it and never update it.
struct KeyBuilder {
    numeric: bool,
    tokens: Vec<SortToken>,
    last_kana: Option<Gojuon>,
    run: Option<DigitRun>,
}

struct DigitRun {
    numeral: Numeral,
    count: usize,
    script: Script,
}

impl KeyBuilder {
    fn new(numeric: bool) -> Self {
        Self {
            numeric,
            tokens: Vec::new(),
            last_kana: None,
            run: None,
        }
    }

    fn build(mut self, text: &str) -> CollationKey {
        self.tokens.reserve(text.len() / 3 + 1);
        for c in text.chars() {
            let class = classify(c);
            if !matches!(class, CharClass::Digit { .. }) {
                self.flush_run();
            }
            match class {
                CharClass::Kana(g) => {
                    self.tokens.push(SortToken::kana(g));
                    self.last_kana = Some(g);
                }
                CharClass::VoicingMark(voicing, style) => {
                    if let Some(token) = self.tokens.last_mut().filter(|t| t.is_kana()) {
                        token.voicing = voicing;
                    } else {
                        let canonical = match voicing {
                            Voicing::Handakuten => HANDAKUTEN,
                            _ => DAKUTEN,
                        };
                        self.tokens
                            .push(SortToken::orphan_mark(canonical, Voicing::Plain, mark_script(style)));
                    }
                }
                CharClass::Choon(script) => {
                    let token = match self.last_kana {
                        Some(g) => choon_token(g),
                        None => SortToken::orphan_mark(CHOON, Voicing::Plain, script),
                    };
                    self.tokens.push(token);
                }
                CharClass::IterationMark { voiced, script } => {
                    let token = match self.last_kana {
                        Some(g) => iteration_token(g, voiced),
                        None => {
                            let voicing = if voiced { Voicing::Dakuten } else { Voicing::Plain };
                            SortToken::orphan_mark(ITERATION, voicing, script)
                        }
                    };
                    self.tokens.push(token);
                }
                CharClass::Digit { value, script } => self.push_digit(value, script),
                CharClass::Latin { letter, script } => self.tokens.push(SortToken {
                    primary: Primary::Latin(letter),
                    voicing: Voicing::Plain,
                    form: Form::Normal,
                    script,
                    digits: 1,
                }),
                CharClass::Other(c) => self.tokens.push(SortToken::other(c)),
            }
        }
        self.flush_run();
        CollationKey {
            tokens: self.tokens,
        }
    }

    fn push_digit(&mut self, value: u8, script: Script) {
        let run = self.run.get_or_insert_with(|| DigitRun {
            numeral: Numeral::default(),
            count: 0,
            script,
        });
        run.numeral.push(value);
        run.count += 1;
        run.script = run.script.max(script);
        if !self.numeric {
            self.flush_run();
        }
    }

    fn flush_run(&mut self) {
        if let Some(run) = self.run.take() {
            self.tokens.push(SortToken {
                primary: Primary::Number(run.numeral),
                voicing: Voicing::Plain,
                form: Form::Normal,
                script: run.script,
                digits: run.count,
            });
        }
    }
}

/// Shared primary of ゝ ゞ ヽ ヾ without a preceding kana.
const ITERATION: char = '\u{309D}';

fn mark_script(style: MarkStyle) -> Script {
    match style {
        MarkStyle::Halfwidth => Script::Halfwidth,
        MarkStyle::Standalone => Script::Fullwidth,
        MarkStyle::Combining => Script::Other,
    }
}

/// ー takes the vowel of the preceding kana: the あ row at that kana's
/// column, except after ん which it prolongs as is.
fn choon_token(g: Gojuon) -> SortToken {
    let (row, column) = match g.row {
        Row::N => (Row::N, 0),
        _ => (Row::A, g.column),
    };
    SortToken {
        primary: Primary::Kana { row, column },
        voicing: Voicing::Plain,
        form: Form::Choon,
        script: g.script,
        digits: 1,
    }
}

fn iteration_token(g: Gojuon, voiced: bool) -> SortToken {
    let voicing = if voiced && g.row.admits_dakuten(g.column) {
        Voicing::Dakuten
    } else {
        Voicing::Plain
    };
    SortToken {
        primary: Primary::Kana {
            row: g.row,
            column: g.column,
        },
        voicing,
        form: Form::Iteration,
        script: g.script,
        digits: 1,
    }
}
