// Codepoint range predicates for every character class the kana engine
// distinguishes. All functions are total over `char`.

/// Fixed distance between a hiragana codepoint and its katakana counterpart.
pub const KANA_SHIFT: u32 = 0x60;

pub const DAKUTEN_COMBINING: char = '\u{3099}';
pub const HANDAKUTEN_COMBINING: char = '\u{309A}';
pub const DAKUTEN: char = '\u{309B}';
pub const HANDAKUTEN: char = '\u{309C}';
pub const NARROW_DAKUTEN: char = '\u{FF9E}';
pub const NARROW_HANDAKUTEN: char = '\u{FF9F}';
pub const CHOON: char = '\u{30FC}';
pub const NARROW_CHOON: char = '\u{FF70}';
pub const GETA: char = '\u{3013}';

// Hiragana block characters with a katakana counterpart: ぁ-ゖ ゝ-ゟ.
#[inline(always)]
pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3041..=0x3096 | 0x309D..=0x309F)
}

// Wide katakana: ァ-ヺ ヽ-ヿ.
#[inline(always)]
pub fn is_katakana(c: char) -> bool {
    matches!(c as u32, 0x30A1..=0x30FA | 0x30FD..=0x30FF)
}

// Katakana Phonetic Extensions (small ㇰ..ㇿ).
#[inline(always)]
pub fn is_katakana_extension(c: char) -> bool {
    matches!(c as u32, 0x31F0..=0x31FF)
}

// ｦ-ﾟ, including the two narrow voicing marks.
#[inline(always)]
pub fn is_narrow_katakana(c: char) -> bool {
    matches!(c as u32, 0xFF66..=0xFF9F)
}

#[inline(always)]
pub fn is_dakuten(c: char) -> bool {
    matches!(c, DAKUTEN_COMBINING | DAKUTEN | NARROW_DAKUTEN)
}

#[inline(always)]
pub fn is_handakuten(c: char) -> bool {
    matches!(c, HANDAKUTEN_COMBINING | HANDAKUTEN | NARROW_HANDAKUTEN)
}

/// Any of the six voicing mark representations.
#[inline(always)]
pub fn is_voicing_mark(c: char) -> bool {
    is_dakuten(c) || is_handakuten(c)
}

#[inline(always)]
pub fn is_choon(c: char) -> bool {
    c == CHOON || c == NARROW_CHOON
}

// ゝ ヽ
#[inline(always)]
pub fn is_plain_iteration_mark(c: char) -> bool {
    matches!(c, '\u{309D}' | '\u{30FD}')
}

// ゞ ヾ
#[inline(always)]
pub fn is_voiced_iteration_mark(c: char) -> bool {
    matches!(c, '\u{309E}' | '\u{30FE}')
}

#[inline(always)]
pub fn is_fullwidth_digit(c: char) -> bool {
    matches!(c as u32, 0xFF10..=0xFF19)
}

/// ASCII or fullwidth decimal digit.
#[inline(always)]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || is_fullwidth_digit(c)
}

/// Numeric value of an ASCII or fullwidth decimal digit.
#[inline(always)]
pub fn digit_value(c: char) -> Option<u8> {
    match c as u32 {
        cp @ 0x30..=0x39 => Some((cp - 0x30) as u8),
        cp @ 0xFF10..=0xFF19 => Some((cp - 0xFF10) as u8),
        _ => None,
    }
}

#[inline(always)]
pub fn is_fullwidth_alpha(c: char) -> bool {
    matches!(c as u32, 0xFF21..=0xFF3A | 0xFF41..=0xFF5A)
}

/// ASCII or fullwidth Latin letter.
#[inline(always)]
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || is_fullwidth_alpha(c)
}

/// Scalar values outside the Basic Multilingual Plane (UTF-16 surrogate pairs).
#[inline(always)]
pub fn is_supplementary(c: char) -> bool {
    c as u32 > 0xFFFF
}

/// Fullwidth ASCII variants (U+FF01..U+FF5E) to ASCII.
#[inline(always)]
pub fn fullwidth_to_halfwidth(c: char) -> char {
    let cp = c as u32;
    if (0xFF01..=0xFF5E).contains(&cp) {
        char::from_u32(cp - 0xFEE0).unwrap_or(c)
    } else {
        c
    }
}

/// Shifts a hiragana codepoint into the katakana block; anything else is
/// returned unchanged.
#[inline(always)]
pub fn hiragana_to_katakana(c: char) -> char {
    if is_hiragana(c) {
        char::from_u32(c as u32 + KANA_SHIFT).unwrap_or(c)
    } else {
        c
    }
}

/// Inverse of [`hiragana_to_katakana`] for the katakana that have a
/// single-codepoint hiragana counterpart (ヷ-ヺ excluded).
#[inline(always)]
pub fn katakana_to_hiragana(c: char) -> char {
    if matches!(c as u32, 0x30A1..=0x30F6 | 0x30FD..=0x30FF) {
        char::from_u32(c as u32 - KANA_SHIFT).unwrap_or(c)
    } else {
        c
    }
}
