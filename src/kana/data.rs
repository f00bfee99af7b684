use crate::kana::{Row, Size, Voicing};

use phf::{Map, phf_map};

/// One cell of the gojūon table as laid out in the hiragana block.
#[derive(Clone, Copy, Debug)]
pub struct KanaCell {
    pub row: Row,
    pub column: u8,
    pub voicing: Voicing,
    pub size: Size,
}

const fn n(row: Row, column: u8) -> KanaCell {
    KanaCell { row, column, voicing: Voicing::Plain, size: Size::Normal }
}

const fn s(row: Row, column: u8) -> KanaCell {
    KanaCell { row, column, voicing: Voicing::Plain, size: Size::Small }
}

const fn d(row: Row, column: u8) -> KanaCell {
    KanaCell { row, column, voicing: Voicing::Dakuten, size: Size::Normal }
}

const fn h(row: Row, column: u8) -> KanaCell {
    KanaCell { row, column, voicing: Voicing::Handakuten, size: Size::Normal }
}

/// First codepoint covered by [`GOJUON`] in the hiragana block (ぁ).
pub const HIRAGANA_BASE: u32 = 0x3041;
/// First codepoint covered by [`GOJUON`] in the katakana block (ァ).
pub const KATAKANA_BASE: u32 = 0x30A1;

/// ぁ (U+3041) through ゖ (U+3096); the katakana block repeats the same layout
/// from ァ (U+30A1) through ヶ (U+30F6).
#[rustfmt::skip]
pub static GOJUON: [KanaCell; 86] = {
    use Row::*;
    [
        s(A, 0), n(A, 0), s(A, 1), n(A, 1), s(A, 2), n(A, 2), s(A, 3), n(A, 3), s(A, 4), n(A, 4),
        n(Ka, 0), d(Ka, 0), n(Ka, 1), d(Ka, 1), n(Ka, 2), d(Ka, 2), n(Ka, 3), d(Ka, 3), n(Ka, 4), d(Ka, 4),
        n(Sa, 0), d(Sa, 0), n(Sa, 1), d(Sa, 1), n(Sa, 2), d(Sa, 2), n(Sa, 3), d(Sa, 3), n(Sa, 4), d(Sa, 4),
        n(Ta, 0), d(Ta, 0), n(Ta, 1), d(Ta, 1), s(Ta, 2), n(Ta, 2), d(Ta, 2), n(Ta, 3), d(Ta, 3), n(Ta, 4), d(Ta, 4),
        n(Na, 0), n(Na, 1), n(Na, 2), n(Na, 3), n(Na, 4),
        n(Ha, 0), d(Ha, 0), h(Ha, 0), n(Ha, 1), d(Ha, 1), h(Ha, 1), n(Ha, 2), d(Ha, 2), h(Ha, 2),
        n(Ha, 3), d(Ha, 3), h(Ha, 3), n(Ha, 4), d(Ha, 4), h(Ha, 4),
        n(Ma, 0), n(Ma, 1), n(Ma, 2), n(Ma, 3), n(Ma, 4),
        s(Ya, 0), n(Ya, 0), s(Ya, 2), n(Ya, 2), s(Ya, 4), n(Ya, 4),
        n(Ra, 0), n(Ra, 1), n(Ra, 2), n(Ra, 3), n(Ra, 4),
        s(Wa, 0), n(Wa, 0), n(Wa, 1), n(Wa, 3), n(Wa, 4),
        n(N, 0),
        d(A, 2), s(Ka, 0), s(Ka, 3),
    ]
};

/// ヷ ヸ ヹ ヺ (U+30F7..U+30FA).
pub static VOICED_WA: [KanaCell; 4] = [
    d(Row::Wa, 0),
    d(Row::Wa, 1),
    d(Row::Wa, 3),
    d(Row::Wa, 4),
];

/// Katakana Phonetic Extensions ㇰ (U+31F0) through ㇿ (U+31FF).
#[rustfmt::skip]
pub static KATAKANA_EXTENSION: [KanaCell; 16] = {
    use Row::*;
    [
        s(Ka, 2), s(Sa, 1), s(Sa, 2), s(Ta, 4), s(Na, 2), s(Ha, 0), s(Ha, 1), s(Ha, 2),
        s(Ha, 3), s(Ha, 4), s(Ma, 2), s(Ra, 0), s(Ra, 1), s(Ra, 2), s(Ra, 3), s(Ra, 4),
    ]
};

/// Narrow katakana → bare wide katakana.
pub static NARROW_TO_WIDE: Map<char, char> = phf_map! {
    'ｦ' => 'ヲ',
    'ｧ' => 'ァ', 'ｨ' => 'ィ', 'ｩ' => 'ゥ', 'ｪ' => 'ェ', 'ｫ' => 'ォ',
    'ｬ' => 'ャ', 'ｭ' => 'ュ', 'ｮ' => 'ョ', 'ｯ' => 'ッ', 'ｰ' => 'ー',
    'ｱ' => 'ア', 'ｲ' => 'イ', 'ｳ' => 'ウ', 'ｴ' => 'エ', 'ｵ' => 'オ',
    'ｶ' => 'カ', 'ｷ' => 'キ', 'ｸ' => 'ク', 'ｹ' => 'ケ', 'ｺ' => 'コ',
    'ｻ' => 'サ', 'ｼ' => 'シ', 'ｽ' => 'ス', 'ｾ' => 'セ', 'ｿ' => 'ソ',
    'ﾀ' => 'タ', 'ﾁ' => 'チ', 'ﾂ' => 'ツ', 'ﾃ' => 'テ', 'ﾄ' => 'ト',
    'ﾅ' => 'ナ', 'ﾆ' => 'ニ', 'ﾇ' => 'ヌ', 'ﾈ' => 'ネ', 'ﾉ' => 'ノ',
    'ﾊ' => 'ハ', 'ﾋ' => 'ヒ', 'ﾌ' => 'フ', 'ﾍ' => 'ヘ', 'ﾎ' => 'ホ',
    'ﾏ' => 'マ', 'ﾐ' => 'ミ', 'ﾑ' => 'ム', 'ﾒ' => 'メ', 'ﾓ' => 'モ',
    'ﾔ' => 'ヤ', 'ﾕ' => 'ユ', 'ﾖ' => 'ヨ',
    'ﾗ' => 'ラ', 'ﾘ' => 'リ', 'ﾙ' => 'ル', 'ﾚ' => 'レ', 'ﾛ' => 'ロ',
    'ﾜ' => 'ワ', 'ﾝ' => 'ン',
};

/// Narrow katakana + dakuten → precomposed wide katakana.
pub static NARROW_DAKUTEN_TO_WIDE: Map<char, char> = phf_map! {
    'ｶ' => 'ガ', 'ｷ' => 'ギ', 'ｸ' => 'グ', 'ｹ' => 'ゲ', 'ｺ' => 'ゴ',
    'ｻ' => 'ザ', 'ｼ' => 'ジ', 'ｽ' => 'ズ', 'ｾ' => 'ゼ', 'ｿ' => 'ゾ',
    'ﾀ' => 'ダ', 'ﾁ' => 'ヂ', 'ﾂ' => 'ヅ', 'ﾃ' => 'デ', 'ﾄ' => 'ド',
    'ﾊ' => 'バ', 'ﾋ' => 'ビ', 'ﾌ' => 'ブ', 'ﾍ' => 'ベ', 'ﾎ' => 'ボ',
    'ﾜ' => 'ヷ', 'ｲ' => 'ヸ', 'ｳ' => 'ヴ', 'ｴ' => 'ヹ', 'ｦ' => 'ヺ',
};

/// Narrow katakana + handakuten → precomposed wide katakana.
pub static NARROW_HANDAKUTEN_TO_WIDE: Map<char, char> = phf_map! {
    'ﾊ' => 'パ', 'ﾋ' => 'ピ', 'ﾌ' => 'プ', 'ﾍ' => 'ペ', 'ﾎ' => 'ポ',
};

/// Wide katakana → narrow katakana, voiced forms decomposed into
/// base + halfwidth voicing mark.
pub static WIDE_TO_NARROW: Map<char, &'static str> = phf_map! {
    'ァ' => "ｧ", 'ィ' => "ｨ", 'ゥ' => "ｩ", 'ェ' => "ｪ", 'ォ' => "ｫ",
    'ャ' => "ｬ", 'ュ' => "ｭ", 'ョ' => "ｮ", 'ッ' => "ｯ", 'ー' => "ｰ",
    'ア' => "ｱ", 'イ' => "ｲ", 'ウ' => "ｳ", 'エ' => "ｴ", 'オ' => "ｵ",
    'カ' => "ｶ", 'キ' => "ｷ", 'ク' => "ｸ", 'ケ' => "ｹ", 'コ' => "ｺ",
    'サ' => "ｻ", 'シ' => "ｼ", 'ス' => "ｽ", 'セ' => "ｾ", 'ソ' => "ｿ",
    'タ' => "ﾀ", 'チ' => "ﾁ", 'ツ' => "ﾂ", 'テ' => "ﾃ", 'ト' => "ﾄ",
    'ナ' => "ﾅ", 'ニ' => "ﾆ", 'ヌ' => "ﾇ", 'ネ' => "ﾈ", 'ノ' => "ﾉ",
    'ハ' => "ﾊ", 'ヒ' => "ﾋ", 'フ' => "ﾌ", 'ヘ' => "ﾍ", 'ホ' => "ﾎ",
    'マ' => "ﾏ", 'ミ' => "ﾐ", 'ム' => "ﾑ", 'メ' => "ﾒ", 'モ' => "ﾓ",
    'ヤ' => "ﾔ", 'ユ' => "ﾕ", 'ヨ' => "ﾖ",
    'ラ' => "ﾗ", 'リ' => "ﾘ", 'ル' => "ﾙ", 'レ' => "ﾚ", 'ロ' => "ﾛ",
    'ワ' => "ﾜ", 'ン' => "ﾝ", 'ヰ' => "ｲ", 'ヱ' => "ｴ", 'ヲ' => "ｦ",
    'ガ' => "ｶﾞ", 'ギ' => "ｷﾞ", 'グ' => "ｸﾞ", 'ゲ' => "ｹﾞ", 'ゴ' => "ｺﾞ",
    'ザ' => "ｻﾞ", 'ジ' => "ｼﾞ", 'ズ' => "ｽﾞ", 'ゼ' => "ｾﾞ", 'ゾ' => "ｿﾞ",
    'ダ' => "ﾀﾞ", 'ヂ' => "ﾁﾞ", 'ヅ' => "ﾂﾞ", 'デ' => "ﾃﾞ", 'ド' => "ﾄﾞ",
    'バ' => "ﾊﾞ", 'ビ' => "ﾋﾞ", 'ブ' => "ﾌﾞ", 'ベ' => "ﾍﾞ", 'ボ' => "ﾎﾞ",
    'パ' => "ﾊﾟ", 'ピ' => "ﾋﾟ", 'プ' => "ﾌﾟ", 'ペ' => "ﾍﾟ", 'ポ' => "ﾎﾟ",
    'ヴ' => "ｳﾞ", 'ヷ' => "ﾜﾞ", 'ヸ' => "ｲﾞ", 'ヹ' => "ｴﾞ", 'ヺ' => "ｦﾞ",
};
