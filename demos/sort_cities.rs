use std::error::Error;

use kanasort::{Collator, Jaco, ToKatakana, hiragana, katakana, pipeline, sort};

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=kanasort=trace shows every stage that rewrites text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kanasort=debug")),
        )
        .init();

    // ────────────────────────────────────────────────────────────────
    // NORMALIZATION – script and width
    // ────────────────────────────────────────────────────────────────
    println!("katakana : {}", katakana("ﾌｸｵｶけん と ｷﾀｷｭｳｼｭｳし"));
    // → フクオカケン ト キタキュウシュウシ
    println!("hiragana : {}", hiragana("ヴァイオリンとヷ"));
    // → ゔぁいおりんと わ + U+3099

    let narrow = Jaco::new("はかた").to_katakana().to_narrow_katakana();
    println!("narrow   : {narrow}");
    // → ﾊｶﾀ

    let keep_narrow = Jaco::new("ﾊｶﾀとくるめ").apply(ToKatakana { to_wide: false });
    println!("no widen : {keep_narrow}");
    // → ﾊｶﾀトクルメ

    let combining = pipeline::hiragana_combining();
    println!("{:<9}: {}", combining.name(), combining.run("カ゛ハ゜"));

    // ────────────────────────────────────────────────────────────────
    // NATURAL KANA SORT – Fukuoka prefecture, mixed scripts
    // ────────────────────────────────────────────────────────────────
    let cities = [
        "ふくおかし",
        "キタキュウシュウシ",
        "ｸﾙﾒｼ",
        "おおむたし",
        "いいづかし",
        "だざいふし",
        "たがわし",
        "ちくごし",
        "ちくしのし",
        "ぶぜんし",
    ];
    for city in sort(Some(&cities[..]))? {
        println!("  {city}");
    }

    // ────────────────────────────────────────────────────────────────
    // NUMERALS – by value by default, digit by digit on request
    // ────────────────────────────────────────────────────────────────
    let rooms = ["10ごうしつ", "2ごうしつ", "１ごうしつ", "02ごうしつ"];
    println!("numeric  : {:?}", sort(Some(&rooms[..]))?);
    let plain = Collator::builder().numeric(false).build();
    println!("plain    : {:?}", plain.sort(Some(&rooms[..]))?);

    // a missing collection is an error, not an empty result
    if let Err(e) = sort::<&str>(None) {
        println!("error    : {e}");
    }

    Ok(())
}
