mod prop_tests {
    use crate::{Collator, Jaco, compare, hiragana, katakana, sort, unicode::is_narrow_katakana};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    // Hiragana, katakana, narrow katakana, marks, digits, latin and a few
    // outsiders (kanji, geta, an astral scalar).
    const KANA_MIX: &str = "[ぁ-ゖゝゞァ-ヺーヽヾｦ-ﾟ゛゜0-9０-９a-zA-Zａ-ｚ漢〓😁]{0,24}";
    const PURE_KANA: &str = "[ぁ-ゖァ-ヶ]{0,32}";

    proptest! {
        #[test]
        fn wide_katakana_idempotent(s in KANA_MIX) {
            let once = Jaco::new(s.as_str()).to_wide_katakana().into_string();
            let twice = Jaco::new(once.as_str()).to_wide_katakana().into_string();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn narrow_katakana_idempotent(s in KANA_MIX) {
            let once = Jaco::new(s.as_str()).to_narrow_katakana().into_string();
            let twice = Jaco::new(once.as_str()).to_narrow_katakana().into_string();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn katakana_idempotent(s in KANA_MIX) {
            let once = katakana(&s);
            prop_assert_eq!(katakana(&once), once);
        }

        #[test]
        fn hiragana_round_trips_through_katakana(s in PURE_KANA) {
            prop_assert_eq!(katakana(&hiragana(&s)), katakana(&s));
        }

        #[test]
        fn katakana_output_has_no_narrow_kana(s in KANA_MIX) {
            let out = katakana(&s);
            prop_assert!(!out.chars().any(is_narrow_katakana));
        }

        #[test]
        fn compare_is_antisymmetric(a in KANA_MIX, b in KANA_MIX) {
            prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        }

        #[test]
        fn compare_equal_only_for_identical(a in KANA_MIX, b in KANA_MIX) {
            prop_assert_eq!(compare(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn compare_is_transitive(a in KANA_MIX, b in KANA_MIX, c in KANA_MIX) {
            let mut v = [a, b, c];
            v.sort_by(|x, y| compare(x, y));
            prop_assert_ne!(compare(&v[0], &v[1]), Ordering::Greater);
            prop_assert_ne!(compare(&v[1], &v[2]), Ordering::Greater);
            prop_assert_ne!(compare(&v[0], &v[2]), Ordering::Greater);
        }

        #[test]
        fn sort_is_ordered_permutation(v in prop::collection::vec(KANA_MIX, 0..16)) {
            let before = v.clone();
            let sorted = sort(Some(&v[..])).unwrap();
            prop_assert_eq!(&v, &before);
            prop_assert!(sorted.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater));

            let mut expected = v.clone();
            expected.sort();
            let mut got = sorted.clone();
            got.sort();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn sort_matches_pairwise_compare(v in prop::collection::vec(KANA_MIX, 0..16)) {
            let tagged: Vec<(String, usize)> = v.iter().cloned().zip(0..).collect();
            let mut expected = tagged.clone();
            expected.sort_by(|(a, i), (b, j)| compare(a, b).then(i.cmp(j)));

            let sorted = sort(Some(&v[..])).unwrap();
            let order: Vec<&str> = expected.iter().map(|(s, _)| s.as_str()).collect();
            prop_assert_eq!(sorted, order);
        }

        #[test]
        fn numeric_off_is_still_total(a in "[0-9あ]{0,8}", b in "[0-9あ]{0,8}") {
            let plain = Collator::builder().numeric(false).build();
            prop_assert_eq!(plain.compare(&a, &b) == Ordering::Equal, a == b);
            prop_assert_eq!(plain.compare(&a, &b), plain.compare(&b, &a).reverse());
        }
    }
}
