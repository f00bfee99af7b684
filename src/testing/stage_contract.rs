use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["ひらがな", "カタカナ", "ﾊﾝｶｸ", "Hello World 123", ""]
    }

    /// Samples that must pass through unchanged and still borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "test123", "漢字", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() changes text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives mixed-script and astral input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        if stage.needs_apply(&text) {
            text = stage.apply(text);
            assert!(matches!(text, Cow::Owned(_)));
        } else {
            let old_ptr = text.as_ref() as *const str;
            text = stage.apply(text);
            assert_eq!(old_ptr, text.as_ref() as *const str);
        }

        // Second pass must never allocate again.
        let second = stage.apply(Cow::Borrowed(text.as_ref()));
        assert!(
            matches!(second, Cow::Borrowed(_)),
            "zero-copy violated on second pass of `{}` (input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let original_ptr = pass_through as *const str;
        let text = stage.apply(Cow::Borrowed(pass_through));
        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            original_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample `{pass_through}`"
        );
    }

    for &(input, expected) in S::should_transform() {
        let text = stage.apply(Cow::Borrowed(input));
        assert_eq!(text.as_ref(), expected, "`{}` on `{input}`", stage.name());
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|&(input, _)| input));
    for input in inputs {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(once, twice, "`{}` not idempotent on `{input}`", stage.name());
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let must_not_touch = ["", "hello", "world123", " !@#"];
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_pass_through().iter().copied())
        .chain(S::should_transform().iter().map(|&(input, _)| input))
        .chain(must_not_touch);
    for input in inputs {
        let predicted = stage.needs_apply(input);
        // Owned input so that the comparison is purely semantic.
        let output = stage.apply(Cow::Owned(input.to_owned()));
        let actually_changes = output != input;
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on `{input}`\n\
             predicted: {predicted}\n\
             actual   : {actually_changes} (output = {output:?})",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
    let ascii = "hello world 123 !@#";
    assert_eq!(stage.apply(Cow::Borrowed(ascii)).as_ref(), ascii);
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 𩸽 😁 〓 ｶﾞ ゛゜\u{3099}\u{309A} ﾞﾟ ゝゞヽヾ ー ㇰ",
    ));
}
