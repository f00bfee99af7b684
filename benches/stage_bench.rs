use std::{borrow::Cow, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kanasort::{Combinate, Jaco, ToHiragana, ToKatakana, ToNarrowKatakana, ToWideKatakana, stage::Stage};

const SAMPLES: &[(&str, &str)] = &[
    // narrow katakana with voiced pairs
    ("narrow", "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ ｶﾞｯｺｳ ｳﾞｧｲｵﾘﾝ ｰｰ"),
    // hiragana prose
    ("hiragana", "きたきゅうしゅうし ふくおかし おおむたし くるめし"),
    // katakana with historical digraphs
    ("katakana", "ヴァイオリン ヷヸヹヺ ヽヾ ヵヶ"),
    // standalone marks
    ("marks", "か゛き゛く゛は゜ひ゜ふ゜"),
    // nothing to do for any stage
    ("other", "漢字と ASCII text 12345 ＡＢＣ"),
];

fn stage_benches_auto<S, C>(c: &mut Criterion, stage_name: &str, constructor: C)
where
    S: Stage + 'static,
    C: Fn() -> S,
{
    let mut group = c.benchmark_group(stage_name);

    let mut auto_unchanged = Vec::new();

    for &(label, text) in SAMPLES {
        let normalized = Jaco::new(text).apply(constructor()).into_string();
        auto_unchanged.push((label, normalized));
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;

        group.bench_function(BenchmarkId::new("changed", label), |b| {
            b.iter_batched(
                || text,
                |t| {
                    total += 1;
                    let result = constructor().apply(Cow::Borrowed(t));
                    if matches!(result, Cow::Borrowed(s) if s.as_ptr() == t.as_ptr()) {
                        zero_copy_hits += 1;
                    }
                },
                BatchSize::SmallInput,
            )
        });
        println!("   ZERO-COPY {zero_copy_hits}/{total}");
    }

    for (label, normalized) in &auto_unchanged {
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;
        group.bench_function(BenchmarkId::new("unchanged", label), |b| {
            b.iter_batched(
                || normalized.as_str(),
                |t| {
                    total += 1;
                    let result = constructor().apply(Cow::Borrowed(t));
                    if matches!(result, Cow::Borrowed(s) if s.as_ptr() == t.as_ptr()) {
                        zero_copy_hits += 1;
                    }
                },
                BatchSize::SmallInput,
            )
        });
        let pct = if total > 0 {
            (zero_copy_hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("   ZERO-COPY {zero_copy_hits}/{total} ({pct:.2}%)");
    }

    group.finish();
}

fn stage_matrix(c: &mut Criterion) {
    stage_benches_auto(c, "ToWideKatakana", || ToWideKatakana);
    stage_benches_auto(c, "ToNarrowKatakana", || ToNarrowKatakana);
    stage_benches_auto(c, "ToKatakana", ToKatakana::default);
    stage_benches_auto(c, "ToHiragana", ToHiragana::default);
    stage_benches_auto(c, "ToHiraganaCombinate", || ToHiragana { combinate: true });
    stage_benches_auto(c, "Combinate", || Combinate);
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_secs(1))
        .sample_size(200)
        .noise_threshold(0.015);
    targets = stage_matrix
);
criterion_main!(benches);
