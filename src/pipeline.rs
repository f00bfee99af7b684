//! Reusable conversion pipelines.
//!
//! A [`Pipeline`] fixes a chain of stages once and applies it to any number of
//! strings. The static builder nests stages into a [`ChainedProcess`]; the
//! dynamic builder keeps them in a [`DynamicProcess`] for chains chosen at
//! runtime.

use crate::{
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::{Stage, ToHiragana, ToKatakana, ToNarrowKatakana, ToWideKatakana},
};
use std::borrow::Cow;

pub struct Pipeline<P: Process> {
    name: &'static str,
    process: P,
}

impl<P: Process> Pipeline<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.process.process(text.into())
    }
}

impl Pipeline<EmptyProcess> {
    pub fn builder(name: &'static str) -> PipelineBuilder<EmptyProcess> {
        PipelineBuilder {
            name,
            current: EmptyProcess,
        }
    }
}

impl Pipeline<DynamicProcess> {
    pub fn dynamic_builder(name: &'static str) -> DynamicPipelineBuilder {
        DynamicPipelineBuilder {
            name,
            process: DynamicProcess::new(),
        }
    }
}

pub struct PipelineBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl<P: Process> PipelineBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> PipelineBuilder<ChainedProcess<S, P>> {
        PipelineBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Pipeline<P> {
        Pipeline {
            name: self.name,
            process: self.current,
        }
    }
}

pub struct DynamicPipelineBuilder {
    name: &'static str,
    process: DynamicProcess,
}

impl DynamicPipelineBuilder {
    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            process: self.process.push(stage),
            ..self
        }
    }

    pub fn build(self) -> Pipeline<DynamicProcess> {
        Pipeline {
            name: self.name,
            process: self.process,
        }
    }
}

/// Wide katakana, narrow input widened first.
pub fn katakana() -> Pipeline<impl Process> {
    Pipeline::builder("katakana")
        .add_stage(ToKatakana::default())
        .build()
}

/// Hiragana with standalone voicing marks kept as they are.
pub fn hiragana() -> Pipeline<impl Process> {
    Pipeline::builder("hiragana")
        .add_stage(ToHiragana::default())
        .build()
}

/// Hiragana with every voicing mark in combining form, ready for NFC.
pub fn hiragana_combining() -> Pipeline<impl Process> {
    Pipeline::builder("hiragana_combining")
        .add_stage(ToHiragana { combinate: true })
        .build()
}

/// Everything katakana, in halfwidth forms.
pub fn narrow_katakana() -> Pipeline<impl Process> {
    Pipeline::builder("narrow_katakana")
        .add_stage(ToKatakana::default())
        .add_stage(ToNarrowKatakana)
        .build()
}

/// Only widens narrow katakana; hiragana is left alone.
pub fn wide_katakana() -> Pipeline<impl Process> {
    Pipeline::builder("wide_katakana")
        .add_stage(ToWideKatakana)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Combinate;

    #[test]
    fn test_presets() {
        assert_eq!(katakana().run("ひらがなとﾊﾝｶｸ"), "ヒラガナトハンカク");
        assert_eq!(hiragana().run("カタカナとﾊﾝｶｸ"), "かたかなとはんかく");
        assert_eq!(hiragana_combining().run("カ゛"), "か\u{3099}");
        assert_eq!(narrow_katakana().run("がっこう"), "ｶﾞｯｺｳ");
        assert_eq!(wide_katakana().run("ﾊﾟﾝとぱん"), "パンとぱん");
        assert_eq!(katakana().name(), "katakana");
    }

    #[test]
    fn test_untouched_text_stays_borrowed() {
        let input = "漢字 ABC";
        let out = narrow_katakana().run(input);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn test_dynamic_matches_static() {
        let dynamic = Pipeline::dynamic_builder("dyn")
            .add_stage(ToHiragana::default())
            .add_stage(Combinate)
            .build();
        let fixed = Pipeline::builder("fixed")
            .add_stage(ToHiragana::default())
            .add_stage(Combinate)
            .build();
        for s in ["ガ゛ｷﾞ", "ヷヴ", "abc", ""] {
            assert_eq!(dynamic.run(s), fixed.run(s));
        }
    }
}
