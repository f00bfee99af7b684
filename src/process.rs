//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage and can inline the whole chain. DynamicProcess is the boxed
//! fallback for chains assembled at runtime.
use crate::stage::Stage;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        run_stage(&self.stage, current)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text);
        }
        text
    }
}

/// Applies one stage, skipping it when its pre-check reports nothing to do.
#[inline(always)]
pub(crate) fn run_stage<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if !stage.needs_apply(&text) {
        return text;
    }
    trace!(stage = stage.name(), "rewriting text");
    stage.apply(text)
}
