// src/app/state.rs

use std::time::Instant;

use crate::engine::RunStage;

/// Form is idle and accepts input.
#[derive(Clone, Copy, Default)]
pub(crate) struct ReadyState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TaskKind {
    LoadingData,
    Calculating,
}

/// A background task is in flight. Buttons stay disabled until it reports back.
#[derive(Clone)]
pub(crate) struct WorkingState {
    pub(crate) task: TaskKind,
    pub(crate) stage: RunStage,
    pub(crate) batches_done: usize,
    pub(crate) batches_total: usize,
    pub(crate) batches_failed: usize,
    pub(crate) started: Instant,
}

impl WorkingState {
    pub(crate) fn new(task: TaskKind) -> Self {
        Self {
            task,
            stage: RunStage::Idle,
            batches_done: 0,
            batches_total: 0,
            batches_failed: 0,
            started: Instant::now(),
        }
    }

    /// Fraction for the progress bar. `None` while there is nothing countable yet.
    pub(crate) fn batch_fraction(&self) -> Option<f32> {
        (self.stage == RunStage::Querying && self.batches_total > 0)
            .then(|| self.batches_done as f32 / self.batches_total as f32)
    }
}

pub(crate) enum AppState {
    Ready(ReadyState),
    Working(WorkingState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Ready(ReadyState)
    }
}
