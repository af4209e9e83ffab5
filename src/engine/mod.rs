mod core;
mod filter;
mod messages;
mod sampler;
mod worker;

pub use core::Calculator;
pub use filter::filter_results;
pub use messages::{ProgressEvent, RunFailure, RunOutcome, RunStage};
pub use sampler::{partition, sample_areas};

pub(crate) use worker::{spawn_calculation_task, spawn_load_task};
