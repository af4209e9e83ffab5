mod phases;
mod root;
mod state;
mod validation;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, ReadyState, TaskKind, WorkingState};
pub(crate) use validation::validate_calculation;

pub use root::App;
