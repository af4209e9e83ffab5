pub(super) mod phase_view;
pub(super) mod ready;
pub(super) mod working;

pub(crate) use phase_view::PhaseView;
