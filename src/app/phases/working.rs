// app/phases/working.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::WorkingState};

impl PhaseView for WorkingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_working_state(ctx, self)
    }
}
