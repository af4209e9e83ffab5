use {
    eframe::{
        Frame, Storage,
        egui::{Context, OpenUrl, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        path::PathBuf,
        sync::{Arc, mpsc, mpsc::Receiver},
    },
};

use crate::{
    Cli, SharedArgs,
    app::{AppState, PhaseView, ReadyState, TaskKind, WorkingState, validate_calculation},
    config::{DEFAULT_MAX_MINUTES, RoutingPreference},
    domain::AreaRecord,
    engine::{ProgressEvent, RunOutcome, RunStage, spawn_calculation_task, spawn_load_task},
    ui::{FormAction, FormFields, FormView, ProgressLine, StatusTone, UI_CONFIG, UI_TEXT, render_form},
    utils::{file_url, format_elapsed},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Form inputs persist across sessions. The API key never does.
    pub(crate) address: String,
    pub(crate) max_minutes: u32,
    pub(crate) respect_state: bool,
    pub(crate) routing_preference: RoutingPreference,
    #[serde(skip)]
    pub(crate) api_key: String,
    #[serde(skip)]
    pub(crate) args: SharedArgs,
    #[serde(skip)]
    pub(crate) records: Option<Arc<Vec<AreaRecord>>>,
    #[serde(skip)]
    pub(crate) progress_rx: Option<Receiver<ProgressEvent>>,
    #[serde(skip)]
    pub(crate) status: String,
    #[serde(skip)]
    pub(crate) status_tone: StatusTone,
    #[serde(skip)]
    pub(crate) last_outcome: Option<RunOutcome>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            address: String::new(),
            max_minutes: DEFAULT_MAX_MINUTES,
            respect_state: false,
            routing_preference: RoutingPreference::default(),
            api_key: String::new(),
            args: SharedArgs::default(),
            records: None,
            progress_rx: None,
            status: UI_TEXT.status_initial.clone(),
            status_tone: StatusTone::Info,
            last_outcome: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.api_key = args.shared.api_key.clone().unwrap_or_default();
        app.args = args.shared;
        app.state = AppState::Ready(ReadyState);
        app
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = text.into();
        self.status_tone = tone;
    }

    /// IDLE PHASE: form is live, buttons start background tasks.
    pub(crate) fn tick_ready_state(&mut self, ctx: &Context) -> AppState {
        match self.render(ctx, None) {
            Some(FormAction::LoadData) => self.start_loading(),
            Some(FormAction::Calculate) => self.start_calculation(),
            Some(FormAction::OpenMap) => {
                self.open_last_map(ctx);
                AppState::Ready(ReadyState)
            }
            None => AppState::Ready(ReadyState),
        }
    }

    /// BUSY PHASE: drain worker events, inputs stay disabled.
    pub(crate) fn tick_working_state(
        &mut self,
        ctx: &Context,
        state: &mut WorkingState,
    ) -> AppState {
        let next = self.drain_progress(ctx, state);
        self.render(ctx, Some(&*state));
        match next {
            Some(next) => next,
            None => {
                ctx.request_repaint();
                AppState::Working(state.clone())
            }
        }
    }

    fn start_loading(&mut self) -> AppState {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);
        spawn_load_task(self.args.dataset.clone(), tx);
        self.set_status("Loading zip code data...", StatusTone::Info);
        AppState::Working(WorkingState::new(TaskKind::LoadingData))
    }

    fn start_calculation(&mut self) -> AppState {
        let records = self.records.as_ref().map(|r| r.as_slice());
        if let Err(msg) = validate_calculation(&self.api_key, &self.address, records) {
            self.set_status(msg, StatusTone::Error);
            return AppState::Ready(ReadyState);
        }
        let Some(records) = self.records.clone() else {
            return AppState::Ready(ReadyState);
        };

        let config = self
            .args
            .run_config(self.api_key.trim(), self.address.trim())
            .with_max_minutes(self.max_minutes)
            .with_respect_state(self.respect_state)
            .with_routing_preference(self.routing_preference);

        #[cfg(debug_assertions)]
        if DF.log_worker_events {
            log::info!(
                "Starting calculation: '{}' within {} min (respect state: {}, {})",
                config.address,
                config.max_minutes,
                config.respect_state,
                config.routing_preference
            );
        }

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);
        spawn_calculation_task(config, self.args.provider_config(), records, tx);
        self.set_status(RunStage::Geocoding.to_string(), StatusTone::Info);
        AppState::Working(WorkingState::new(TaskKind::Calculating))
    }

    /// Applies every pending worker event. Returns the next state once the task reports back.
    fn drain_progress(&mut self, ctx: &Context, state: &mut WorkingState) -> Option<AppState> {
        let Some(rx) = &self.progress_rx else {
            log::warn!("Working without a progress channel. Returning to the form.");
            return Some(AppState::Ready(ReadyState));
        };

        let mut events = Vec::new();
        let disconnected = loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(mpsc::TryRecvError::Empty) => break false,
                Err(mpsc::TryRecvError::Disconnected) => break true,
            }
        };

        // Worker died without reporting (panic): don't leave the form locked.
        if disconnected && events.is_empty() {
            self.progress_rx = None;
            self.set_status("Background task stopped unexpectedly", StatusTone::Error);
            return Some(AppState::Ready(ReadyState));
        }

        for event in events {
            #[cfg(debug_assertions)]
            if DF.log_worker_events {
                log::info!("Worker event: {:?}", event);
            }
            match event {
                ProgressEvent::Status(text) => self.set_status(text, StatusTone::Info),
                ProgressEvent::Stage(stage) => {
                    state.stage = stage;
                    self.set_status(stage.to_string(), StatusTone::Info);
                }
                ProgressEvent::Batch {
                    completed,
                    total,
                    failed,
                } => {
                    state.batches_done = completed;
                    state.batches_total = total;
                    state.batches_failed = failed;
                }
                ProgressEvent::Loaded(result) => {
                    self.progress_rx = None;
                    match result {
                        Ok(records) => {
                            self.set_status(
                                format!("Loaded {} zip codes", records.len()),
                                StatusTone::Success,
                            );
                            self.records = Some(records);
                        }
                        Err(msg) => self.set_status(msg, StatusTone::Error),
                    }
                    return Some(AppState::Ready(ReadyState));
                }
                ProgressEvent::Finished(result) => {
                    self.progress_rx = None;
                    match result {
                        Ok(outcome) => {
                            self.set_status(outcome.summary(), StatusTone::Success);
                            self.last_outcome = Some(outcome);
                            self.open_last_map(ctx);
                        }
                        Err(msg) => self.set_status(msg, StatusTone::Error),
                    }
                    return Some(AppState::Ready(ReadyState));
                }
            }
        }
        None
    }

    fn open_last_map(&self, ctx: &Context) {
        let Some(path) = self.last_map_path() else {
            return;
        };
        if !path.exists() {
            log::warn!("Map file {} no longer exists", path.display());
            return;
        }
        match file_url(&path) {
            Some(url) => ctx.open_url(OpenUrl::new_tab(url)),
            None => log::warn!("Cannot build a browser URL for {}", path.display()),
        }
    }

    fn last_map_path(&self) -> Option<PathBuf> {
        self.last_outcome.as_ref().map(|o| o.map_path.clone())
    }

    fn render(&mut self, ctx: &Context, working: Option<&WorkingState>) -> Option<FormAction> {
        let last_map = self.last_map_path();
        let progress = working.map(progress_line);
        let legend_max_minutes = self
            .last_outcome
            .as_ref()
            .and_then(|o| o.slowest_minutes())
            .or_else(|| Some(f64::from(self.max_minutes)));

        let view = FormView {
            busy: working.is_some(),
            status: &self.status,
            tone: self.status_tone,
            progress,
            dataset: &self.args.dataset,
            records_loaded: self.records.as_ref().map(|r| r.len()),
            last_map: last_map.as_deref(),
            legend_max_minutes,
        };
        let fields = FormFields {
            api_key: &mut self.api_key,
            address: &mut self.address,
            max_minutes: &mut self.max_minutes,
            respect_state: &mut self.respect_state,
            routing: &mut self.routing_preference,
        };
        render_form(ctx, fields, &view)
    }
}

fn progress_line(state: &WorkingState) -> ProgressLine {
    let elapsed = format_elapsed(state.started.elapsed());
    let text = match state.task {
        TaskKind::LoadingData => format!("Loading data... {}", elapsed),
        TaskKind::Calculating if state.stage == RunStage::Querying && state.batches_total > 0 => {
            format!(
                "Batch {}/{} ({} failed) {}",
                state.batches_done, state.batches_total, state.batches_failed, elapsed
            )
        }
        TaskKind::Calculating => format!("{} {}", state.stage, elapsed),
    };
    ProgressLine {
        fraction: state.batch_fraction(),
        text,
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Ready(mut s) => s.tick(self, ctx),
            AppState::Working(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_worker_events {
            log::info!(
                "SAVE [App]: address = '{}', max = {} min",
                self.address,
                self.max_minutes
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
