use {
    crate::{
        config::RoutingPreference,
        ui::{StatusTone, UI_CONFIG, UI_TEXT, UiStyleExt},
    },
    eframe::egui::{
        Button, CentralPanel, ComboBox, Context, DragValue, Grid, ProgressBar, RichText,
        TextEdit, TopBottomPanel,
    },
    std::path::Path,
    strum::IntoEnumIterator,
};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    LoadData,
    Calculate,
    OpenMap,
}

/// Editable inputs, borrowed from the app for the duration of one frame.
pub(crate) struct FormFields<'a> {
    pub(crate) api_key: &'a mut String,
    pub(crate) address: &'a mut String,
    pub(crate) max_minutes: &'a mut u32,
    pub(crate) respect_state: &'a mut bool,
    pub(crate) routing: &'a mut RoutingPreference,
}

pub(crate) struct ProgressLine {
    /// `None` animates without a fill level.
    pub(crate) fraction: Option<f32>,
    pub(crate) text: String,
}

/// Read-only state the form displays.
pub(crate) struct FormView<'a> {
    pub(crate) busy: bool,
    pub(crate) status: &'a str,
    pub(crate) tone: StatusTone,
    pub(crate) progress: Option<ProgressLine>,
    pub(crate) dataset: &'a Path,
    pub(crate) records_loaded: Option<usize>,
    pub(crate) last_map: Option<&'a Path>,
    pub(crate) legend_max_minutes: Option<f64>,
}

pub(crate) fn render_form(
    ctx: &Context,
    fields: FormFields<'_>,
    view: &FormView<'_>,
) -> Option<FormAction> {
    let mut action = None;

    TopBottomPanel::bottom("status_panel")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            if let Some(progress) = &view.progress {
                let bar = match progress.fraction {
                    Some(f) => ProgressBar::new(f).show_percentage(),
                    None => ProgressBar::new(0.0),
                };
                ui.add(bar.animate(true).text(progress.text.as_str()));
            }
            ui.label(RichText::new(view.status).color(view.tone.color()));
        });

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.heading(RichText::new(&UI_TEXT.title).color(UI_CONFIG.colors.heading));
            ui.add_space(10.0);

            ui.add_enabled_ui(!view.busy, |ui| {
                Grid::new("input_form")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.form_label(&UI_TEXT.label_api_key);
                        ui.add(
                            TextEdit::singleline(fields.api_key)
                                .password(true)
                                .hint_text(&UI_TEXT.hint_api_key)
                                .desired_width(f32::INFINITY),
                        );
                        ui.end_row();

                        ui.form_label(&UI_TEXT.label_address);
                        ui.add(
                            TextEdit::singleline(fields.address)
                                .hint_text(&UI_TEXT.hint_address)
                                .desired_width(f32::INFINITY),
                        );
                        ui.end_row();

                        ui.form_label(&UI_TEXT.label_max_minutes);
                        ui.add(DragValue::new(fields.max_minutes).range(1..=600).suffix(" min"));
                        ui.end_row();

                        ui.form_label(&UI_TEXT.label_routing);
                        ComboBox::from_id_salt("routing_preference")
                            .selected_text(fields.routing.to_string())
                            .show_ui(ui, |ui| {
                                for pref in RoutingPreference::iter() {
                                    ui.selectable_value(fields.routing, pref, pref.to_string());
                                }
                            });
                        ui.end_row();

                        ui.label("");
                        ui.checkbox(fields.respect_state, UI_TEXT.label_respect_state.as_str())
                            .on_hover_text(&UI_TEXT.hover_respect_state);
                        ui.end_row();
                    });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.add(Button::new(&UI_TEXT.button_calculate)).clicked() {
                        action = Some(FormAction::Calculate);
                    }
                    if ui.add(Button::new(&UI_TEXT.button_load_data)).clicked() {
                        action = Some(FormAction::LoadData);
                    }
                    if let Some(map) = view.last_map {
                        if ui
                            .button(&UI_TEXT.button_open_map)
                            .on_hover_text(format!("{}\n{}", UI_TEXT.hover_open_map, map.display()))
                            .clicked()
                        {
                            action = Some(FormAction::OpenMap);
                        }
                    }
                });
            });

            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label_subdued(format!("{} {}", UI_TEXT.label_dataset, view.dataset.display()));
                match view.records_loaded {
                    Some(n) => ui.label_subdued(format!("({} {})", n, UI_TEXT.label_records_loaded)),
                    None => ui.label_subdued(format!("({})", UI_TEXT.status_data_missing)),
                }
            });
            if let Some(max) = view.legend_max_minutes {
                ui.time_legend(max);
            }
        });

    action
}
