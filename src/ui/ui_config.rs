use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub status_panel: Color32,
    pub status_info: Color32,
    pub status_success: Color32,
    pub status_error: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub label_column_width: f32,
    pub legend_size: [f32; 2],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::WHITE,
        subdued: Color32::GRAY,
        central_panel: Color32::from_rgb(30, 32, 36),
        status_panel: Color32::from_rgb(22, 22, 25),
        status_info: Color32::LIGHT_GRAY,
        status_success: Color32::from_rgb(110, 200, 120),
        status_error: Color32::from_rgb(230, 90, 80),
    },
    label_column_width: 190.0,
    legend_size: [160.0, 10.0],
};

impl UiConfig {
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.status_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }
}
