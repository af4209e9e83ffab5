use {
    crate::{
        render::color_for_time,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Color32, RichText, Sense, Ui, Vec2, pos2, vec2},
};

/// How a status line should read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum StatusTone {
    #[default]
    Info,
    Success,
    Error,
}

impl StatusTone {
    pub(crate) fn color(&self) -> Color32 {
        match self {
            Self::Info => UI_CONFIG.colors.status_info,
            Self::Success => UI_CONFIG.colors.status_success,
            Self::Error => UI_CONFIG.colors.status_error,
        }
    }
}

pub(crate) fn to_color32(color: &colorgrad::Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn form_label(&mut self, text: &str);
    /// Strip showing the same green → red ramp the map uses.
    fn time_legend(&mut self, max_minutes: f64);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).small().color(UI_CONFIG.colors.subdued));
    }

    fn form_label(&mut self, text: &str) {
        self.add_sized(
            vec2(UI_CONFIG.label_column_width, self.spacing().interact_size.y),
            eframe::egui::Label::new(RichText::new(text).color(UI_CONFIG.colors.label)),
        );
    }

    fn time_legend(&mut self, max_minutes: f64) {
        self.horizontal(|ui| {
            ui.label_subdued(format!("0 min {}", UI_TEXT.label_legend_fast));
            let size = Vec2::from(UI_CONFIG.legend_size);
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let steps = size.x as usize;
            let painter = ui.painter();
            for step in 0..steps {
                let minutes = max_minutes * step as f64 / steps as f64;
                let x = rect.left() + step as f32;
                let slice = eframe::egui::Rect::from_min_max(
                    pos2(x, rect.top()),
                    pos2(x + 1.0, rect.bottom()),
                );
                painter.rect_filled(slice, 0.0, to_color32(&color_for_time(minutes, max_minutes)));
            }
            ui.label_subdued(format!("{} {}", crate::utils::format_minutes(max_minutes), UI_TEXT.label_legend_slow));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorgrad_colors_convert_channel_for_channel() {
        let c = color_for_time(0.0, 10.0);
        assert_eq!(to_color32(&c), Color32::from_rgb(0, 255, 0));
        let c = color_for_time(10.0, 10.0);
        assert_eq!(to_color32(&c), Color32::from_rgb(255, 0, 0));
    }
}
