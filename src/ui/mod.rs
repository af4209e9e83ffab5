mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use screens::{FormAction, FormFields, FormView, ProgressLine, render_form};
pub(crate) use styles::{StatusTone, UiStyleExt};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
