mod form;

pub(crate) use form::{FormAction, FormFields, FormView, ProgressLine, render_form};
