mod path_utils;
mod perf;
mod time_utils;

pub use path_utils::file_url;
pub use time_utils::{format_elapsed, format_minutes};
