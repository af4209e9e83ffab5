use std::time::Duration;

/// Short elapsed-time label for the status line, e.g. `42s` or `3m 05s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m {:02}s", mins, secs % 60);
    }
    format!("{}h {:02}m", mins / 60, mins % 60)
}

/// Minutes with one decimal, the way the map tooltips show them.
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.1} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_labels() {
        assert_eq!(format_elapsed(Duration::from_secs(42)), "42s");
        assert_eq!(format_elapsed(Duration::from_secs(185)), "3m 05s");
        assert_eq!(format_elapsed(Duration::from_secs(3 * 3600 + 120)), "3h 02m");
    }

    #[test]
    fn minutes_label() {
        assert_eq!(format_minutes(15.04), "15.0 min");
    }
}
