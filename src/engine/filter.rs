use crate::domain::TravelResult;

/// Keep results within `max_minutes` and, when `respect_state` is set, in the
/// origin's state. Input order is preserved. An unknown origin state matches
/// nothing when the state predicate is on.
pub fn filter_results(
    results: &[TravelResult],
    max_minutes: f64,
    respect_state: bool,
    origin_state: Option<&str>,
) -> Vec<TravelResult> {
    results
        .iter()
        .filter(|r| r.driving_time_minutes <= max_minutes)
        .filter(|r| !respect_state || origin_state.is_some_and(|s| r.state == s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use {super::*, geo::MultiPolygon};

    fn result(zip: &str, state: &str, minutes: f64) -> TravelResult {
        TravelResult {
            zip_code: zip.into(),
            state: state.into(),
            driving_time_minutes: minutes,
            geometry: MultiPolygon::new(vec![]),
        }
    }

    fn zips(results: &[TravelResult]) -> Vec<&str> {
        results.iter().map(|r| r.zip_code.as_str()).collect()
    }

    #[test]
    fn time_and_state_predicates_combine() {
        let raw = vec![result("22201", "VA", 15.0), result("20001", "DC", 50.0)];
        let filtered = filter_results(&raw, 30.0, true, Some("VA"));
        assert_eq!(zips(&filtered), vec!["22201"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let raw = vec![result("a", "VA", 30.0), result("b", "VA", 30.01)];
        assert_eq!(zips(&filter_results(&raw, 30.0, false, None)), vec!["a"]);
    }

    #[test]
    fn state_ignored_unless_requested() {
        let raw = vec![result("a", "VA", 10.0), result("b", "MD", 10.0), result("c", "", 10.0)];
        assert_eq!(zips(&filter_results(&raw, 60.0, false, Some("VA"))), vec!["a", "b", "c"]);
        assert_eq!(zips(&filter_results(&raw, 60.0, true, Some("MD"))), vec!["b"]);
    }

    #[test]
    fn unknown_origin_state_matches_nothing() {
        let raw = vec![result("a", "VA", 10.0), result("c", "", 10.0)];
        assert!(filter_results(&raw, 60.0, true, None).is_empty());
    }

    #[test]
    fn output_is_always_a_subset_of_input() {
        let states = ["VA", "DC", "MD", ""];
        let raw: Vec<TravelResult> = (0..40)
            .map(|i| result(&format!("{:05}", i), states[i % 4], (i * 3) as f64))
            .collect();

        for &max in &[0.0, 15.0, 59.0, 200.0] {
            for &respect in &[false, true] {
                for origin in [None, Some("VA"), Some("MD")] {
                    let filtered = filter_results(&raw, max, respect, origin);
                    assert!(filtered.len() <= raw.len());
                    for r in &filtered {
                        assert!(raw.contains(r));
                        assert!(r.driving_time_minutes <= max);
                        if respect {
                            assert_eq!(Some(r.state.as_str()), origin);
                        }
                    }
                    // Every qualifying input survives.
                    let expected = raw
                        .iter()
                        .filter(|r| {
                            r.driving_time_minutes <= max
                                && (!respect || Some(r.state.as_str()) == origin)
                        })
                        .count();
                    assert_eq!(filtered.len(), expected);
                }
            }
        }
    }
}
