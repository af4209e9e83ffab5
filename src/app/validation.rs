use crate::domain::AreaRecord;

/// Pre-flight checks for the Calculate button, in the order the user should fix them.
pub(crate) fn validate_calculation(
    api_key: &str,
    address: &str,
    records: Option<&[AreaRecord]>,
) -> Result<(), &'static str> {
    if api_key.trim().is_empty() {
        return Err("Please enter your Google Maps API key");
    }
    if address.trim().is_empty() {
        return Err("Please enter an origin address");
    }
    if records.is_none_or(|r| r.is_empty()) {
        return Err("Please load data first");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, geo::polygon};

    fn one_record() -> Vec<AreaRecord> {
        let square = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        AreaRecord::new("00001", None, geo::MultiPolygon::new(vec![square]))
            .into_iter()
            .collect()
    }

    #[test]
    fn key_is_checked_before_address_and_data() {
        assert_eq!(
            validate_calculation("  ", "", None),
            Err("Please enter your Google Maps API key")
        );
    }

    #[test]
    fn address_is_checked_before_data() {
        assert_eq!(
            validate_calculation("key", " ", None),
            Err("Please enter an origin address")
        );
    }

    #[test]
    fn data_must_be_loaded() {
        assert_eq!(
            validate_calculation("key", "Arlington, VA", None),
            Err("Please load data first")
        );
        let records = one_record();
        assert_eq!(validate_calculation("key", "Arlington, VA", Some(&records)), Ok(()));
    }
}
