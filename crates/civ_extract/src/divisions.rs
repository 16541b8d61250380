//! Buckets a flat list of offices into government tiers.
//!
//! Division identifiers follow the Open Civic Data convention, e.g.
//! `ocd-division/country:us/state:ca/county:los_angeles`. The tier is
//! read off the last path segment, with two overrides layered on top.

use civ_core::GovernmentLevel;

/// Classifies an office into a government tier from its division
/// identifier and display name.
///
/// Checks apply in a fixed order and later ones win:
/// 1. the last `kind:value` segment of the division identifier,
/// 2. a `cd:` (congressional district) or `senate` substring anywhere in
///    the identifier forces `Federal`,
/// 3. an office name mentioning president, senator, or representative
///    forces `Federal`. A "Representative" office nested under a state
///    division still belongs on the federal tab.
///
/// Total function: anything unrecognized classifies as `Other`.
pub fn classify_division(division_id: &str, office_name: &str) -> GovernmentLevel {
    let level = if division_id.contains("cd:") || division_id.contains("senate") {
        GovernmentLevel::Federal
    } else {
        segment_level(division_id).unwrap_or(GovernmentLevel::Other)
    };

    let office = office_name.to_lowercase();
    if office.contains("president")
        || office.contains("senator")
        || office.contains("representative")
    {
        return GovernmentLevel::Federal;
    }

    level
}

/// Tier implied by the last path segment, when it is a clean
/// `kind:value` pair of a known kind.
fn segment_level(division_id: &str) -> Option<GovernmentLevel> {
    let segments: Vec<&str> = division_id.split('/').collect();
    let last = segments.last().copied().unwrap_or("");

    let (kind, value) = last.split_once(':')?;
    if value.contains(':') {
        return None;
    }

    match kind {
        "country" if segments.len() == 2 => Some(GovernmentLevel::Federal),
        "state" => Some(GovernmentLevel::State),
        "county" => Some(GovernmentLevel::County),
        "place" | "city" => Some(GovernmentLevel::Local),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GovernmentLevel::*;

    #[test]
    fn test_structural_tiers() {
        assert_eq!(classify_division("ocd-division/country:us", "President"), Federal);
        assert_eq!(
            classify_division("ocd-division/country:us/state:ca", "Governor"),
            State
        );
        assert_eq!(
            classify_division(
                "ocd-division/country:us/state:ca/county:los_angeles",
                "County Supervisor"
            ),
            County
        );
        assert_eq!(
            classify_division(
                "ocd-division/country:us/state:ca/place:los_angeles",
                "Mayor"
            ),
            Local
        );
    }

    #[test]
    fn test_city_segment_is_local() {
        assert_eq!(
            classify_division("ocd-division/country:us/state:ny/city:new_york", "Comptroller"),
            Local
        );
    }

    #[test]
    fn test_congressional_district_is_federal() {
        assert_eq!(
            classify_division("ocd-division/country:us/state:ca/cd:12", "Representative"),
            Federal
        );
        // The structural override alone is enough; the office name does
        // not have to mention a federal keyword.
        assert_eq!(
            classify_division("ocd-division/country:us/state:ca/cd:12", "Delegate"),
            Federal
        );
    }

    #[test]
    fn test_senate_substring_is_federal() {
        assert_eq!(
            classify_division(
                "ocd-division/country:us/state:tx/sldu:senate_district_5",
                "Legislator"
            ),
            Federal
        );
    }

    #[test]
    fn test_office_keywords_win_over_structure() {
        assert_eq!(
            classify_division("ocd-division/country:us/state:ca", "State Representative"),
            Federal
        );
        assert_eq!(
            classify_division(
                "ocd-division/country:us/state:ca/place:fresno",
                "United States Senator"
            ),
            Federal
        );
    }

    #[test]
    fn test_office_keywords_are_case_insensitive() {
        assert_eq!(
            classify_division("ocd-division/country:us", "PRESIDENT of the United States"),
            Federal
        );
    }

    #[test]
    fn test_unrecognized_inputs_are_other() {
        assert_eq!(
            classify_division(
                "ocd-division/country:us/state:ca/county:unknown_type:x",
                "Dog Catcher"
            ),
            Other
        );
        assert_eq!(classify_division("", "Dog Catcher"), Other);
        assert_eq!(classify_division("ocd-division", "Dog Catcher"), Other);
    }

    #[test]
    fn test_country_only_counts_when_two_segments() {
        // A country segment buried deeper than the root pair does not
        // classify on its own.
        assert_eq!(
            classify_division("ocd-division/region:na/country:us", "Clerk"),
            Other
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let id = "ocd-division/country:us/state:ca/county:los_angeles";
        let first = classify_division(id, "County Supervisor");
        for _ in 0..10 {
            assert_eq!(classify_division(id, "County Supervisor"), first);
        }
    }
}
