use crate::models::{domain::non_blank, Location};

const DIFFERENT_STATE: f64 = 0.0;
const SAME_STATE: f64 = 20.0;
const SAME_CITY_BASE: f64 = 60.0;
const SAME_NEIGHBORHOOD_BONUS: f64 = 40.0;
const OTHER_NEIGHBORHOOD_BONUS: f64 = 20.0;

/// Calculate the location sub-score (0-100)
///
/// Names are compared case-insensitively after trimming. A missing state
/// never counts as the same state; a missing neighbourhood in the same
/// city scores like a different one.
pub fn location_score(a: &Location, b: &Location) -> Option<f64> {
    let city_a = non_blank(&a.city)?;
    let city_b = non_blank(&b.city)?;

    if !same_name(city_a, city_b) {
        let same_state = match (non_blank(&a.state), non_blank(&b.state)) {
            (Some(x), Some(y)) => same_name(x, y),
            _ => false,
        };
        return Some(if same_state { SAME_STATE } else { DIFFERENT_STATE });
    }

    let bonus = match (non_blank(&a.neighborhood), non_blank(&b.neighborhood)) {
        (Some(x), Some(y)) if same_name(x, y) => SAME_NEIGHBORHOOD_BONUS,
        _ => OTHER_NEIGHBORHOOD_BONUS,
    };

    Some(SAME_CITY_BASE + bonus)
}

#[inline]
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(city: Option<&str>, state: Option<&str>, neighborhood: Option<&str>) -> Location {
        Location {
            city: city.map(String::from),
            state: state.map(String::from),
            neighborhood: neighborhood.map(String::from),
        }
    }

    #[test]
    fn test_same_neighborhood() {
        let a = place(Some("Austin"), Some("TX"), Some("Hyde Park"));
        let b = place(Some("austin "), Some("tx"), Some("HYDE PARK"));
        assert_eq!(location_score(&a, &b), Some(100.0));
    }

    #[test]
    fn test_same_city_other_or_missing_neighborhood() {
        let a = place(Some("Austin"), Some("TX"), Some("Hyde Park"));
        let b = place(Some("Austin"), Some("TX"), Some("Zilker"));
        let c = place(Some("Austin"), Some("TX"), None);
        assert_eq!(location_score(&a, &b), Some(80.0));
        assert_eq!(location_score(&a, &c), Some(80.0));
    }

    #[test]
    fn test_same_state_only() {
        let a = place(Some("Austin"), Some("TX"), None);
        let b = place(Some("Dallas"), Some("TX"), None);
        assert_eq!(location_score(&a, &b), Some(20.0));
    }

    #[test]
    fn test_different_state_or_unknown_state() {
        let a = place(Some("Austin"), Some("TX"), None);
        let b = place(Some("Denver"), Some("CO"), None);
        let c = place(Some("Dallas"), None, None);
        assert_eq!(location_score(&a, &b), Some(0.0));
        assert_eq!(location_score(&a, &c), Some(0.0));
    }

    #[test]
    fn test_missing_city_skipped() {
        let a = place(Some("Austin"), Some("TX"), None);
        let b = place(None, Some("TX"), None);
        let c = place(Some(""), Some("TX"), None);
        assert_eq!(location_score(&a, &b), None);
        assert_eq!(location_score(&c, &a), None);
    }
}
