use chrono::NaiveDate;

/// Upper bound in days (inclusive) and the score awarded within it
const TIMING_STEPS: [(i64, f64); 5] = [
    (7, 100.0),
    (14, 90.0),
    (30, 75.0),
    (60, 50.0),
    (90, 25.0),
];

/// Absolute number of days between two move-in dates
#[inline]
pub fn days_apart(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days().abs()
}

/// Calculate the move-in timing sub-score (0-100)
///
/// Step function on the distance between the two dates; more than 90
/// days apart scores 0.
pub fn timing_score(a: NaiveDate, b: NaiveDate) -> f64 {
    let days = days_apart(a, b);
    TIMING_STEPS
        .iter()
        .find(|(limit, _)| days <= *limit)
        .map_or(0.0, |(_, score)| *score)
}
