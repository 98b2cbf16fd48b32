use crate::models::BudgetRange;

/// Calculate the budget sub-score (0-100)
///
/// Overlapping ranges score by overlap width against the average range
/// width. Disjoint ranges lose points in proportion to the gap between
/// them, relative to the average upper bound.
///
/// Returns `None` unless both ranges have finite, ordered bounds.
pub fn budget_score(a: &BudgetRange, b: &BudgetRange) -> Option<f64> {
    let (min_a, max_a) = a.bounds()?;
    let (min_b, max_b) = b.bounds()?;

    let overlap_min = min_a.max(min_b);
    let overlap_max = max_a.min(max_b);

    if overlap_min > overlap_max {
        let gap = overlap_min - overlap_max;
        let avg_max = (max_a + max_b) / 2.0;
        if avg_max <= 0.0 {
            return Some(0.0);
        }
        return Some((100.0 - 100.0 * gap / avg_max).max(0.0));
    }

    let range_a = max_a - min_a;
    let range_b = max_b - min_b;

    // A fixed amount inside the other range (or two equal fixed amounts)
    if range_a == 0.0 || range_b == 0.0 {
        return Some(100.0);
    }

    let avg_range = (range_a + range_b) / 2.0;
    let overlap_width = overlap_max - overlap_min;

    Some((100.0 * overlap_width / avg_range).min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: (f64, f64), b: (f64, f64)) -> Option<f64> {
        budget_score(&BudgetRange::new(a.0, a.1), &BudgetRange::new(b.0, b.1))
    }

    #[test]
    fn test_partial_overlap() {
        // overlap 4-5, average range 2
        assert_eq!(score((3.0, 5.0), (4.0, 6.0)), Some(50.0));
    }

    #[test]
    fn test_identical_ranges() {
        assert_eq!(score((800.0, 1200.0), (800.0, 1200.0)), Some(100.0));
    }

    #[test]
    fn test_nested_range_capped() {
        // overlap 20 against average range 60
        let s = score((0.0, 100.0), (40.0, 60.0)).unwrap();
        assert!((s - 100.0 * 20.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_ranges() {
        // gap 3, average max (2 + 6) / 2 = 4
        let s = score((1.0, 2.0), (5.0, 6.0)).unwrap();
        assert_eq!(s, 25.0);
    }

    #[test]
    fn test_far_apart_floors_at_zero() {
        assert_eq!(score((100.0, 200.0), (5000.0, 6000.0)), Some(0.0));
    }

    #[test]
    fn test_point_budgets() {
        assert_eq!(score((900.0, 900.0), (900.0, 900.0)), Some(100.0));
        assert_eq!(score((900.0, 900.0), (800.0, 1000.0)), Some(100.0));
        let apart = score((900.0, 900.0), (1000.0, 1000.0)).unwrap();
        assert!(apart < 100.0);
    }

    #[test]
    fn test_touching_ranges_score_zero() {
        assert_eq!(score((3.0, 5.0), (5.0, 7.0)), Some(0.0));
    }

    #[test]
    fn test_malformed_range_skipped() {
        assert_eq!(score((1200.0, 800.0), (800.0, 1200.0)), None);
        let missing = BudgetRange { min: None, max: Some(900.0) };
        assert_eq!(budget_score(&missing, &BudgetRange::new(1.0, 2.0)), None);
    }
}
