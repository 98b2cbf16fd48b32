use crate::models::{Cleanliness, GuestFrequency, LifestyleProfile, SleepSchedule};

/// Credit for a sleep schedule mismatch when one side is flexible
const FLEXIBLE_SLEEP_CREDIT: f64 = 0.7;
/// Credit for an early-bird / night-owl mismatch
const SLEEP_MISMATCH_CREDIT: f64 = 0.3;
/// Penalty per step on the cleanliness scale
const CLEANLINESS_STEP: f64 = 0.3;
/// Flat credit for any social level mismatch
const SOCIAL_MISMATCH_CREDIT: f64 = 0.5;
/// Penalty per step on the guest frequency scale
const GUEST_STEP: f64 = 0.25;
/// Credit when exactly one side has pets
const PETS_ONE_SIDED_CREDIT: f64 = 0.3;

/// Calculate the lifestyle sub-score (0-100)
///
/// Each habit present on both sides contributes a credit in `[0, 1]`;
/// the score is the mean credit scaled to 100. Returns `None` when the
/// two profiles share no habit, so the factor is left out of the total.
pub fn lifestyle_score(a: &LifestyleProfile, b: &LifestyleProfile) -> Option<f64> {
    let credits = [
        a.sleep_schedule
            .zip(b.sleep_schedule)
            .map(|(x, y)| sleep_credit(x, y)),
        a.cleanliness
            .zip(b.cleanliness)
            .map(|(x, y)| scale_credit(&Cleanliness::SCALE, x, y, CLEANLINESS_STEP)),
        a.social_level
            .zip(b.social_level)
            .map(|(x, y)| if x == y { 1.0 } else { SOCIAL_MISMATCH_CREDIT }),
        a.guest_frequency
            .zip(b.guest_frequency)
            .map(|(x, y)| scale_credit(&GuestFrequency::SCALE, x, y, GUEST_STEP)),
        a.smoking
            .zip(b.smoking)
            .map(|(x, y)| if x == y { 1.0 } else { 0.0 }),
        a.has_pets.zip(b.has_pets).map(|(x, y)| pets_credit(x, y)),
    ];

    let (matches, total) = credits
        .iter()
        .flatten()
        .fold((0.0_f64, 0u32), |(sum, count), credit| (sum + credit, count + 1));

    if total == 0 {
        return None;
    }

    Some(matches / f64::from(total) * 100.0)
}

#[inline]
fn sleep_credit(a: SleepSchedule, b: SleepSchedule) -> f64 {
    if a == b {
        1.0
    } else if a == SleepSchedule::Flexible || b == SleepSchedule::Flexible {
        FLEXIBLE_SLEEP_CREDIT
    } else {
        SLEEP_MISMATCH_CREDIT
    }
}

/// `1 - step * |index distance|` on an ordered scale, floored at 0
#[inline]
fn scale_credit<T: PartialEq + Copy>(scale: &[T], a: T, b: T, step: f64) -> f64 {
    let rank = |value: T| scale.iter().position(|v| *v == value).unwrap_or(0);
    let distance = rank(a).abs_diff(rank(b));
    (1.0 - step * distance as f64).max(0.0)
}

/// A boolean mismatch always means exactly one side has pets
#[inline]
fn pets_credit(a: bool, b: bool) -> f64 {
    if a == b { 1.0 } else { PETS_ONE_SIDED_CREDIT }
}
