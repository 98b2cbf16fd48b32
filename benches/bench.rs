// Criterion benchmarks for roomie-match

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomie_match::core::{calculate_compatibility, lifestyle_score, Matcher};
use roomie_match::models::{
    BudgetRange, Cleanliness, GuestFrequency, HousingPreferences, LifestyleProfile, Location,
    SleepSchedule, SocialLevel, UserProfile,
};

fn create_candidate(id: usize) -> UserProfile {
    let sleep = [SleepSchedule::EarlyBird, SleepSchedule::NightOwl, SleepSchedule::Flexible];
    let social = [SocialLevel::VerySocial, SocialLevel::ModeratelySocial, SocialLevel::Private];
    let base_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();

    UserProfile {
        name: Some(format!("User {}", id)),
        looking_for: Some("roommate".to_string()),
        lifestyle: Some(LifestyleProfile {
            sleep_schedule: Some(sleep[id % 3]),
            cleanliness: Some(Cleanliness::SCALE[id % 3]),
            social_level: Some(social[(id / 3) % 3]),
            guest_frequency: Some(GuestFrequency::SCALE[id % 4]),
            smoking: Some(id % 7 == 0),
            has_pets: Some(id % 2 == 0),
        }),
        housing_preferences: Some(HousingPreferences {
            budget_range: Some(BudgetRange::new(
                600.0 + (id % 10) as f64 * 50.0,
                1000.0 + (id % 10) as f64 * 75.0,
            )),
            location: Some(Location {
                city: Some(if id % 4 == 0 { "Dallas" } else { "Austin" }.to_string()),
                state: Some("TX".to_string()),
                neighborhood: Some(format!("Area {}", id % 5)),
            }),
            move_in_date: base_date.checked_add_days(Days::new((id % 120) as u64)),
        }),
        ..UserProfile::new(id.to_string())
    }
}

fn create_target() -> UserProfile {
    UserProfile {
        id: "current_user".to_string(),
        ..create_candidate(1)
    }
}

fn bench_lifestyle_score(c: &mut Criterion) {
    let a = create_candidate(1).lifestyle.unwrap_or_default();
    let b = create_candidate(2).lifestyle.unwrap_or_default();

    c.bench_function("lifestyle_score", |bench| {
        bench.iter(|| lifestyle_score(black_box(&a), black_box(&b)));
    });
}

fn bench_compatibility(c: &mut Criterion) {
    let target = create_target();
    let candidate = create_candidate(5);

    c.bench_function("calculate_compatibility", |b| {
        b.iter(|| calculate_compatibility(black_box(&target), black_box(&candidate)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let target = create_target();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<UserProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_compatible_users", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_compatible_users(
                        black_box(candidates.clone()),
                        black_box(&target),
                        black_box(60),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_lifestyle_score, bench_compatibility, bench_matching);

criterion_main!(benches);
