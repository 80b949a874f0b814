use criterion::{black_box, criterion_group, criterion_main, Criterion};
use schemematch_core::{ApplicantProfile, Criteria, MatchingEngine, SchemeRecord};

const CATEGORIES: &[&str] = &["farmer", "student", "woman", "sc", "st", "general"];
const TYPES: &[&str] = &["Agriculture", "Education", "Pension", "Health", "Housing"];

fn synthetic_catalog(n: u64) -> Vec<SchemeRecord> {
    (0..n)
        .map(|i| {
            let category = CATEGORIES[(i as usize) % CATEGORIES.len()];
            let scheme_type = TYPES[(i as usize) % TYPES.len()];
            SchemeRecord::new(i, format!("{} scheme {}", scheme_type, i))
                .with_type(scheme_type)
                .with_eligibility([
                    format!("Applicants from the {} community", category),
                    format!("Support for {} needs in district {}", scheme_type.to_lowercase(), i % 40),
                ])
                .with_criteria(
                    Criteria::default()
                        .with_categories([category])
                        .with_max_income(100000.0 + (i % 7) as f64 * 50000.0),
                )
                .with_benefits(["cash transfer"])
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000);
    c.bench_function("build_engine_1k", |b| {
        b.iter(|| MatchingEngine::from_schemes(black_box(catalog.clone())))
    });
}

fn bench_match(c: &mut Criterion) {
    let engine = MatchingEngine::from_schemes(synthetic_catalog(1_000));
    let profile = ApplicantProfile::new("Ramesh", 45, Some(120000.0), "Farmer", "Uttar Pradesh", "farmer")
        .with_need("agriculture support");

    c.bench_function("match_profile_1k", |b| {
        b.iter(|| engine.match_profile(black_box(&profile)).len())
    });
}

criterion_group!(benches, bench_build, bench_match);
criterion_main!(benches);
