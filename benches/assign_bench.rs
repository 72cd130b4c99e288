//! Criterion benchmarks for u-assign allocation strategies.
//!
//! Uses seeded synthetic cohorts shaped like a campus placement drive:
//! a handful of slot types with merit floors, category filters and
//! qualification requirements, and candidates ranking every slot type.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use u_assign::models::{Candidate, SlotType};
use u_assign::{allocate, Strategy};

const CATEGORIES: [&str; 5] = ["CSE", "ECE", "MECH", "CIVIL", "EEE"];
const SKILLS: [&str; 9] = [
    "Python",
    "Java",
    "C++",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Data Structures",
    "Machine Learning",
];

// ===========================================================================
// Cohort generation
// ===========================================================================

fn slot_types(rng: &mut StdRng, count: usize, cohort: usize) -> Vec<SlotType> {
    (0..count)
        .map(|i| {
            let categories: Vec<&str> = CATEGORIES
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.6))
                .collect();
            let required_count = rng.random_range(0..3);
            let required: Vec<&str> = SKILLS
                .choose_multiple(rng, required_count)
                .copied()
                .collect();
            let capacity = rng.random_range(1..=(cohort / count).max(2) as i64);
            SlotType::new(format!("c{i}"), format!("Company {i}"), capacity)
                .with_min_merit(rng.random_range(6.0..9.0))
                .with_allowed_categories(categories)
                .with_required_qualifications(required)
        })
        .collect()
}

fn candidates(rng: &mut StdRng, count: usize, slot_types: &[SlotType]) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            let mut preferences: Vec<String> = slot_types.iter().map(|s| s.id.clone()).collect();
            preferences.shuffle(rng);
            let skill_count = rng.random_range(4..8);
            let skills: Vec<&str> = SKILLS.choose_multiple(rng, skill_count).copied().collect();
            Candidate::new(
                format!("s{i}"),
                format!("Student {i}"),
                CATEGORIES[rng.random_range(0..CATEGORIES.len())],
                (rng.random_range(600..=1000) as f64) / 100.0,
            )
            .with_qualifications(skills)
            .with_preferences(preferences)
        })
        .collect()
}

fn cohort(size: usize, slot_count: usize) -> (Vec<Candidate>, Vec<SlotType>) {
    let mut rng = StdRng::seed_from_u64(42);
    let slots = slot_types(&mut rng, slot_count, size);
    let people = candidates(&mut rng, size, &slots);
    (people, slots)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_strategy(c: &mut Criterion, strategy: Strategy) {
    let mut group = c.benchmark_group(format!("allocate_{strategy}"));
    group.sample_size(20);

    for (size, slot_count) in [(40usize, 6usize), (500, 20), (5_000, 60)] {
        let input = cohort(size, slot_count);
        group.bench_with_input(
            BenchmarkId::new(format!("n{size}_s{slot_count}"), size),
            &input,
            |b, (people, slots)| {
                b.iter(|| {
                    let result = allocate(black_box(people), black_box(slots), strategy);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    bench_strategy(c, Strategy::Greedy);
}

fn bench_stable(c: &mut Criterion) {
    bench_strategy(c, Strategy::Stable);
}

criterion_group!(benches, bench_greedy, bench_stable);
criterion_main!(benches);
