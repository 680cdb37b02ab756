// ABOUTME: Criterion benchmarks for the deterministic risk scoring pipeline
// ABOUTME: Measures individual scorers and the full score_profile pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for risk scoring.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

mod common;

use common::fixtures::{generate_profiles, ProfileBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_health_risk::assessment::HealthAssessmentService;
use pierre_health_risk::scoring::findrisc::calculate_diabetes_risk;
use pierre_health_risk::scoring::framingham::calculate_cardiovascular_risk;
use pierre_health_risk::scoring::score_profile;
use pierre_health_risk::scoring::screening::cancer_screening;
use tokio::runtime::Runtime;

fn bench_scorers(c: &mut Criterion) {
    let profiles = generate_profiles(ProfileBatchSize::Small);
    let mut group = c.benchmark_group("scorers");

    group.bench_function("findrisc", |b| {
        b.iter(|| {
            for profile in &profiles {
                black_box(calculate_diabetes_risk(black_box(profile)));
            }
        });
    });

    group.bench_function("framingham", |b| {
        b.iter(|| {
            for profile in &profiles {
                black_box(calculate_cardiovascular_risk(black_box(profile)));
            }
        });
    });

    group.bench_function("screening", |b| {
        b.iter(|| {
            for profile in &profiles {
                black_box(cancer_screening(profile.age, profile.gender));
            }
        });
    });

    group.finish();
}

fn bench_score_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_profile");

    for size in [ProfileBatchSize::Small, ProfileBatchSize::Medium] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(profiles.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(profiles.len()),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    for profile in profiles {
                        black_box(score_profile(black_box(profile)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_offline_assessment(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let service = &HealthAssessmentService::offline();
    let profiles = &generate_profiles(ProfileBatchSize::Small);

    c.bench_function("offline_assessment", |b| {
        b.to_async(&runtime).iter(|| async move {
            for profile in profiles {
                black_box(service.assess(black_box(profile)).await);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_scorers,
    bench_score_profile,
    bench_offline_assessment
);
criterion_main!(benches);
