//! Entity validation benchmarks
//!
//! Benchmarks the aggregator over a small record, valid and invalid, and the
//! JSON rendering of the resulting error.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use valida::prelude::*;

enum FirstName {}

impl ValueSpecification for FirstName {
    type Value = String;

    fn conditions() -> Vec<Condition<String>> {
        vec![conditions::non_empty()]
    }
}

enum Username {}

impl ValueSpecification for Username {
    type Value = String;

    fn conditions() -> Vec<Condition<String>> {
        vec![conditions::non_empty(), conditions::email()]
    }
}

enum Experience {}

impl ValueSpecification for Experience {
    type Value = u32;

    fn conditions() -> Vec<Condition<u32>> {
        vec![conditions::in_range(0, 80)]
    }
}

#[derive(Entity)]
struct User {
    first_name: Required<FirstName>,
    last_name: NonRequiredBase<String>,
    username: Required<Username>,
    experience: NonRequired<Experience>,
    is_vip: NonRequiredBase<bool>,
}

fn valid_user() -> User {
    User {
        first_name: FirstName::required_with("John".to_string()),
        last_name: NonRequiredBase::new(),
        username: Username::required_with("john@example.com".to_string()),
        experience: Experience::non_required_with(5),
        is_vip: true.wrapped_optional(),
    }
}

fn invalid_user() -> User {
    User {
        first_name: FirstName::required(),
        last_name: NonRequiredBase::new(),
        username: Username::required_with("not-an-email".to_string()),
        experience: Experience::non_required_with(99),
        is_vip: NonRequiredBase::new(),
    }
}

/// Benchmark whole-record validation
fn bench_entity_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_validation");

    group.bench_function("valid", |b| {
        let user = valid_user();
        b.iter(|| black_box(&user).validate())
    });

    // Three issues plus the aggregated report
    group.bench_function("invalid", |b| {
        let user = invalid_user();
        b.iter(|| black_box(&user).validate())
    });

    group.bench_function("members", |b| {
        let user = valid_user();
        b.iter(|| black_box(&user).members().len())
    });

    group.finish();
}

/// Benchmark error serialization
fn bench_error_serialization(c: &mut Criterion) {
    let Err(error) = invalid_user().validate() else {
        return;
    };

    let mut group = c.benchmark_group("error_serialization");

    group.bench_function("to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&error)))
    });

    group.bench_function("display", |b| {
        b.iter(|| black_box(&error).to_string())
    });

    group.finish();
}

criterion_group!(benches, bench_entity_validation, bench_error_serialization);

criterion_main!(benches);
