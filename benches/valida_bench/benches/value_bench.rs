//! Field validation benchmarks
//!
//! Benchmarks condition checks and wrapper reads for single values.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use valida::prelude::*;

enum Username {}

impl ValueSpecification for Username {
    type Value = String;

    fn conditions() -> Vec<Condition<String>> {
        vec![conditions::non_empty(), conditions::email()]
    }
}

enum Password {}

impl ValueSpecification for Password {
    type Value = String;

    fn conditions() -> Vec<Condition<String>> {
        vec![
            conditions::length_between(8, 30),
            conditions::min_count_of("Has at least 1 capital character", 1, char::is_uppercase),
            conditions::min_count_of("Has at least 4 lower characters", 4, char::is_lowercase),
            conditions::min_count_of("Has at least 1 digit character", 1, |c| c.is_ascii_digit()),
            conditions::each_char("Allowed characters only", |c| c.is_alphanumeric() || c == ' '),
        ]
    }
}

/// Benchmark single-field validation
fn bench_field_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validation");

    // Valid value, every condition passes
    group.bench_function("username_valid", |b| {
        let username = Username::required_with("john@example.com".to_string());
        b.iter(|| black_box(&username).validate())
    });

    // Invalid value, the error and its report are built
    group.bench_function("username_invalid", |b| {
        let username = Username::required_with("not-an-email".to_string());
        b.iter(|| black_box(&username).validate())
    });

    // Absent mandatory value
    group.bench_function("username_absent", |b| {
        let username = Username::required();
        b.iter(|| black_box(&username).validate())
    });

    // Character-class conditions
    group.bench_function("password_valid", |b| {
        let password = Password::required_with("Secret pass1".to_string());
        b.iter(|| black_box(&password).validate())
    });

    group.finish();
}

/// Benchmark wrapper reads
fn bench_value_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_reads");

    group.bench_function("value", |b| {
        let username = Username::required_with("john@example.com".to_string());
        b.iter(|| black_box(&username).value())
    });

    group.bench_function("valid_value", |b| {
        let username = Username::required_with("john@example.com".to_string());
        b.iter(|| black_box(&username).valid_value())
    });

    group.bench_function("plain_value", |b| {
        let answer = 42u32.wrapped();
        b.iter(|| black_box(&answer).valid_value())
    });

    group.finish();
}

criterion_group!(benches, bench_field_validation, bench_value_reads);

criterion_main!(benches);
