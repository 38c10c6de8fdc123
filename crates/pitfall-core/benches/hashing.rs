// SPDX-License-Identifier: Apache-2.0

//! Benchmark contrasting the per-guess cost of the three hashing strategies.
//!
//! The numbers are the lesson: an unsalted SHA-256 guess costs nanoseconds,
//! a 100k-iteration PBKDF2 guess costs tens of milliseconds, and Argon2id
//! adds a memory bill on top. Attackers pay these costs per guess.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pitfall_core::password::{DEFAULT_ITERATIONS, Salt, hash_adaptive, hash_fast, hash_with_salt};

fn bench_fast_digest(c: &mut Criterion) {
    c.bench_function("hash_fast", |b| {
        b.iter(|| hash_fast(black_box(b"password123")));
    });
}

fn bench_salted_kdf(c: &mut Criterion) {
    let salt = Salt::generate().expect("generate salt");
    let mut group = c.benchmark_group("salted_kdf");
    group.sample_size(10);
    group.bench_function("pbkdf2_100k", |b| {
        b.iter(|| {
            hash_with_salt(
                black_box(b"password123"),
                salt.as_bytes(),
                DEFAULT_ITERATIONS,
            )
        });
    });
    group.finish();
}

fn bench_adaptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive");
    group.sample_size(10);
    group.bench_function("argon2id_default", |b| {
        b.iter(|| hash_adaptive(black_box(b"password123")));
    });
    group.finish();
}

criterion_group!(benches, bench_fast_digest, bench_salted_kdf, bench_adaptive);
criterion_main!(benches);
