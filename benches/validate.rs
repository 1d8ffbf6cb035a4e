//! Benchmarks for EOF container validation.
//!
//! Covers the paths a validator sees in practice:
//! - Minimal accepted containers (version 1 and 2)
//! - Containers with long header tables
//! - Early rejections (prefix, version)
//! - Full body resolution through `EofContainer::parse`

extern crate eofscope;

use criterion::{criterion_group, criterion_main, Criterion};
use eofscope::{from_hex, validate_eof, EofContainer, Revision};
use std::hint::black_box;

/// Version 2 container with one code section, one data section and `tables` table sections.
fn container_with_tables(tables: usize) -> Vec<u8> {
    let mut code = vec![0xEF, 0xCA, 0xFE, 0x02, 0x01, 0x00, 0x01, 0x02, 0x00, 0x01];
    for _ in 0..tables {
        code.extend_from_slice(&[0x03, 0x00, 0x02]);
    }
    code.push(0x00);
    code.extend_from_slice(&[0xFE, 0xDA]);
    for _ in 0..tables {
        code.extend_from_slice(&[0x00, 0x01]);
    }
    code
}

/// Benchmark the smallest accepted version 1 container.
fn bench_minimal_v1(c: &mut Criterion) {
    let code = from_hex("EFCAFE01 010001 00 FE").unwrap();

    c.bench_function("validate_minimal_v1", |b| {
        b.iter(|| black_box(validate_eof(Revision::Shanghai, black_box(&code))));
    });
}

/// Benchmark a version 2 container with code, data and a table section.
fn bench_v2_all_kinds(c: &mut Criterion) {
    let code = from_hex("EFCAFE02 010001 020001 030002 00 FE DA 0001").unwrap();

    c.bench_function("validate_v2_all_kinds", |b| {
        b.iter(|| black_box(validate_eof(Revision::Shanghai, black_box(&code))));
    });
}

/// Benchmark a header table with many table sections.
fn bench_long_header_table(c: &mut Criterion) {
    let code = container_with_tables(1024);

    c.bench_function("validate_1024_tables", |b| {
        b.iter(|| black_box(validate_eof(Revision::Shanghai, black_box(&code))));
    });
}

/// Benchmark rejections that stop at the prefix.
fn bench_early_reject(c: &mut Criterion) {
    let bad_magic = from_hex("EFCAFF01 010001 00 FE").unwrap();
    let bad_version = from_hex("EFCAFE03 010001 00 FE").unwrap();

    c.bench_function("validate_bad_magic", |b| {
        b.iter(|| black_box(validate_eof(Revision::Shanghai, black_box(&bad_magic))));
    });
    c.bench_function("validate_bad_version", |b| {
        b.iter(|| black_box(validate_eof(Revision::Shanghai, black_box(&bad_version))));
    });
}

/// Benchmark full body resolution.
fn bench_parse_container(c: &mut Criterion) {
    let code = container_with_tables(64);

    c.bench_function("parse_64_tables", |b| {
        b.iter(|| {
            let container = EofContainer::parse(Revision::Shanghai, black_box(&code)).unwrap();
            black_box(container.sections().len())
        });
    });
}

criterion_group!(
    benches,
    bench_minimal_v1,
    bench_v2_all_kinds,
    bench_long_header_table,
    bench_early_reject,
    bench_parse_container
);
criterion_main!(benches);
