use criterion::{Criterion, criterion_group, criterion_main};
use fortuity::rng::{HostRandomGenerator, OsRandomGenerator};
use fortuity::{Alea, RandomGenerator};
use std::hint::black_box;

pub fn bench_alea(c: &mut Criterion) {
    let mut random = Alea::new([0]);

    c.bench_function("alea fraction", |b| b.iter(|| black_box(random.fraction())));
    c.bench_function("alea id", |b| b.iter(|| black_box(random.id())));
    c.bench_function("alea uuid", |b| b.iter(|| black_box(random.uuid())));
}

pub fn bench_secure(c: &mut Criterion) {
    let mut os = OsRandomGenerator::new().unwrap();
    let mut host = HostRandomGenerator::new().unwrap();

    c.bench_function("os fraction", |b| b.iter(|| black_box(os.fraction())));
    c.bench_function("os hex_string 32", |b| {
        b.iter(|| black_box(os.hex_string(black_box(32))))
    });
    c.bench_function("os uuid", |b| b.iter(|| black_box(os.uuid())));
    c.bench_function("host fraction", |b| b.iter(|| black_box(host.fraction())));
    c.bench_function("host id", |b| b.iter(|| black_box(host.id())));
}

criterion_group!(benches, bench_alea, bench_secure);
criterion_main!(benches);
