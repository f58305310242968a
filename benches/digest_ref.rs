use criterion::{Criterion, criterion_group, criterion_main};
use md5::{Digest, Md5};
use std::hint::black_box;

pub fn bench_md5_crate(c: &mut Criterion) {
    let data = [0u8; 64];

    c.bench_function("md5::Md5 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Md5::new();
            hasher.update(black_box(&data));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_md5_crate);
criterion_main!(benches);
