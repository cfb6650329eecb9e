use criterion::criterion_main;

mod scaling;

criterion_main!(
    primitives::primitive_benches,
    containers::container_benches,
    scaling::scaling_benches,
);
