use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dom::workload::{
    create_elements, restructure_tree, ATTRS_PER_ELEMENT, ELEMENT_COUNT, RESTRUCTURE_FAN_OUT,
    RESTRUCTURE_PARENTS,
};
use dom::ElementRegistry;

fn bench_create_elements(c: &mut Criterion) {
    c.bench_function("create 10k elements x 30 attrs", |b| {
        b.iter_batched(
            ElementRegistry::new,
            |mut registry| {
                create_elements(&mut registry, ELEMENT_COUNT, ATTRS_PER_ELEMENT);
                black_box(registry.element_count())
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_restructure(c: &mut Criterion) {
    c.bench_function("restructure 100 parents x 99 children", |b| {
        b.iter_batched(
            || {
                let mut registry = ElementRegistry::with_capacity(ELEMENT_COUNT);
                create_elements(&mut registry, ELEMENT_COUNT, ATTRS_PER_ELEMENT);
                registry
            },
            |mut registry| {
                black_box(restructure_tree(
                    &mut registry,
                    RESTRUCTURE_PARENTS,
                    RESTRUCTURE_FAN_OUT,
                ))
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_create_elements, bench_restructure);
criterion_main!(benches);
