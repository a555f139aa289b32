use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use immutable_struct_core::{Mapping, StructType, Value, mapping};
use std::collections::HashMap;

fn wide_type(width: usize) -> StructType {
    StructType::define("Wide", (0..width).map(|i| format!("f{i}"))).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    immutable_struct_observability::init();
    let mut group = c.benchmark_group("construction");

    for width in [2usize, 8, 32] {
        let ty = wide_type(width);
        let values: Vec<Value> = (0..width as i64).map(Value::Int).collect();
        let mapping: Mapping = ty
            .fields()
            .iter()
            .map(|f| f.to_string())
            .zip(values.iter().cloned())
            .collect();

        group.bench_with_input(BenchmarkId::new("positional", width), &values, |b, values| {
            b.iter(|| ty.from_fields(black_box(values.clone())).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mapping", width), &mapping, |b, mapping| {
            b.iter(|| ty.from_mapping(black_box(mapping)).unwrap())
        });
    }

    group.finish();
}

fn bench_merge_and_lookup(c: &mut Criterion) {
    let ty = StructType::define("Person", ["name", "email", "age"]).unwrap();
    let person = ty
        .from_fields([Value::from("Adam"), Value::from("adam@example.com"), Value::from(40)])
        .unwrap();
    let overrides = mapping! { "email" => "other@example.com" };

    c.bench_function("merge/one_field", |b| {
        b.iter(|| person.merge(black_box(&overrides)).unwrap())
    });

    let lookup: HashMap<_, _> = (0..1_000)
        .map(|i| (person.merge(&mapping! { "age" => i }).unwrap(), i))
        .collect();
    let probe = person.merge(&mapping! { "age" => 500 }).unwrap();

    c.bench_function("hash_map/lookup", |b| b.iter(|| lookup.get(black_box(&probe))));
}

criterion_group!(benches, bench_construction, bench_merge_and_lookup);
criterion_main!(benches);
