use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_rs::{from_str, to_string};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Users {
    users: Vec<User>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Products {
    products: Vec<Product>,
}

fn benchmark_serialize_single_record(c: &mut Criterion) {
    let users = Users {
        users: vec![User {
            id: 123,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        }],
    };

    c.bench_function("serialize_single_record", |b| {
        b.iter(|| to_string(black_box(&users)))
    });
}

fn benchmark_deserialize_single_record(c: &mut Criterion) {
    let toon = "users[1]{id,name,email,active}:\n  123,Alice,alice@example.com,true\n";

    c.bench_function("deserialize_single_record", |b| {
        b.iter(|| from_str::<Users>(black_box(toon)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = Products {
            products: (0..*size)
                .map(|i| Product {
                    sku: format!("SKU{}", i),
                    name: format!("Product {}", i),
                    price: 9.99 + f64::from(i),
                    quantity: i,
                })
                .collect(),
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| to_string(black_box(products)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = Products {
            products: (0..*size)
                .map(|i| Product {
                    sku: format!("SKU{}", i),
                    name: format!("Product {}", i),
                    price: 9.99 + f64::from(i),
                    quantity: i,
                })
                .collect(),
        };
        let toon = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &toon, |b, toon| {
            b.iter(|| from_str::<Products>(black_box(toon)))
        });
    }
    group.finish();
}

fn benchmark_string_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_strings");

    let short = "short";
    let medium = "This is a medium length string with some content";
    let long = "This is a very long string that contains a lot of text and might require more processing time";

    group.bench_function("short_string", |b| b.iter(|| to_string(black_box(&short))));
    group.bench_function("medium_string", |b| {
        b.iter(|| to_string(black_box(&medium)))
    });
    group.bench_function("long_string", |b| b.iter(|| to_string(black_box(&long))));

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let users = Users {
        users: vec![User {
            id: 123,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        }],
    };

    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon_serialize", |b| {
        b.iter(|| toon_rs::to_string(black_box(&users)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&users)))
    });

    let toon_str = toon_rs::to_string(&users).unwrap();
    let json_str = serde_json::to_string(&users).unwrap();

    group.bench_function("toon_deserialize", |b| {
        b.iter(|| toon_rs::from_str::<Users>(black_box(&toon_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Users>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let users = Users {
        users: vec![User {
            id: 123,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        }],
    };

    c.bench_function("roundtrip_single_record", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&users)).unwrap();
            let _deserialized: Users = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_single_record,
    benchmark_deserialize_single_record,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_string_serialization,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
