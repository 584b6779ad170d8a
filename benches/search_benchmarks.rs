//! Performance benchmarks for address book search.
//!
//! These benchmarks measure search over books of different sizes:
//! - Name queries (case-folded comparison)
//! - Phone digit queries
//! - Empty queries that return every record

use address_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts with two phones each.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            // Names must be letters only, so encode the index in base 26
            let mut n = i;
            let mut name = String::from("Contact");
            loop {
                name.push((b'a' + (n % 26) as u8) as char);
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            let mut record = Record::new(name).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            record.add_phone(format!("555{:07}", i)).unwrap();
            record
        })
        .collect()
}

fn bench_search_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_name");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.search(black_box("contactab")));
        });
    }

    group.finish();
}

fn bench_search_by_phone(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_phone");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.search(black_box("5550000")));
        });
    }

    group.finish();
}

fn bench_search_empty_query(c: &mut Criterion) {
    let book = create_test_book(1_000);
    c.bench_function("search_empty_query_1000", |b| {
        b.iter(|| book.search(black_box("")));
    });
}

criterion_group!(
    benches,
    bench_search_by_name,
    bench_search_by_phone,
    bench_search_empty_query
);
criterion_main!(benches);
