//! Benchmarks for scanning and word-by-word consumption

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordedge_core::{consume_first_word, scan, ScanDirection};

/// Generate test text with roughly `words` words
fn generate_test_text(words: usize) -> String {
    let base_text = "Hello, world! (This) is a test... with punctuation; ";
    let base_words = 8;
    base_text.repeat(words.div_ceil(base_words))
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for words in [16, 256, 4096] {
        let text = generate_test_text(words);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for direction in [ScanDirection::Forward, ScanDirection::Backward] {
            group.bench_with_input(
                BenchmarkId::new(direction.as_str(), words),
                &text,
                |b, text| b.iter(|| scan(black_box(text), direction)),
            );
        }
    }

    group.finish();
}

fn benchmark_consume_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("consume_loop");

    for words in [16, 256] {
        let text = generate_test_text(words);

        for direction in [ScanDirection::Forward, ScanDirection::Backward] {
            group.bench_with_input(
                BenchmarkId::new(direction.as_str(), words),
                &text,
                |b, text| {
                    b.iter(|| {
                        let mut buffer = text.clone();
                        let mut table = scan(&buffer, direction);
                        while !table.is_empty() {
                            consume_first_word(&mut buffer, &mut table, direction).unwrap();
                        }
                        black_box(buffer)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_scan, benchmark_consume_loop);
criterion_main!(benches);
