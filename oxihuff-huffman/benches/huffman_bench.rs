//! Performance benchmarks for oxihuff-huffman
//!
//! This benchmark suite evaluates:
//! - Compression/decompression throughput for different data patterns
//! - Scaling with input size
//! - Cost of the individual pipeline stages (counting, tree, codes)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff_huffman::{
    CodeTable, FrequencyTable, HuffmanConfig, HuffmanDecoder, HuffmanTree, compress, decompress,
};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Uniform data - a single byte value (one-bit codes)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat histogram, eight-bit codes
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - skewed histogram
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            data.extend_from_slice(&text[..remaining.min(text.len())]);
        }
        data
    }

    /// Two-symbol data - short codes, long runs
    pub fn binary_alphabet(size: usize) -> Vec<u8> {
        (0..size)
            .map(|i| if i % 7 == 0 { b'1' } else { b'0' })
            .collect()
    }
}

mod data_sizes {
    pub const SMALL: usize = 4 * 1024;
    pub const MEDIUM: usize = 64 * 1024;
    pub const LARGE: usize = 1024 * 1024;
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("binary", test_data::binary_alphabet as PatternGenerator),
];

/// Benchmark compression speed for different data types
fn bench_compression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_data_types");
    let size = data_sizes::MEDIUM;

    for (name, generator) in PATTERNS {
        let data = generator(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark decompression speed for different data types
fn bench_decompression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_data_types");
    let size = data_sizes::MEDIUM;

    for (name, generator) in PATTERNS {
        let container = compress(&generator(size)).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &container, |b, c| {
            b.iter(|| black_box(decompress(black_box(c)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark compression speed for different input sizes
fn bench_compression_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_sizes");

    for (name, size) in [
        ("4KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
        ("1MB", data_sizes::LARGE),
    ] {
        let data = test_data::text_like(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

/// Verified versus lenient decoding
fn bench_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("verification");
    let data = test_data::text_like(data_sizes::MEDIUM);
    let container = compress(&data).unwrap();

    group.throughput(Throughput::Bytes(data.len() as u64));
    for (name, config) in [
        ("strict", HuffmanConfig::STRICT),
        ("lenient", HuffmanConfig::LENIENT),
    ] {
        let decoder = HuffmanDecoder::with_config(config);
        group.bench_function(name, |b| {
            b.iter(|| black_box(decoder.decode(black_box(&container)).unwrap()));
        });
    }

    group.finish();
}

/// Individual pipeline stages
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let data = test_data::random(data_sizes::MEDIUM);
    let table = FrequencyTable::count(&data);
    let tree = HuffmanTree::build(&table).unwrap();

    group.bench_function("frequency_count", |b| {
        b.iter(|| black_box(FrequencyTable::count(black_box(&data))));
    });
    group.bench_function("tree_build_256", |b| {
        b.iter(|| black_box(HuffmanTree::build(black_box(&table))));
    });
    group.bench_function("code_table_256", |b| {
        b.iter(|| black_box(CodeTable::derive(black_box(&tree))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_data_types,
    bench_decompression_data_types,
    bench_compression_sizes,
    bench_verification,
    bench_stages,
);
criterion_main!(benches);
