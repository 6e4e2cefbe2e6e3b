//! Performance benchmarks for snip

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snip::config::{Config, ScissorMarkers};
use snip::exec::PreviewExecutor;
use snip::interface::Tangler;
use snip::io::VirtualSink;
use snip::readers::ScissorExtractor;

fn generate_document(num_blocks: usize, lines_per_block: usize) -> String {
    let mut doc = String::from("# Benchmark Document\n\n");

    for i in 0..num_blocks {
        doc.push_str(&format!("Block {} writes a file.\n\n", i));
        doc.push_str(&format!("> File `out{}.txt`\n> ```\n", i % 10));
        for j in 0..lines_per_block {
            doc.push_str(&format!("> line {} of block {}\n", j, i));
        }
        doc.push_str("> ```\n\n");

        doc.push_str("> Run\n> ```sh\n");
        for j in 0..lines_per_block {
            doc.push_str(&format!("> echo {}\n", j));
        }
        doc.push_str("> ```\n\n");
    }

    doc
}

fn generate_scissored(num_ranges: usize, lines_per_range: usize) -> String {
    let markers = ScissorMarkers::default();
    let mut doc = String::new();
    for i in 0..num_ranges {
        doc.push_str(&format!("Prose before range {}.\n", i));
        doc.push_str(&markers.format_start());
        doc.push('\n');
        for j in 0..lines_per_range {
            doc.push_str(&format!("program line {}\n", j));
        }
        doc.push_str(&markers.format_end());
        doc.push('\n');
    }
    doc
}

fn bench_tangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangle");
    let config = Config::default();

    for num_blocks in [10, 50, 100, 500].iter() {
        let doc = generate_document(*num_blocks, 10);
        group.bench_with_input(BenchmarkId::new("blocks", num_blocks), &doc, |b, doc| {
            b.iter(|| {
                let executor = PreviewExecutor::with_writer(4, std::io::sink());
                let mut tangler = Tangler::new(&config, VirtualSink::new(), executor).unwrap();
                tangler.tangle_str(black_box(doc)).unwrap();
                tangler.report().runs
            })
        });
    }

    group.finish();
}

fn bench_scissors(c: &mut Criterion) {
    let mut group = c.benchmark_group("scissors");
    let extractor = ScissorExtractor::new(&ScissorMarkers::default()).unwrap();

    for num_ranges in [10, 100, 1000].iter() {
        let doc = generate_scissored(*num_ranges, 20);
        group.bench_with_input(BenchmarkId::new("ranges", num_ranges), &doc, |b, doc| {
            b.iter(|| extractor.extract(black_box(doc)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tangle, bench_scissors);

criterion_main!(benches);
