use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use bruijn::graph::{build_graph, simplify_bubbles};
use bruijn::kmer::build_kmer_counts;
use bruijn::pipeline::assemble_reads;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reads tiled across a random genome, with one substitution in every
/// tenth read
fn generate_reads(genome_len: usize, read_len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(7);
    let bases = [b'A', b'C', b'G', b'T'];
    let genome: Vec<u8> = (0..genome_len).map(|_| bases[rng.gen_range(0..4)]).collect();

    (0..=genome_len - read_len)
        .step_by(3)
        .enumerate()
        .map(|(i, start)| {
            let mut read = genome[start..start + read_len].to_vec();
            if i % 10 == 0 {
                let pos = read_len / 2;
                let current = bases.iter().position(|&b| b == read[pos]).unwrap_or(0);
                read[pos] = bases[(current + 1) % 4];
            }
            String::from_utf8(read).unwrap()
        })
        .collect()
}

fn bench_kmer_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmer_counting");

    for genome_len in [1_000, 5_000, 20_000] {
        let reads = generate_reads(genome_len, 100);
        let total_bases: usize = reads.iter().map(|r| r.len()).sum();
        group.throughput(Throughput::Bytes(total_bases as u64));

        group.bench_with_input(BenchmarkId::new("k21", genome_len), &reads, |b, reads| {
            b.iter(|| black_box(build_kmer_counts(reads, 21)));
        });
    }

    group.finish();
}

fn bench_bubbles(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubbles");
    group.sample_size(20);

    for genome_len in [1_000, 5_000] {
        let counts = build_kmer_counts(generate_reads(genome_len, 100), 21);
        let graph = build_graph(&counts);

        group.bench_with_input(BenchmarkId::new("simplify", genome_len), &graph, |b, graph| {
            b.iter(|| {
                let mut graph = graph.clone();
                let mut rng = StdRng::seed_from_u64(9001);
                black_box(simplify_bubbles(&mut graph, &mut rng))
            });
        });
    }

    group.finish();
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");
    group.sample_size(10);

    let reads = generate_reads(5_000, 100);
    group.bench_function("end_to_end_5kb", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(9001);
            black_box(assemble_reads(&reads, 21, &mut rng).contigs.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_kmer_counting, bench_bubbles, bench_assembly);
criterion_main!(benches);
