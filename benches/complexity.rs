use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dict_core::{Backend, Dictionary, PrunePolicy, WordFrequency};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const SIZES: [usize; 3] = [1_000, 5_000, 20_000];

fn corpus(n: usize) -> Vec<WordFrequency> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = HashSet::with_capacity(n);
    let mut entries = Vec::with_capacity(n);
    while entries.len() < n {
        let len = rng.gen_range(3..=9);
        let word: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
        if seen.insert(word.clone()) {
            if let Ok(entry) = WordFrequency::new(word, rng.gen_range(1..1_000_000)) {
                entries.push(entry);
            }
        }
    }
    entries
}

fn built(backend: Backend, entries: &[WordFrequency]) -> Box<dyn Dictionary> {
    let mut dict = backend.create(PrunePolicy::Retain);
    dict.build_dictionary(entries.to_vec())
        .unwrap_or_else(|err| panic!("{backend} rejected benchmark corpus: {err}"));
    assert_eq!(dict.len(), entries.len());
    dict
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in SIZES {
        let entries = corpus(n);
        for backend in Backend::ALL {
            group.bench_with_input(BenchmarkId::new(backend.name(), n), &entries, |b, entries| {
                b.iter(|| black_box(built(backend, entries)))
            });
        }
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for n in SIZES {
        let entries = corpus(n);
        let probes: Vec<&str> = entries.iter().step_by(n / 100).map(|e| e.word()).collect();
        for backend in Backend::ALL {
            let dict = built(backend, &entries);
            group.bench_function(BenchmarkId::new(backend.name(), n), |b| {
                b.iter(|| {
                    for word in &probes {
                        black_box(dict.search(word));
                    }
                })
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("autocomplete");
    for n in SIZES {
        let entries = corpus(n);
        for backend in Backend::ALL {
            let dict = built(backend, &entries);
            group.bench_function(BenchmarkId::new(backend.name(), n), |b| {
                b.iter(|| {
                    for prefix in ["a", "ke", "zqx", ""] {
                        black_box(dict.autocomplete(prefix));
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_delete");
    for n in SIZES {
        let entries = corpus(n);
        let extra: Vec<WordFrequency> = (0..50)
            .filter_map(|i| WordFrequency::new(format!("zz{i:04}"), i).ok())
            .collect();
        for backend in Backend::ALL {
            group.bench_function(BenchmarkId::new(backend.name(), n), |b| {
                b.iter_batched(
                    || built(backend, &entries),
                    |mut dict| {
                        for entry in &extra {
                            black_box(dict.add_word_frequency(entry.clone()));
                        }
                        for entry in &extra {
                            black_box(dict.delete_word(entry.word()));
                        }
                        dict
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_mutations);
criterion_main!(benches);
