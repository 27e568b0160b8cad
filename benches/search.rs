//! Benchmarks for corpus indexing and query answering.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use folio::index::SuffixIndex;
use folio::{SearchConfig, Searcher};

/// Builds a corpus of numbered stanzas and labeled speeches in the real
/// corpus shape, CRLF line endings included.
fn synthetic_corpus(stanzas: usize, speeches: usize) -> String {
    let mut corpus = String::from("Contents\r\n\r\nTHE SONNETS\r\n\r\n");

    corpus.push_str("THE SONNETS");
    for n in 0..stanzas {
        corpus.push_str(&format!(
            "\r\n\r\n{}\r\n\r\nShall I compare thee to a summer's day, take {n}?\r\n\
             Thou art more lovely and more temperate still,",
            10 + (n % 80)
        ));
    }
    corpus.push_str("\r\n\r\nTHE END");

    for n in 0..speeches {
        let speaker = if n % 2 == 0 { "MACBETH" } else { "BANQUO" };
        corpus.push_str(&format!(
            "\r\n\r\n{speaker}. So foul and fair a day I have not seen, scene {n}."
        ));
    }
    corpus.push_str("\r\n\r\nFINIS");

    corpus
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(300, 300);
    let text = corpus.clone().into_bytes();

    let mut group = c.benchmark_group("build");
    group.bench_function("searcher_from_bytes", |b| {
        b.iter(|| {
            Searcher::from_bytes(black_box(corpus.as_bytes()), SearchConfig::default()).unwrap()
        })
    });
    group.bench_function("suffix_index", |b| {
        b.iter_batched(
            || text.clone(),
            SuffixIndex::build,
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let corpus = synthetic_corpus(300, 300);
    let searcher = Searcher::from_bytes(corpus.as_bytes(), SearchConfig::default()).unwrap();
    let index = SuffixIndex::build(corpus.clone().into_bytes());

    let mut group = c.benchmark_group("search");
    group.bench_function("lookup_common_word", |b| {
        b.iter(|| black_box(index.lookup(b"day")))
    });
    group.bench_function("common_word", |b| {
        // 600 matches, one per stanza and speech.
        b.iter(|| black_box(searcher.search("day")))
    });
    group.bench_function("single_match", |b| {
        b.iter(|| black_box(searcher.search("take 123?")))
    });
    group.bench_function("no_match", |b| {
        b.iter(|| black_box(searcher.search("xylophone")))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
