use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tf_idf_similarity::Corpus;

const WORDS: &[&str] = &[
    "rust", "memory", "safety", "thread", "borrow", "checker", "compile", "trait", "generic",
    "lifetime", "async", "tokio", "serde", "vector", "corpus", "search", "index", "term",
];

/// deterministic synthetic documents (xorshift32)
fn synthetic_documents(count: usize, len: usize) -> Vec<String> {
    let mut state = 0x1234_5678_u32;
    (0..count)
        .map(|i| {
            let mut words = Vec::with_capacity(len + 1);
            words.push(format!("doc{i}"));
            for _ in 0..len {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                words.push(WORDS[state as usize % WORDS.len()].to_string());
            }
            words.join(" ")
        })
        .collect()
}

fn corpus_benchmark(c: &mut Criterion) {
    let texts = synthetic_documents(500, 200);

    c.bench_function("add_documents", |b| {
        b.iter(|| Corpus::with_documents(black_box(&texts)))
    });

    let corpus = Corpus::with_documents(&texts);

    c.bench_function("compare", |b| {
        b.iter(|| corpus.compare(black_box(&texts[0]), black_box(&texts[1])))
    });

    c.bench_function("tf_idf_for_document", |b| {
        b.iter(|| corpus.tf_idf_for_document(black_box(&texts[42])))
    });

    c.bench_function("tf_idf_vectors", |b| b.iter(|| corpus.tf_idf_vectors()));

    c.bench_function("most_similar", |b| {
        b.iter(|| corpus.most_similar(black_box(&texts[7]), 10))
    });
}

criterion_group!(benches, corpus_benchmark);
criterion_main!(benches);
