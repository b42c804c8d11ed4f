use contextual::{similarity, Classifier, TagSet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const VOCABULARY: &[&str] = &[
    "rust", "programming", "football", "cooking", "travel", "finance", "music", "science",
    "health", "politics", "gaming", "movies", "books", "startup", "market", "weather",
];

const CATEGORIES: &[&str] = &["Tech", "Sports", "Food", "Travel", "Business", "Culture"];

fn setup_benchmark_classifier(entry_count: usize) -> Classifier {
    let mut builder = Classifier::builder().with_k(5).with_min_similarity(0.1);
    for i in 0..entry_count {
        let tags: Vec<String> = (0..4)
            .map(|j| format!("{}{}", VOCABULARY[(i * 7 + j * 3) % VOCABULARY.len()], i % 13))
            .collect();
        builder = builder.add_entry(tags, CATEGORIES[i % CATEGORIES.len()]);
    }
    builder.build().unwrap()
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("Similarity");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let query = TagSet::new(["rust", "programming", "systems"]);
    let exact = TagSet::new(["rust", "programming", "systems"]);
    let partial = TagSet::new(["rustacean", "programmer", "operating systems", "kernel"]);
    let disjoint = TagSet::new(["football", "cooking", "travel", "music"]);

    group.bench_function("exact", |b| b.iter(|| similarity(black_box(&query), black_box(&exact))));
    group.bench_function("partial", |b| b.iter(|| similarity(black_box(&query), black_box(&partial))));
    group.bench_function("disjoint", |b| b.iter(|| similarity(black_box(&query), black_box(&disjoint))));

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Test scaling with number of stored entries
    let entry_counts = [10, 100, 1_000, 5_000];
    for &count in &entry_counts {
        let classifier = setup_benchmark_classifier(count);
        group.bench_function(format!("entries_{}", count), |b| {
            b.iter(|| classifier.predict(black_box(&["rust3", "music", "finance10"])))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_scaling);
criterion_main!(benches);
