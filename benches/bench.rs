// Criterion benchmarks for Mentor Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mentor_algo::core::{rank, Tokenizer};
use mentor_algo::models::{Document, SkillProfile};

const SKILL_POOL: &[&str] = &[
    "rust", "go", "python", "sql", "docker", "kubernetes", "react", "kafka", "terraform",
    "leadership", "public speaking", "machine learning", "data engineering", "security",
];

fn create_mentor(id: usize) -> SkillProfile {
    let skills = (0..3 + id % 5)
        .map(|j| SKILL_POOL[(id + j) % SKILL_POOL.len()].to_string())
        .collect();
    SkillProfile {
        id: id.to_string(),
        skills,
    }
}

fn create_mentee() -> SkillProfile {
    SkillProfile {
        id: "mentee".to_string(),
        skills: vec![
            "Rust".to_string(),
            "SQL".to_string(),
            "Docker".to_string(),
            "Leadership".to_string(),
        ],
    }
}

fn bench_rank(c: &mut Criterion) {
    let mentee = create_mentee();

    let mut group = c.benchmark_group("rank");

    for mentor_count in [10, 50, 100, 500, 1000].iter() {
        let mentors: Vec<SkillProfile> = (0..*mentor_count).map(create_mentor).collect();

        group.bench_with_input(
            BenchmarkId::new("skill_iou", mentor_count),
            mentor_count,
            |b, _| {
                b.iter(|| rank(black_box(&mentee), black_box(&mentors)));
            },
        );
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(["the", "a", "an", "and", "is", "in", "for", "with"]);
    let bio = "Senior Rust engineer with a decade of experience in distributed systems, \
               mentoring backend developers on databases, observability, and the craft of \
               code review. Happy to help with career growth!";

    c.bench_function("tokenize_bio", |b| {
        b.iter(|| tokenizer.tokenize(black_box(bio)));
    });
}

fn bench_text_pipeline(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(["the", "a", "an", "and", "is", "in", "for", "with"]);
    let reference = "Looking for a Rust mentor with database and systems experience";

    let mut group = c.benchmark_group("text_pipeline");

    for doc_count in [10, 50, 100].iter() {
        let documents: Vec<Document> = (0..*doc_count)
            .map(|i| Document {
                id: i.to_string(),
                text: format!(
                    "Mentor {} teaches {} and {} with a focus on practical projects",
                    i,
                    SKILL_POOL[i % SKILL_POOL.len()],
                    SKILL_POOL[(i + 3) % SKILL_POOL.len()],
                ),
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank_documents", doc_count),
            doc_count,
            |b, _| {
                b.iter(|| {
                    tokenizer
                        .rank_documents(black_box(reference), black_box(&documents))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rank, bench_tokenize, bench_text_pipeline);
criterion_main!(benches);
