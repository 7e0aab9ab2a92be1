// Criterion benchmarks for DevLink Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use devlink_algo::core::{cosine_similarity, skills_to_vector, Ranker, SkillCatalog};
use devlink_algo::models::CandidateProfile;

const SKILL_POOL: &[&str] = &[
    "javascript",
    "python",
    "rust",
    "react",
    "node.js",
    "docker",
    "kubernetes",
    "postgresql",
    "aws",
    "machine learning",
];

fn create_candidate(id: usize) -> CandidateProfile {
    let skills = (0..(id % 5 + 1))
        .map(|i| SKILL_POOL[(id + i) % SKILL_POOL.len()].to_string())
        .collect();

    CandidateProfile {
        id: id.to_string(),
        first_name: Some(format!("User {}", id)),
        last_name: None,
        skills: Some(skills),
        age: Some(22 + (id % 20) as u8),
        gender: None,
        created_at: None,
        extra: serde_json::Map::new(),
    }
}

fn create_requester() -> CandidateProfile {
    CandidateProfile {
        id: "current_user".to_string(),
        first_name: Some("Current".to_string()),
        last_name: None,
        skills: Some(vec![
            "javascript".to_string(),
            "react".to_string(),
            "node.js".to_string(),
        ]),
        age: Some(27),
        gender: None,
        created_at: None,
        extra: serde_json::Map::new(),
    }
}

fn bench_vectorize(c: &mut Criterion) {
    let catalog = SkillCatalog::builtin();
    let skills: Vec<String> = SKILL_POOL.iter().map(|s| (*s).to_string()).collect();

    c.bench_function("skills_to_vector", |b| {
        b.iter(|| skills_to_vector(black_box(&catalog), black_box(Some(&skills))));
    });
}

fn bench_cosine_similarity(c: &mut Criterion) {
    let catalog = SkillCatalog::builtin();
    let a = skills_to_vector(
        &catalog,
        Some(&vec!["javascript".to_string(), "react".to_string()]),
    );
    let b = skills_to_vector(
        &catalog,
        Some(&vec!["javascript".to_string(), "rust".to_string()]),
    );

    c.bench_function("cosine_similarity", |bench| {
        bench.iter(|| cosine_similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_builtin_catalog();
    let requester = create_requester();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let candidates: Vec<CandidateProfile> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    ranker.rank_candidates(
                        black_box(&requester),
                        black_box(candidates.clone()),
                        black_box(0),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_vectorize, bench_cosine_similarity, bench_ranking);

criterion_main!(benches);
