use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meet_poll::{calculate_results, Candidate, Vote};

fn poll(candidates: usize, voters: usize) -> (Vec<Candidate>, Vec<Vote>) {
    let candidates: Vec<Candidate> = (0..candidates)
        .map(|i| Candidate::new(format!("participant_{}", i), format!("Participant {}", i)))
        .collect();
    let votes = (0..voters)
        .map(|i| Vote {
            voter_id: format!("voter_{}", i),
            voter_name: format!("Voter {}", i),
            selected_candidate_id: candidates[(i * 7) % candidates.len()].id.clone(),
            timestamp: i as i64,
        })
        .collect();
    (candidates, votes)
}

fn bench_calculate_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_results");
    for &(candidates, voters) in &[(10, 10), (50, 50), (50, 1_000), (500, 10_000)] {
        let (candidates_list, votes) = poll(candidates, voters);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", candidates, voters)),
            &(candidates_list, votes),
            |b, (candidates, votes)| b.iter(|| calculate_results(black_box(votes), black_box(candidates))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_calculate_results);
criterion_main!(benches);
