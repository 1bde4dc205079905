use railbird::Arbitrary;
use railbird::analysis::draws;
use railbird::analysis::equity;
use railbird::analysis::outs;
use railbird::cards::deck::Deck;
use railbird::cards::evaluator::Evaluator;
use railbird::cards::hand::Hand;
use railbird::cards::hole::Hole;
use railbird::cards::strength::Strength;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        counting_outs_on_the_flop,
        detecting_draws_on_the_flop,
        simulating_headsup_equity,
}

fn river(rng: &mut SmallRng) -> Hand {
    Deck::new().deal(7, rng)
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hand = river(rng);
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn counting_outs_on_the_flop(c: &mut criterion::Criterion) {
    c.bench_function("count outs on a Flop", |b| {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        let hole = Hole::from((deck.draw(rng), deck.draw(rng)));
        let board = deck.deal(3, rng);
        b.iter(|| outs::count_outs(hole, board))
    });
}

fn detecting_draws_on_the_flop(c: &mut criterion::Criterion) {
    c.bench_function("detect draws on a Flop", |b| {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut deck = Deck::new();
        let hole = Hole::from((deck.draw(rng), deck.draw(rng)));
        let board = deck.deal(3, rng);
        b.iter(|| draws::detect_draws(hole, board))
    });
}

fn simulating_headsup_equity(c: &mut criterion::Criterion) {
    c.bench_function("simulate 1000 trials of heads-up equity", |b| {
        let hole = Hole::random();
        let ref mut rng = SmallRng::seed_from_u64(3);
        b.iter(|| equity::monte_carlo(hole, Hand::empty(), 1, 1000, &[], rng))
    });
}
