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
        drawing_from_deck,
        computing_rank_probabilities,
        canonicalizing_split_position,
        enumerating_split_branches,
        playing_naive_rounds,
        solving_dealer_only_position,
        solving_hard_sixteen_cold,
        solving_hard_sixteen_warm,
}

fn drawing_from_deck(c: &mut criterion::Criterion) {
    c.bench_function("draw 52 cards from a fresh Deck", |b| {
        b.iter(|| {
            let mut deck = Deck::new();
            while deck.draw().is_ok() {}
        })
    });
}

fn computing_rank_probabilities(c: &mut criterion::Criterion) {
    let table = Table::parse(SIXTEEN, 4).unwrap();
    c.bench_function("compute rank probabilities of a Deck", |b| {
        b.iter(|| table.deck().probabilities())
    });
}

fn canonicalizing_split_position(c: &mut criterion::Criterion) {
    let table = Table::parse(EIGHTS, 4).unwrap();
    let (_, child) = table.branches(0, Decision::Split).unwrap().remove(0);
    c.bench_function("canonicalize a split Position", |b| {
        b.iter(|| Position::from(child.clone()))
    });
}

fn enumerating_split_branches(c: &mut criterion::Criterion) {
    let table = Table::parse(EIGHTS, 4).unwrap();
    c.bench_function("enumerate SPLIT branches", |b| {
        b.iter(|| table.branches(0, Decision::Split).unwrap().len())
    });
}

fn playing_naive_rounds(c: &mut criterion::Criterion) {
    c.bench_function("play a random round with Naive", |b| {
        b.iter(|| Table::deal().unwrap().play(HERO, &Naive).unwrap())
    });
}

fn solving_dealer_only_position(c: &mut criterion::Criterion) {
    let mut table = Table::parse(TWENTY, 0).unwrap();
    table.stand(HERO, 0).unwrap();
    c.bench_function("solve a stood hand against the dealer", |b| {
        b.iter(|| Solver::new().unwrap().solve(&table).unwrap())
    });
}

fn solving_hard_sixteen_cold(c: &mut criterion::Criterion) {
    let table = Table::parse(SIXTEEN, 4).unwrap();
    c.bench_function("solve hard 16 against a 6 (cold memo)", |b| {
        b.iter(|| Solver::new().unwrap().solve(&table).unwrap())
    });
}

fn solving_hard_sixteen_warm(c: &mut criterion::Criterion) {
    let table = Table::parse(SIXTEEN, 4).unwrap();
    let solver = Solver::new().unwrap();
    solver.solve(&table).unwrap();
    c.bench_function("solve hard 16 against a 6 (warm memo)", |b| {
        b.iter(|| solver.solve(&table).unwrap())
    });
}

const SIXTEEN: &str = ",1F0C6,1F0A2,1F0B3,1F0D4,1F0A5,1F0B7,1F0D7,1F0A8,1F0B9,1F0AA,1F0B6";
const EIGHTS: &str = ",1F0C6,1F0A2,1F0B3,1F0D4,1F0A5,1F0B7,1F0D7,1F0A9,1F0B9,1F0A8,1F0B8";
const TWENTY: &str = ",1F0C6,1F0AA,1F0BA";

use blackjack::cards::*;
use blackjack::hands::*;
use blackjack::solver::*;
use blackjack::strategy::*;
use blackjack::table::*;
use blackjack::*;
