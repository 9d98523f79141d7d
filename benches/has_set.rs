use criterion::{black_box, criterion_group, criterion_main, Criterion};
use set_engine::{Card, Deck, GameConfig, GameRng, GameSession, Table};

fn shuffled_table(size: usize) -> Table {
    let mut deck = Deck::standard();
    deck.shuffle(&mut GameRng::new(12345));
    Table::new(deck.draw_cards(size).unwrap())
}

/// Sixteen cards with no set among them: every triple is checked.
fn cap_table() -> Table {
    let cards: Vec<Card> = (0u8..16)
        .map(|bits| {
            Card::from_indices([bits >> 3 & 1, bits >> 2 & 1, bits >> 1 & 1, bits & 1]).unwrap()
        })
        .collect();
    Table::new(cards)
}

fn bench_has_set_twelve(c: &mut Criterion) {
    let table = shuffled_table(12);

    c.bench_function("has_set_12", |b| {
        b.iter(|| black_box(&table).has_set())
    });
}

fn bench_has_set_no_set(c: &mut Criterion) {
    let table = cap_table();

    c.bench_function("has_set_16_no_set", |b| {
        b.iter(|| black_box(&table).has_set())
    });
}

fn bench_find_all_sets(c: &mut Criterion) {
    let table = shuffled_table(15);

    c.bench_function("find_all_sets_15", |b| {
        b.iter(|| black_box(&table).find_all_sets())
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("full_playout", |b| {
        b.iter(|| {
            let config = GameConfig::new().with_seed(black_box(7));
            let mut session = GameSession::from_config(&config).unwrap();
            while let Some(slots) = session.hint() {
                session.claim(slots).unwrap();
            }
            session.table().len()
        })
    });
}

fn bench_clone(c: &mut Criterion) {
    let session = GameSession::from_config(&GameConfig::new().with_seed(7)).unwrap();

    c.bench_function("clone_session", |b| {
        b.iter(|| black_box(&session).clone())
    });
}

criterion_group!(
    benches,
    bench_has_set_twelve,
    bench_has_set_no_set,
    bench_find_all_sets,
    bench_playout,
    bench_clone,
);
criterion_main!(benches);
