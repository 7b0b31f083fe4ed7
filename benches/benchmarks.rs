use felt::cards::deck::Deck;
use felt::cards::hand::Hand;
use felt::cards::strength::Strength;
use felt::table::decision::Decision;
use felt::table::game::Game;
use felt::table::player::Player;
use felt::table::spot::Spot;
use std::rc::Rc;

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
        evaluating_a_seven_card_hand,
        playing_a_checked_down_hand,
}

#[derive(Debug)]
struct Caller;
impl Player for Caller {
    fn act(&self, _: &Spot) -> Decision {
        Decision::CheckOrCall
    }
}

fn evaluating_a_seven_card_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card hand", |b| {
        let mut deck = Deck::shuffled();
        let cards = (0..7).map(|_| deck.draw()).collect::<Vec<_>>();
        let hand = Hand::from(cards);
        b.iter(|| Strength::from(hand))
    });
}

fn playing_a_checked_down_hand(c: &mut criterion::Criterion) {
    c.bench_function("play a 6-max hand to showdown", |b| {
        b.iter(|| {
            let entries = (0..6)
                .map(|_| (300, Rc::new(Caller) as Rc<dyn Player>))
                .collect();
            Game::new(entries, 5, 10).unwrap().play()
        })
    });
}
