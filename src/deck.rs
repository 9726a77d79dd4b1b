use rand::prelude::*;

use crate::card::{Card, N_CARDS, N_SUITS};

pub type CardDeck = [Card; N_CARDS as usize];

/// Every card exactly once, in ascending order.
#[must_use]
pub fn full_deck() -> CardDeck {
    core::array::from_fn(|i| Card::new(i as u8 / N_SUITS, i as u8 % N_SUITS))
}

#[must_use]
pub fn default_shuffle(seed: u64) -> CardDeck {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cards = full_deck();
    cards.shuffle(&mut rng);
    cards
}

/// A uniformly random card from the deck.
#[must_use]
pub fn draw_random<R: Rng>(cards: &CardDeck, rng: &mut R) -> Card {
    cards[rng.gen_range(0..cards.len())]
}
