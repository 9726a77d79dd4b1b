use core::fmt;

use dheap::card::{Card, N_RANKS, N_SUITS};
use dheap::formatter::{NUMBERS, SYMBOLS};

use colored::{Color, Colorize};

pub(crate) const COLOR: [Color; N_SUITS as usize] =
    [Color::Black, Color::Red, Color::Red, Color::Black];

pub(crate) struct ColoredCard(Card);

impl fmt::Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (u, v) = self.0.split();
        write!(
            f,
            "{}{}",
            NUMBERS[u as usize].black().on_white(),
            SYMBOLS[v as usize].on_white().color(COLOR[v as usize])
        )
    }
}

/// Prints cards in rows of one rank-span each.
pub(crate) fn print_cards(cards: &[Card]) {
    for (i, &card) in cards.iter().enumerate() {
        print!("{}\t", ColoredCard(card));
        if (i + 1) % N_RANKS as usize == 0 {
            println!();
        }
    }
    if cards.len() % N_RANKS as usize != 0 {
        println!();
    }
}
