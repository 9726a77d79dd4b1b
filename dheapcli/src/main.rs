mod tui;

use std::num::NonZeroUsize;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use dheap::deck::{default_shuffle, draw_random};
use dheap::heap::DHeap;
use dheap::pqueue::PriorityQueue;
use dheap::sort::d_heapsort;
use rand::prelude::*;

use crate::tui::print_cards;

#[derive(Args, Clone, Copy)]
struct Demo {
    /// Deck shuffle seed
    seed: u64,

    /// Heap branching factor
    #[arg(short, long, default_value = "4")]
    d: NonZeroUsize,
}

fn heap_demo(demo: &Demo) {
    let deck = default_shuffle(demo.seed);

    let mut heap = DHeap::with_capacity(demo.d, deck.len());
    for &card in &deck {
        heap.insert(card);
    }

    let mut drawn = Vec::with_capacity(deck.len());
    while let Some(card) = heap.extract_min() {
        drawn.push(card);
    }
    print_cards(&drawn);
}

fn queue_demo(demo: &Demo) {
    let deck = default_shuffle(demo.seed);

    let mut queue = PriorityQueue::with_capacity(demo.d, deck.len());
    for &card in &deck {
        queue.insert(card);
    }

    let mut drawn = Vec::with_capacity(deck.len());
    while let Some(card) = queue.extract_max() {
        drawn.push(card);
    }
    print_cards(&drawn);
}

fn heapsort_demo(demo: &Demo) {
    let mut deck = default_shuffle(demo.seed);
    d_heapsort(&mut deck, demo.d);
    print_cards(&deck);
}

fn benchmark(demo: &Demo) {
    const ROUNDS: u64 = 100;
    const KEYS_PER_ROUND: u64 = 1024;

    let mut rng = StdRng::seed_from_u64(demo.seed);
    let mut heap = DHeap::with_capacity(demo.d, KEYS_PER_ROUND as usize);

    let now = Instant::now();
    for _ in 0..ROUNDS {
        for _ in 0..KEYS_PER_ROUND {
            heap.insert(rng.gen::<u64>());
        }
        while let Some(key) = heap.extract_min() {
            std::hint::black_box(key);
        }
    }

    let total_ops = 2 * ROUNDS * KEYS_PER_ROUND;
    println!(
        "{} {} op/s",
        total_ops,
        (total_ops as f64) / now.elapsed().as_secs_f64()
    );
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shuffled deck
    Print { seed: u64 },

    /// Print one random card from the shuffled deck
    Draw { seed: u64 },

    /// Insert the shuffled deck into a d-ary heap and extract ascending
    Sort {
        #[command(flatten)]
        demo: Demo,
    },

    /// Run the deck through a priority queue and extract descending
    Queue {
        #[command(flatten)]
        demo: Demo,
    },

    /// Sort the shuffled deck in place with d-ary heapsort
    Heapsort {
        #[command(flatten)]
        demo: Demo,
    },

    /// Measure insert/extract throughput on random keys
    Bench {
        #[command(flatten)]
        demo: Demo,
    },
}

fn main() {
    let args = Cli::parse().command;

    match &args {
        Commands::Print { seed } => {
            print_cards(&default_shuffle(*seed));
        }
        Commands::Draw { seed } => {
            let deck = default_shuffle(*seed);
            let mut rng = StdRng::seed_from_u64(*seed);
            println!("{}", draw_random(&deck, &mut rng));
        }
        Commands::Sort { demo } => {
            heap_demo(demo);
        }
        Commands::Queue { demo } => {
            queue_demo(demo);
        }
        Commands::Heapsort { demo } => {
            heapsort_demo(demo);
        }
        Commands::Bench { demo } => {
            benchmark(demo);
        }
    }
}
