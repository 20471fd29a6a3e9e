// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, grid};
use rand::prelude::*;

pub const WILDCARD: char = '?';

// Tiles not yet accounted for, letters a..z then wildcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bag(pub Vec<char>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for letter in alphabet.letters() {
            for _ in 0..alphabet.freq(letter) {
                bag.push(letter);
            }
        }
        for _ in 0..alphabet.num_wildcards() {
            bag.push(WILDCARD);
        }
        Bag(bag)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // False when there is no such tile left.
    pub fn remove(&mut self, tile: char) -> bool {
        match self.0.iter().rposition(|&t| t == tile) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    // (tile, count) for every tile still present, in bag order.
    pub fn counts(&self) -> Vec<(char, usize)> {
        let mut counts = Vec::<(char, usize)>::new();
        for &tile in &self.0 {
            match counts.iter_mut().find(|(t, _)| *t == tile) {
                Some((_, n)) => *n += 1,
                None => counts.push((tile, 1)),
            }
        }
        counts
    }

    // Up to `amount` tiles taken at random, sorted for display.
    pub fn draw(&mut self, rng: &mut dyn RngCore, amount: usize) -> Vec<char> {
        let mut drawn = Vec::with_capacity(amount);
        for _ in 0..amount.min(self.0.len()) {
            let idx = rng.random_range(0..self.0.len());
            drawn.push(self.0.swap_remove(idx));
        }
        drawn.sort_unstable();
        drawn
    }
}

impl std::fmt::Display for Bag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (tile, n)) in self.counts().into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", tile, n)?;
        }
        Ok(())
    }
}

// The full distribution minus every tile on the board (wildcard-placed tiles
// count as wildcards) minus `leftovers`. Tiles that can't be found are
// reported and skipped.
pub fn unseen_tiles(alphabet: &alphabet::Alphabet, grid: &grid::Grid, leftovers: &str) -> Bag {
    let mut bag = Bag::new(alphabet);
    let on_board = grid.cells().iter().filter_map(|cell| {
        cell.letter()
            .map(|letter| if cell.is_blank() { WILDCARD } else { letter })
    });
    let held = leftovers.chars().filter_map(|c| match c.to_ascii_lowercase() {
        '?' | '_' => Some(WILDCARD),
        c if c.is_ascii_lowercase() => Some(c),
        _ => None,
    });
    for tile in on_board.chain(held) {
        if !bag.remove(tile) {
            tracing::warn!(%tile, "more tiles than the distribution has");
        }
    }
    bag
}
