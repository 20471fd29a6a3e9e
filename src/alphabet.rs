// Copyright (C) 2020-2026 Andy Kurnia.

pub struct Tile {
    letter: char,
    freq: u8,
    score: i32,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
    num_wildcards: u8,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

// Tiles are stored a..z, so the index of a letter is its offset from 'a'.
#[inline(always)]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn index_letter(idx: usize) -> char {
    (b'a' + idx as u8) as char
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> usize {
        match self {
            Alphabet::Static(x) => x.tiles.len(),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn get(&self, c: char) -> Option<&'a Tile> {
        match self {
            Alphabet::Static(x) => letter_index(c).and_then(|idx| x.tiles.get(idx)),
        }
    }

    // Unknown letters are worth nothing.
    #[inline(always)]
    pub fn score(&self, c: char) -> i32 {
        self.get(c).map_or(0, |tile| tile.score)
    }

    #[inline(always)]
    pub fn freq(&self, c: char) -> u8 {
        self.get(c).map_or(0, |tile| tile.freq)
    }

    #[inline(always)]
    pub fn num_wildcards(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.num_wildcards,
        }
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        let tiles = match self {
            Alphabet::Static(x) => x.tiles,
        };
        tiles.iter().map(|tile| tile.letter)
    }

    pub fn num_tiles(&self) -> u16 {
        self.letters().map(|c| self.freq(c) as u16).sum::<u16>() + self.num_wildcards() as u16
    }
}

macro_rules! tiles {
    ($(($letter:literal, $freq:literal, $score:literal)),* $(,)?) => {
        &[$(Tile { letter: $letter, freq: $freq, score: $score }),*]
    };
}

static WORDS_WITH_FRIENDS_TILES: &[Tile] = tiles![
    ('a', 9, 1),
    ('b', 2, 4),
    ('c', 2, 4),
    ('d', 5, 2),
    ('e', 13, 1),
    ('f', 2, 4),
    ('g', 3, 3),
    ('h', 4, 3),
    ('i', 8, 1),
    ('j', 1, 10),
    ('k', 1, 5),
    ('l', 4, 2),
    ('m', 2, 4),
    ('n', 5, 2),
    ('o', 8, 1),
    ('p', 2, 4),
    ('q', 1, 10),
    ('r', 6, 1),
    ('s', 5, 1),
    ('t', 7, 1),
    ('u', 4, 2),
    ('v', 2, 5),
    ('w', 2, 4),
    ('x', 1, 8),
    ('y', 2, 3),
    ('z', 1, 10),
];

pub fn make_words_with_friends_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(StaticAlphabet {
        tiles: WORDS_WITH_FRIENDS_TILES,
        num_wildcards: 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wwf_values() {
        let alphabet = make_words_with_friends_alphabet();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.score('a'), 1);
        assert_eq!(alphabet.score('j'), 10);
        assert_eq!(alphabet.score('x'), 8);
        assert_eq!(alphabet.score('?'), 0);
        assert_eq!(alphabet.score('A'), 0);
        assert_eq!(alphabet.num_tiles(), 104);
    }
}
