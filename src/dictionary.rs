// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, fash};

// Multiset of a..z.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterTally {
    counts: [u8; 26],
}

impl LetterTally {
    pub fn new() -> Self {
        Self::default()
    }

    // Letters outside a..z are ignored.
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut tally = Self::new();
        for c in letters {
            tally.add(c);
        }
        tally
    }

    #[inline(always)]
    pub fn add(&mut self, c: char) {
        if let Some(idx) = alphabet::letter_index(c) {
            self.counts[idx] = self.counts[idx].saturating_add(1);
        }
    }

    // False when there is none to take.
    #[inline(always)]
    pub fn take(&mut self, c: char) -> bool {
        match alphabet::letter_index(c) {
            Some(idx) if self.counts[idx] > 0 => {
                self.counts[idx] -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    // Letters of `needed` not covered by self.
    pub fn shortfall(&self, needed: &LetterTally) -> LetterTally {
        let mut missing = LetterTally::new();
        for (m, (&have, &need)) in missing
            .counts
            .iter_mut()
            .zip(self.counts.iter().zip(needed.counts.iter()))
        {
            *m = need.saturating_sub(have);
        }
        missing
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        (0..26)
            .filter(|&idx| self.counts[idx] > 0)
            .map(|idx| (alphabet::index_letter(idx), self.counts[idx]))
    }
}

impl std::fmt::Debug for LetterTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (c, n) in self.iter() {
            for _ in 0..n {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

// The word's letters sorted ascending, lowercase.
pub fn canonical_key(word: &str) -> String {
    let mut letters = word.chars().map(|c| c.to_ascii_lowercase()).collect::<Vec<_>>();
    letters.sort_unstable();
    letters.into_iter().collect()
}

pub struct Entry {
    key: Box<str>,
    tally: LetterTally,
    words: Vec<Box<str>>,
}

impl Entry {
    #[inline(always)]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline(always)]
    pub fn tally(&self) -> &LetterTally {
        &self.tally
    }

    #[inline(always)]
    pub fn words(&self) -> &[Box<str>] {
        &self.words
    }
}

// Anagram classes: canonical key -> words sharing it. Entries are kept in key
// order so that every search over them is reproducible.
#[derive(Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    by_key: fash::MyHashMap<Box<str>, usize>,
    num_words: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        let mut pending = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_ascii_lowercase();
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
                pending.push((canonical_key(&word), word));
            }
        }
        pending.sort_unstable();
        pending.dedup();
        let mut dictionary = Self::new();
        for (key, word) in pending {
            dictionary.insert_sorted(key, word);
        }
        dictionary
    }

    // One word per line; a line with anything but letters is rejected.
    pub fn from_word_list(giant_string: &str) -> error::Returns<Self> {
        for (line_num, line) in giant_string.lines().enumerate() {
            let word = line.trim();
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return_error!(format!(
                    "invalid word {:?} on line {}",
                    word,
                    line_num + 1
                ));
            }
        }
        let dictionary = Self::from_words(giant_string.lines());
        tracing::info!(
            words = dictionary.num_words(),
            keys = dictionary.num_keys(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    // Words arrive in key order, so a new key always goes at the end.
    fn insert_sorted(&mut self, key: String, word: String) {
        match self.by_key.get(key.as_str()) {
            Some(&idx) => self.entries[idx].words.push(word.into()),
            None => {
                self.by_key.insert(key.as_str().into(), self.entries.len());
                self.entries.push(Entry {
                    tally: LetterTally::from_letters(key.chars()),
                    key: key.into(),
                    words: vec![word.into()],
                });
            }
        }
        self.num_words += 1;
    }

    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn num_keys(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    // Exact key lookup.
    pub fn lookup(&self, key: &str) -> &[Box<str>] {
        match self.by_key.get(key) {
            Some(&idx) => &self.entries[idx].words,
            None => &[],
        }
    }

    // Case-insensitive membership through the word's anagram class.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        self.lookup(&canonical_key(&word))
            .iter()
            .any(|w| **w == *word)
    }
}
