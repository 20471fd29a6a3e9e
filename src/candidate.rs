// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BonusTag {
    DoubleWord,
    TripleWord,
    DoubleLetter,
    TripleLetter,
    Bingo,
}

impl BonusTag {
    pub fn label(self) -> &'static str {
        match self {
            BonusTag::DoubleWord => "DW",
            BonusTag::TripleWord => "TW",
            BonusTag::DoubleLetter => "DL",
            BonusTag::TripleLetter => "TL",
            BonusTag::Bingo => "B",
        }
    }

    // Tags earned by a tile placed on a square with these multipliers.
    pub fn for_premium(
        word_multiplier: u8,
        letter_multiplier: u8,
    ) -> impl Iterator<Item = BonusTag> {
        let word = match word_multiplier {
            2 => Some(BonusTag::DoubleWord),
            3 => Some(BonusTag::TripleWord),
            _ => None,
        };
        let letter = match letter_multiplier {
            2 => Some(BonusTag::DoubleLetter),
            3 => Some(BonusTag::TripleLetter),
            _ => None,
        };
        word.into_iter().chain(letter)
    }
}

// What makes two candidates the same play. Row and col are 0-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CandidateKey {
    pub text: String,
    pub row: usize,
    pub col: usize,
    pub orientation: matrix::Orientation,
    pub wildcard_indices: Vec<usize>,
}

// One located word. Immutable once scored: the `with_*` methods return new
// values. Row and col are 0-based.
#[derive(Clone, Debug)]
pub struct WordCandidate {
    text: String,
    score: i32,
    row: usize,
    col: usize,
    orientation: matrix::Orientation,
    wildcard_indices: BTreeSet<usize>,
    bonus_tags: BTreeSet<BonusTag>,
    attached: Vec<WordCandidate>,
}

impl WordCandidate {
    pub fn new(
        text: impl Into<String>,
        row: usize,
        col: usize,
        orientation: matrix::Orientation,
        wildcard_indices: BTreeSet<usize>,
    ) -> Self {
        Self {
            text: text.into(),
            score: 0,
            row,
            col,
            orientation,
            wildcard_indices,
            bonus_tags: BTreeSet::new(),
            attached: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline(always)]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline(always)]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline(always)]
    pub fn orientation(&self) -> matrix::Orientation {
        self.orientation
    }

    #[inline(always)]
    pub fn wildcard_indices(&self) -> &BTreeSet<usize> {
        &self.wildcard_indices
    }

    #[inline(always)]
    pub fn bonus_tags(&self) -> &BTreeSet<BonusTag> {
        &self.bonus_tags
    }

    #[inline(always)]
    pub fn attached(&self) -> &[WordCandidate] {
        &self.attached
    }

    pub fn with_score(self, score: i32) -> Self {
        Self { score, ..self }
    }

    pub fn with_bonus_tags(self, bonus_tags: BTreeSet<BonusTag>) -> Self {
        Self { bonus_tags, ..self }
    }

    pub fn with_attached(self, attached: Vec<WordCandidate>) -> Self {
        Self { attached, ..self }
    }

    pub fn key(&self) -> CandidateKey {
        CandidateKey {
            text: self.text.clone(),
            row: self.row,
            col: self.col,
            orientation: self.orientation,
            wildcard_indices: self.wildcard_indices.iter().copied().collect(),
        }
    }

    // "row 8,11" with 1-based coordinates.
    pub fn location(&self) -> String {
        format!("{} {},{}", self.orientation, self.row + 1, self.col + 1)
    }

    // The word with a '*' after every letter played from a wildcard.
    pub fn annotated_text(&self) -> String {
        let mut s = String::with_capacity(self.text.len() + self.wildcard_indices.len());
        for (i, c) in self.text.chars().enumerate() {
            s.push(c);
            if self.wildcard_indices.contains(&i) {
                s.push('*');
            }
        }
        s
    }

    pub fn bonus_labels(&self) -> String {
        self.bonus_tags
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for WordCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.row == other.row
            && self.col == other.col
            && self.orientation == other.orientation
            && self.wildcard_indices == other.wildcard_indices
    }
}

impl Eq for WordCandidate {}

impl std::hash::Hash for WordCandidate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for WordCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:3}  {}  {}", self.score, self.location(), self.annotated_text())?;
        if !self.bonus_tags.is_empty() {
            write!(f, "  [{}]", self.bonus_labels())?;
        }
        if !self.attached.is_empty() {
            write!(f, "  +")?;
            for word in &self.attached {
                write!(f, " {}({})", word.annotated_text(), word.score)?;
            }
        }
        Ok(())
    }
}
