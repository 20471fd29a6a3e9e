// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: u8,
    pub letter_multiplier: u8,
}

static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PremiumKind {
    Letter,
    Word,
}

// One quadrant of the Words-With-Friends board, as (x, y) offsets from the
// center cell. Mirrored through both axes to fill the board.
static WWF_QUADRANT: &[(isize, isize, PremiumKind, u8)] = &[
    (4, 0, PremiumKind::Word, 2),
    (3, 1, PremiumKind::Letter, 2),
    (7, 1, PremiumKind::Letter, 3),
    (2, 2, PremiumKind::Letter, 3),
    (6, 2, PremiumKind::Word, 2),
    (1, 3, PremiumKind::Letter, 2),
    (5, 3, PremiumKind::Letter, 2),
    (4, 4, PremiumKind::Letter, 3),
    (7, 4, PremiumKind::Word, 3),
    (3, 5, PremiumKind::Letter, 2),
    (6, 5, PremiumKind::Letter, 2),
    (2, 6, PremiumKind::Word, 2),
    (5, 6, PremiumKind::Letter, 2),
    (1, 7, PremiumKind::Letter, 3),
    (4, 7, PremiumKind::Word, 3),
    (0, 4, PremiumKind::Word, 2),
];

#[derive(Clone)]
pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: usize,
    star_col: usize,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> usize {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> usize {
        self.star_col
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: usize, col: usize) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    fn new_plain(size: usize) -> Self {
        Self {
            premiums: vec![FVS; size * size].into_boxed_slice(),
            dim: matrix::Dim::square(size),
            star_row: size / 2,
            star_col: size / 2,
        }
    }

    fn apply_quadrants(&mut self, quadrant: &[(isize, isize, PremiumKind, u8)]) {
        let center_row = self.star_row as isize;
        let center_col = self.star_col as isize;
        for &(sx, sy) in &[(1isize, 1isize), (-1, 1), (1, -1), (-1, -1)] {
            for &(x, y, kind, multiplier) in quadrant {
                let row = center_row + y * sy;
                let col = center_col + x * sx;
                // smaller boards keep only what fits
                if !self.dim.contains(row, col) {
                    continue;
                }
                let premium = &mut self.premiums[self.dim.at_row_col(row as usize, col as usize)];
                match kind {
                    PremiumKind::Letter => premium.letter_multiplier = multiplier,
                    PremiumKind::Word => premium.word_multiplier = multiplier,
                }
            }
        }
    }
}

pub fn make_plain_board_layout(size: usize) -> BoardLayout {
    BoardLayout::new_plain(size)
}

pub fn make_words_with_friends_board_layout(size: usize) -> BoardLayout {
    let mut board_layout = BoardLayout::new_plain(size);
    board_layout.apply_quadrants(WWF_QUADRANT);
    board_layout
}
