// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, matrix};

// One square of the board. Multipliers are fixed when the grid is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    letter_multiplier: u8,
    word_multiplier: u8,
    pending: bool,
    fresh: bool,
    blank: bool,
}

impl Cell {
    fn new(premium: board_layout::Premium) -> Self {
        Self {
            letter: None,
            letter_multiplier: premium.letter_multiplier,
            word_multiplier: premium.word_multiplier,
            pending: false,
            fresh: false,
            blank: false,
        }
    }

    #[inline(always)]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    #[inline(always)]
    pub fn letter_multiplier(&self) -> u8 {
        self.letter_multiplier
    }

    #[inline(always)]
    pub fn word_multiplier(&self) -> u8 {
        self.word_multiplier
    }

    #[inline(always)]
    pub fn has_premium(&self) -> bool {
        self.letter_multiplier > 1 || self.word_multiplier > 1
    }

    #[inline(always)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline(always)]
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    // Only meaningful when occupied.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.blank && self.letter.is_some()
    }

    // Occupied and not placed this turn.
    #[inline(always)]
    pub fn is_committed(&self) -> bool {
        self.letter.is_some() && !self.pending
    }
}

// Cells overwritten by a placement attempt, oldest first.
#[derive(Default)]
pub struct UndoLog(Vec<(usize, Cell)>);

impl UndoLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&(idx, _)| idx)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    dim: matrix::Dim,
    cells: Box<[Cell]>,
    star_row: usize,
    star_col: usize,
    turn: u32,
}

impl Grid {
    pub fn new(board_layout: &board_layout::BoardLayout) -> Self {
        Self {
            dim: board_layout.dim(),
            cells: board_layout.premiums().iter().map(|&p| Cell::new(p)).collect(),
            star_row: board_layout.star_row(),
            star_col: board_layout.star_col(),
            turn: 0,
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.dim.rows
    }

    #[inline(always)]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline(always)]
    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    #[inline(always)]
    pub fn star(&self) -> (usize, usize) {
        (self.star_row, self.star_col)
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // 0-based.
    #[inline(always)]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    // 0-based, None when off the board.
    #[inline(always)]
    pub fn get(&self, row: isize, col: isize) -> Option<&Cell> {
        if self.dim.contains(row, col) {
            Some(self.cell(row as usize, col as usize))
        } else {
            None
        }
    }

    // 1-based, for callers that speak in board coordinates.
    pub fn get_1based(&self, row: usize, col: usize) -> Option<&Cell> {
        self.get(row as isize - 1, col as isize - 1)
    }

    pub fn has_tiles(&self) -> bool {
        self.cells.iter().any(|cell| cell.letter.is_some())
    }

    // The connectivity test shared by placement and search: the cell holds a
    // committed tile or is next to one. 0-based.
    pub fn touches_committed(&self, row: usize, col: usize) -> bool {
        let (row, col) = (row as isize, col as isize);
        [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .any(|&(dr, dc)| self.get(row + dr, col + dc).is_some_and(Cell::is_committed))
    }

    // Writes a committed tile, for loaders and tests. 0-based.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: char, blank: bool, fresh: bool) {
        let cell = &mut self.cells[self.dim.at_row_col(row, col)];
        cell.letter = Some(letter.to_ascii_lowercase());
        cell.blank = blank;
        cell.fresh = fresh;
        cell.pending = false;
    }

    // 0-based.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[self.dim.at_row_col(row, col)];
        cell.letter = None;
        cell.blank = false;
        cell.fresh = false;
        cell.pending = false;
    }

    // 0-based. Returns the new flag.
    pub fn toggle_blank(&mut self, row: usize, col: usize) -> Option<bool> {
        let cell = &mut self.cells[self.dim.at_row_col(row, col)];
        cell.letter?;
        cell.blank = !cell.blank;
        Some(cell.blank)
    }

    // Puts a pending tile on an empty cell, remembering what was there.
    pub fn place_pending(&mut self, idx: usize, letter: char, blank: bool, undo_log: &mut UndoLog) {
        undo_log.0.push((idx, self.cells[idx]));
        let cell = &mut self.cells[idx];
        cell.letter = Some(letter);
        cell.pending = true;
        cell.blank = blank;
    }

    // Restores every logged cell, newest first, and empties the log.
    pub fn rollback(&mut self, undo_log: &mut UndoLog) {
        while let Some((idx, cell)) = undo_log.0.pop() {
            self.cells[idx] = cell;
        }
    }

    pub fn pending_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cells.len()).filter(|&idx| self.cells[idx].pending)
    }

    pub fn num_pending(&self) -> usize {
        self.cells.iter().filter(|cell| cell.pending).count()
    }

    // Pending tiles become this turn's fresh tiles; last turn's lose the flag.
    pub fn commit_pending(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.fresh = cell.pending;
            cell.pending = false;
        }
        self.turn += 1;
    }

    // Takes back the most recent turn. Returns the number of tiles removed.
    pub fn undo_fresh(&mut self) -> usize {
        let mut count = 0;
        for cell in self.cells.iter_mut() {
            if cell.fresh {
                cell.letter = None;
                cell.blank = false;
                cell.fresh = false;
                count += 1;
            }
        }
        if count > 0 {
            self.turn = self.turn.saturating_sub(1);
        }
        count
    }
}
