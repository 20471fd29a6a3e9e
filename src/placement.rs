// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dictionary, error::Rejection, game_config, grid, matrix};
use std::collections::BTreeSet;

// Cells a successful placement left pending. Either roll them back or hand
// the grid to the committing scorer.
#[must_use]
pub struct PendingSet {
    undo_log: grid::UndoLog,
}

impl PendingSet {
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.undo_log.indices()
    }

    pub fn len(&self) -> usize {
        self.undo_log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_log.is_empty()
    }

    pub fn rollback(mut self, grid: &mut grid::Grid) {
        grid.rollback(&mut self.undo_log);
    }
}

pub struct PlacementValidator<'a> {
    dictionary: &'a dictionary::Dictionary,
    first_move: game_config::FirstMoveRule,
    word_buf: String,
    checked_runs: Vec<(matrix::Orientation, usize)>,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(
        dictionary: &'a dictionary::Dictionary,
        first_move: game_config::FirstMoveRule,
    ) -> Self {
        Self {
            dictionary,
            first_move,
            word_buf: String::new(),
            checked_runs: Vec::new(),
        }
    }

    // Lays `word` from (row, col), 0-based, along `orientation`. On success the
    // newly covered cells are left pending; on rejection the grid is exactly as
    // it was before the call.
    pub fn attempt_placement(
        &mut self,
        grid: &mut grid::Grid,
        row: usize,
        col: usize,
        word: &str,
        wildcard_indices: &BTreeSet<usize>,
        orientation: matrix::Orientation,
    ) -> Result<PendingSet, Rejection> {
        let dim = grid.dim();
        let (dr, dc) = orientation.step();
        let len = word.chars().count();
        if len > 0 {
            // saturates so that any origin, however far off, is refused
            let last_row = row.saturating_add(dr * (len - 1));
            let last_col = col.saturating_add(dc * (len - 1));
            if last_row >= dim.rows || last_col >= dim.cols {
                tracing::debug!(
                    word,
                    row = last_row.saturating_add(1),
                    col = last_col.saturating_add(1),
                    "out of bounds"
                );
                return Err(Rejection::GeometryOutOfBounds {
                    row: isize::try_from(last_row).unwrap_or(isize::MAX),
                    col: isize::try_from(last_col).unwrap_or(isize::MAX),
                });
            }
        }

        let mut pending_set = PendingSet {
            undo_log: grid::UndoLog::new(),
        };
        let mut connected = false;
        for (i, c) in word.chars().enumerate() {
            let c = c.to_ascii_lowercase();
            let (r, k) = (row + dr * i, col + dc * i);
            let idx = dim.at_row_col(r, k);
            match grid.cell_at(idx).letter() {
                None => grid.place_pending(
                    idx,
                    c,
                    wildcard_indices.contains(&i),
                    &mut pending_set.undo_log,
                ),
                Some(existing) if existing == c => {}
                Some(existing) => {
                    tracing::debug!(word, row = r + 1, col = k + 1, %existing, "letter conflict");
                    pending_set.rollback(grid);
                    return Err(Rejection::LetterConflict {
                        row: r,
                        col: k,
                        existing,
                        wanted: c,
                    });
                }
            }
            connected |= if grid.turn() == 0 {
                match self.first_move {
                    game_config::FirstMoveRule::CoverStar => grid.star() == (r, k),
                    game_config::FirstMoveRule::Anywhere => true,
                }
            } else {
                grid.touches_committed(r, k)
            };
        }
        if !connected {
            tracing::debug!(
                word,
                row = row + 1,
                col = col + 1,
                "word doesn't touch an existing letter"
            );
            pending_set.rollback(grid);
            return Err(Rejection::NotConnected);
        }

        if let Err(bad_word) = self.check_words(grid, &pending_set) {
            tracing::debug!(word, bad_word = %bad_word, "not a valid word");
            pending_set.rollback(grid);
            return Err(Rejection::InvalidCrossWord(bad_word));
        }
        Ok(pending_set)
    }

    // Every run through a pending cell, either way, must be a word.
    fn check_words(&mut self, grid: &grid::Grid, pending_set: &PendingSet) -> Result<(), String> {
        let dim = grid.dim();
        self.checked_runs.clear();
        for idx in pending_set.indices() {
            let (row, col) = dim.row_col(idx);
            for orientation in [matrix::Orientation::Row, matrix::Orientation::Col] {
                let (lane, mut start) = dim.lane_and_idx(orientation, row, col);
                let strider = dim.lane(orientation, lane);
                while start > 0 && !grid.cell_at(strider.at(start - 1)).is_empty() {
                    start -= 1;
                }
                let run_id = (orientation, strider.at(start));
                if self.checked_runs.contains(&run_id) {
                    continue;
                }
                self.checked_runs.push(run_id);
                self.word_buf.clear();
                for j in start..strider.len() {
                    match grid.cell_at(strider.at(j)).letter() {
                        Some(c) => self.word_buf.push(c),
                        None => break,
                    }
                }
                if self.word_buf.chars().count() >= 2
                    && !self.dictionary.contains_word(&self.word_buf)
                {
                    return Err(self.word_buf.clone());
                }
            }
        }
        Ok(())
    }
}
