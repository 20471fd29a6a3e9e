// Copyright (C) 2020-2026 Andy Kurnia.

use super::{candidate, game_config, grid, matrix, placement};
use std::collections::BTreeSet;

// The outcome of scoring whatever is pending on the grid.
#[derive(Clone, Debug, Default)]
pub struct ScoreSheet {
    pub total: i32,
    pub num_played: usize,
    pub bingo: bool,
    // every run through a pending tile, across runs first
    pub runs: Vec<candidate::WordCandidate>,
    // tiers hit by tiles placed this turn, plus Bingo
    pub bonus_tags: BTreeSet<candidate::BonusTag>,
}

impl ScoreSheet {
    // The run along the play's own line is the play; the others are words it
    // also forms.
    pub fn apply_to(&self, play: candidate::WordCandidate) -> candidate::WordCandidate {
        let attached = self
            .runs
            .iter()
            .filter(|run| !covers(run, play.orientation(), play.row(), play.col()))
            .cloned()
            .collect();
        play.with_score(self.total)
            .with_bonus_tags(self.bonus_tags.clone())
            .with_attached(attached)
    }
}

fn covers(
    run: &candidate::WordCandidate,
    orientation: matrix::Orientation,
    row: usize,
    col: usize,
) -> bool {
    if run.orientation() != orientation {
        return false;
    }
    let len = run.text().chars().count();
    match orientation {
        matrix::Orientation::Row => run.row() == row && (run.col()..run.col() + len).contains(&col),
        matrix::Orientation::Col => run.col() == col && (run.row()..run.row() + len).contains(&row),
    }
}

pub struct PlayScorer {
    run_buffer: Vec<usize>,
}

impl PlayScorer {
    pub fn new() -> Self {
        Self {
            run_buffer: Vec::new(),
        }
    }

    pub fn score(&mut self, game_config: &game_config::GameConfig, grid: &grid::Grid) -> i32 {
        self.score_sheet(game_config, grid).total
    }

    // Probe mode: reads the pending flags, touches nothing.
    pub fn score_sheet(
        &mut self,
        game_config: &game_config::GameConfig,
        grid: &grid::Grid,
    ) -> ScoreSheet {
        let dim = grid.dim();
        let mut sheet = ScoreSheet::default();
        for orientation in [matrix::Orientation::Row, matrix::Orientation::Col] {
            for lane in 0..dim.num_lanes(orientation) {
                let strider = dim.lane(orientation, lane);
                self.run_buffer.clear();
                for i in 0..strider.len() {
                    let idx = strider.at(i);
                    if grid.cell_at(idx).is_empty() {
                        self.score_run(game_config, grid, orientation, &mut sheet);
                        self.run_buffer.clear();
                    } else {
                        self.run_buffer.push(idx);
                    }
                }
                self.score_run(game_config, grid, orientation, &mut sheet);
            }
        }

        for idx in grid.pending_indices() {
            let cell = grid.cell_at(idx);
            sheet.num_played += 1;
            if !cell.is_blank() {
                sheet
                    .bonus_tags
                    .extend(candidate::BonusTag::for_premium(
                        cell.word_multiplier(),
                        cell.letter_multiplier(),
                    ));
            }
        }
        let num_played_bonus = game_config.num_played_bonus(sheet.num_played);
        if num_played_bonus != 0 {
            sheet.bingo = true;
            sheet.total += num_played_bonus;
            sheet.bonus_tags.insert(candidate::BonusTag::Bingo);
        }
        sheet
    }

    fn score_run(
        &self,
        game_config: &game_config::GameConfig,
        grid: &grid::Grid,
        orientation: matrix::Orientation,
        sheet: &mut ScoreSheet,
    ) {
        if self.run_buffer.len() <= 1 {
            return;
        }
        let alphabet = game_config.alphabet();
        let mut counts = false;
        let mut word_multiplier = 1;
        let mut word_score = 0;
        let mut text = String::with_capacity(self.run_buffer.len());
        let mut wildcard_indices = BTreeSet::new();
        let mut bonus_tags = BTreeSet::new();
        for (i, &idx) in self.run_buffer.iter().enumerate() {
            let cell = grid.cell_at(idx);
            let Some(letter) = cell.letter() else {
                continue;
            };
            text.push(letter);
            if cell.is_blank() {
                wildcard_indices.insert(i);
                counts |= cell.is_pending();
                continue;
            }
            if cell.is_pending() {
                counts = true;
                word_score += alphabet.score(letter) * cell.letter_multiplier() as i32;
                word_multiplier *= cell.word_multiplier() as i32;
                bonus_tags.extend(candidate::BonusTag::for_premium(
                    cell.word_multiplier(),
                    cell.letter_multiplier(),
                ));
            } else {
                word_score += alphabet.score(letter);
            }
        }
        if !counts {
            return;
        }
        let word_score = word_score * word_multiplier;
        let (row, col) = grid.dim().row_col(self.run_buffer[0]);
        sheet.total += word_score;
        sheet.runs.push(
            candidate::WordCandidate::new(text, row, col, orientation, wildcard_indices)
                .with_score(word_score)
                .with_bonus_tags(bonus_tags),
        );
    }

    // Commit mode: scores, then turns the pending tiles into this turn's fresh
    // tiles and advances the turn.
    pub fn commit(
        &mut self,
        game_config: &game_config::GameConfig,
        grid: &mut grid::Grid,
        pending_set: placement::PendingSet,
    ) -> ScoreSheet {
        let sheet = self.score_sheet(game_config, grid);
        drop(pending_set);
        grid.commit_pending();
        sheet
    }
}

impl Default for PlayScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dictionary, game_config::FirstMoveRule, placement::PlacementValidator};
    use matrix::Orientation;

    struct Fixture {
        game_config: game_config::GameConfig<'static>,
        dictionary: dictionary::Dictionary,
        grid: grid::Grid,
    }

    fn fixture(words: &[&str]) -> Fixture {
        let game_config = game_config::make_words_with_friends_game_config(15);
        let grid = grid::Grid::new(game_config.board_layout());
        Fixture {
            game_config,
            dictionary: dictionary::Dictionary::from_words(words),
            grid,
        }
    }

    impl Fixture {
        fn place(
            &mut self,
            row: usize,
            col: usize,
            word: &str,
            blanks: &[usize],
            orientation: Orientation,
        ) -> placement::PendingSet {
            let blanks = blanks.iter().copied().collect();
            PlacementValidator::new(&self.dictionary, FirstMoveRule::Anywhere)
                .attempt_placement(&mut self.grid, row, col, word, &blanks, orientation)
                .unwrap()
        }

        fn commit(
            &mut self,
            row: usize,
            col: usize,
            word: &str,
            orientation: Orientation,
        ) -> ScoreSheet {
            let pending = self.place(row, col, word, &[], orientation);
            PlayScorer::new().commit(&self.game_config, &mut self.grid, pending)
        }
    }

    #[test]
    fn scoring_is_repeatable() {
        let mut f = fixture(&["cat"]);
        let pending = f.place(7, 7, "cat", &[], Orientation::Row);
        let before = f.grid.clone();
        let mut scorer = PlayScorer::new();
        let first = scorer.score(&f.game_config, &f.grid);
        let second = scorer.score(&f.game_config, &f.grid);
        assert_eq!(first, 6);
        assert_eq!(first, second);
        assert!(f.grid == before);
        pending.rollback(&mut f.grid);
    }

    #[test]
    fn multipliers_only_apply_to_new_tiles() {
        let mut f = fixture(&["cat", "cats"]);
        // (7,11) is a double word square
        let sheet = f.commit(7, 9, "cat", Orientation::Row);
        assert_eq!(sheet.total, (4 + 1 + 1) * 2);
        assert_eq!(sheet.bonus_tags, [candidate::BonusTag::DoubleWord].into());
        let pending = f.place(7, 9, "cats", &[], Orientation::Row);
        let sheet = PlayScorer::new().score_sheet(&f.game_config, &f.grid);
        assert_eq!(sheet.total, 4 + 1 + 1 + 1);
        assert!(sheet.bonus_tags.is_empty());
        pending.rollback(&mut f.grid);
    }

    #[test]
    fn blanks_score_nothing_and_drop_their_bonus() {
        let mut f = fixture(&["cat"]);
        let pending = f.place(7, 9, "cat", &[2], Orientation::Row);
        let sheet = PlayScorer::new().score_sheet(&f.game_config, &f.grid);
        // the blank 't' sits on the double word square
        assert_eq!(sheet.total, 4 + 1);
        assert!(sheet.bonus_tags.is_empty());
        assert_eq!(sheet.runs[0].wildcard_indices(), &[2].into());
        pending.rollback(&mut f.grid);
    }

    #[test]
    fn crossing_words_are_scored_and_attached() {
        let mut f = fixture(&["cat", "as", "ta"]);
        f.commit(7, 7, "cat", Orientation::Row);
        // "as" under "at", the 's' on a double letter square; also forms "ta" down
        let pending = f.place(8, 9, "as", &[], Orientation::Row);
        let sheet = PlayScorer::new().score_sheet(&f.game_config, &f.grid);
        assert_eq!(sheet.total, (1 + 1 * 2) + (1 + 1));
        assert_eq!(sheet.runs.len(), 2);
        let play = candidate::WordCandidate::new("as", 8, 9, Orientation::Row, BTreeSet::new());
        let play = sheet.apply_to(play);
        assert_eq!(play.score(), 5);
        assert_eq!(play.bonus_tags(), &[candidate::BonusTag::DoubleLetter].into());
        assert_eq!(play.attached().len(), 1);
        assert_eq!(play.attached()[0].text(), "ta");
        assert_eq!(play.attached()[0].score(), 2);
        pending.rollback(&mut f.grid);
    }

    #[test]
    fn bingo_needs_exactly_the_threshold() {
        let words = ["abcdefg", "abcdef", "abcdefgh"];
        // row 7 only has double words at cols 3 and 11
        for (word, total, bingo) in [
            ("abcdef", 16, false),
            ("abcdefg", 19 + 35, true),
            ("abcdefgh", 22 * 2, false),
        ] {
            let mut f = fixture(&words);
            let pending = f.place(7, 4, word, &[], Orientation::Row);
            let sheet = PlayScorer::new().score_sheet(&f.game_config, &f.grid);
            assert_eq!(sheet.bingo, bingo, "{}", word);
            assert_eq!(sheet.total, total, "{}", word);
            assert_eq!(sheet.bonus_tags.contains(&candidate::BonusTag::Bingo), bingo);
            pending.rollback(&mut f.grid);
        }
    }
}
