// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    bag, candidate, dictionary, display, error, error::Rejection, game_config, grid, matrix,
    movegen, placement, play_scorer,
};
use rand::prelude::*;
use std::collections::BTreeSet;

#[derive(Default, serde::Serialize, serde::Deserialize)]
struct SavedCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    letter: Option<char>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    fresh: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    blank: bool,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct SavedGame {
    rules: String,
    size: usize,
    turn: u32,
    cells: Vec<SavedCell>,
}

// Splits "c?at" or "c*at" into the word and the positions of the letters
// marked as wildcard tiles.
pub fn parse_marked_word(marked: &str) -> (String, BTreeSet<usize>) {
    let mut word = String::with_capacity(marked.len());
    let mut wildcard_indices = BTreeSet::new();
    for c in marked.chars() {
        match c {
            '?' | '*' if !word.is_empty() => {
                wildcard_indices.insert(word.len() - 1);
            }
            c if c.is_ascii_alphabetic() => word.push(c.to_ascii_lowercase()),
            c => tracing::warn!(%c, marked, "ignoring character in word"),
        }
    }
    (word, wildcard_indices)
}

// One board, its rules and the dictionary it is played with. Every
// coordinate here is 1-based.
pub struct GameState<'a> {
    game_config: game_config::GameConfig<'static>,
    dictionary: &'a dictionary::Dictionary,
    grid: grid::Grid,
}

impl<'a> GameState<'a> {
    pub fn new(
        game_config: game_config::GameConfig<'static>,
        dictionary: &'a dictionary::Dictionary,
    ) -> Self {
        let grid = grid::Grid::new(game_config.board_layout());
        Self {
            game_config,
            dictionary,
            grid,
        }
    }

    pub fn from_rules(
        rules: &str,
        size: usize,
        dictionary: &'a dictionary::Dictionary,
    ) -> error::Returns<Self> {
        Ok(Self::new(game_config::make_game_config(rules, size)?, dictionary))
    }

    #[inline(always)]
    pub fn game_config(&self) -> &game_config::GameConfig<'static> {
        &self.game_config
    }

    #[inline(always)]
    pub fn dictionary(&self) -> &'a dictionary::Dictionary {
        self.dictionary
    }

    #[inline(always)]
    pub fn grid(&self) -> &grid::Grid {
        &self.grid
    }

    fn to_index(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let dim = self.grid.dim();
        if row == 0 || col == 0 || row > dim.rows || col > dim.cols {
            None
        } else {
            Some((row - 1, col - 1))
        }
    }

    // Validates and commits. `word` may mark wildcard letters with '?'.
    pub fn play(
        &mut self,
        row: usize,
        col: usize,
        word: &str,
        orientation: matrix::Orientation,
    ) -> Result<candidate::WordCandidate, Rejection> {
        let (word, wildcard_indices) = parse_marked_word(word);
        if word.is_empty() {
            return Err(Rejection::NoTilesPlaced);
        }
        let Some((row0, col0)) = self.to_index(row, col) else {
            return Err(Rejection::GeometryOutOfBounds {
                row: isize::try_from(row).map_or(isize::MAX, |row| row - 1),
                col: isize::try_from(col).map_or(isize::MAX, |col| col - 1),
            });
        };
        let pending_set =
            placement::PlacementValidator::new(self.dictionary, self.game_config.first_move())
                .attempt_placement(
                    &mut self.grid,
                    row0,
                    col0,
                    &word,
                    &wildcard_indices,
                    orientation,
                )?;
        if pending_set.is_empty() {
            pending_set.rollback(&mut self.grid);
            return Err(Rejection::NoTilesPlaced);
        }
        let sheet =
            play_scorer::PlayScorer::new().commit(&self.game_config, &mut self.grid, pending_set);
        let played = sheet.apply_to(candidate::WordCandidate::new(
            word,
            row0,
            col0,
            orientation,
            wildcard_indices,
        ));
        tracing::info!(play = %played, turn = self.grid.turn(), "committed");
        Ok(played)
    }

    pub fn find_best(&mut self, rack: &str, limit: usize) -> Vec<candidate::WordCandidate> {
        let rack = movegen::Rack::parse(rack);
        movegen::MoveGenerator::new(&self.game_config, self.dictionary).find_best(
            &mut self.grid,
            &rack,
            limit,
        )
    }

    pub fn find_best_parallel(&self, rack: &str, limit: usize) -> Vec<candidate::WordCandidate> {
        let rack = movegen::Rack::parse(rack);
        movegen::MoveGenerator::find_best_parallel(
            &self.game_config,
            self.dictionary,
            &self.grid,
            &rack,
            limit,
        )
    }

    // Takes back the latest turn. Returns the number of tiles removed.
    pub fn undo(&mut self) -> usize {
        let removed = self.grid.undo_fresh();
        tracing::info!(removed, turn = self.grid.turn(), "undo");
        removed
    }

    // Returns whether the tile is now marked as a wildcard.
    pub fn toggle_blank(&mut self, row: usize, col: usize) -> error::Returns<bool> {
        let Some((row0, col0)) = self.to_index(row, col) else {
            return_error!(format!("({},{}) is off the board", row, col));
        };
        match self.grid.toggle_blank(row0, col0) {
            Some(blank) => Ok(blank),
            None => {
                return_error!(format!("no tile at ({},{})", row, col));
            }
        }
    }

    // Words the rack alone can make, at face value, best first. Each word
    // shows up once, with its best wildcard assignment.
    pub fn known_words(&self, rack: &str) -> Vec<candidate::WordCandidate> {
        let rack = movegen::Rack::parse(rack);
        let alphabet = self.game_config.alphabet();
        let mut words =
            movegen::expand_wildcards(self.dictionary, *rack.tally(), rack.num_wildcards())
                .map(|expansion| {
                    let score = expansion
                        .word
                        .chars()
                        .enumerate()
                        .filter(|(i, _)| !expansion.wildcard_indices.contains(i))
                        .map(|(_, c)| alphabet.score(c))
                        .sum();
                    candidate::WordCandidate::new(
                        expansion.word,
                        0,
                        0,
                        matrix::Orientation::Row,
                        expansion.wildcard_indices,
                    )
                    .with_score(score)
                })
                .collect::<Vec<_>>();
        words.sort_by(|a, b| b.score().cmp(&a.score()));
        let mut seen = BTreeSet::new();
        words.retain(|word| seen.insert(word.text().to_string()));
        words
    }

    pub fn unseen_distribution(&self, leftovers: &str) -> bag::Bag {
        bag::unseen_tiles(self.game_config.alphabet(), &self.grid, leftovers)
    }

    // A random rack from the unseen tiles, reproducible when seeded.
    pub fn draw(&self, seed: Option<u64>) -> String {
        let mut rng = match seed {
            Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
            None => rand_chacha::ChaCha20Rng::from_rng(&mut rand::rng()),
        };
        let mut unseen = self.unseen_distribution("");
        unseen
            .draw(&mut rng, self.game_config.bingo().threshold)
            .into_iter()
            .collect()
    }

    // Replaces the board with one read from board text. The rules stay.
    pub fn load_text(&mut self, text: &str) -> error::Returns<()> {
        self.grid = display::parse_board_text(text, self.game_config.board_layout())?;
        tracing::info!(turn = self.grid.turn(), "loaded board text");
        Ok(())
    }

    pub fn to_json(&self) -> error::Returns<String> {
        let dim = self.grid.dim();
        let saved = SavedGame {
            rules: self.game_config.name().to_string(),
            size: dim.rows,
            turn: self.grid.turn(),
            cells: self
                .grid
                .cells()
                .iter()
                .map(|cell| SavedCell {
                    letter: cell.letter(),
                    fresh: cell.is_fresh(),
                    blank: cell.is_blank(),
                })
                .collect(),
        };
        Ok(serde_json::to_string(&saved)?)
    }

    pub fn from_json(json: &str, dictionary: &'a dictionary::Dictionary) -> error::Returns<Self> {
        let saved = serde_json::from_str::<SavedGame>(json)?;
        if saved.size.checked_mul(saved.size) != Some(saved.cells.len()) {
            return_error!(format!(
                "a board of size {} can't have {} cells",
                saved.size,
                saved.cells.len()
            ));
        }
        let mut game_state = Self::from_rules(&saved.rules, saved.size, dictionary)?;
        let dim = game_state.grid.dim();
        for (idx, cell) in saved.cells.iter().enumerate() {
            if let Some(letter) = cell.letter {
                if !letter.is_ascii_alphabetic() {
                    return_error!(format!("bad letter {:?}", letter));
                }
                let (row, col) = dim.row_col(idx);
                game_state.grid.set_letter(row, col, letter, cell.blank, cell.fresh);
            }
        }
        game_state.grid.set_turn(saved.turn);
        Ok(game_state)
    }

    pub fn save(&self, path: &std::path::Path) -> error::Returns<()> {
        std::fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "saved");
        Ok(())
    }

    pub fn load(
        path: &std::path::Path,
        dictionary: &'a dictionary::Dictionary,
    ) -> error::Returns<Self> {
        let game_state = Self::from_json(&std::fs::read_to_string(path)?, dictionary)?;
        tracing::info!(path = %path.display(), turn = game_state.grid.turn(), "loaded");
        Ok(game_state)
    }

    // A board file that isn't there yet starts a fresh default board.
    pub fn open_or_create(
        path: &std::path::Path,
        dictionary: &'a dictionary::Dictionary,
    ) -> error::Returns<Self> {
        if path.exists() {
            Self::load(path, dictionary)
        } else {
            tracing::info!(path = %path.display(), "new board");
            Self::from_rules("wwf", game_config::DEFAULT_BOARD_SIZE, dictionary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> dictionary::Dictionary {
        dictionary::Dictionary::from_words(["cat", "cats", "act", "tacs", "at", "as", "ta", "zax"])
    }

    #[test]
    fn marked_words() {
        let (word, wildcards) = parse_marked_word("C?at*");
        assert_eq!(word, "cat");
        assert_eq!(wildcards, [0, 2].into());
        let (word, wildcards) = parse_marked_word("?cat");
        assert_eq!(word, "cat");
        assert!(wildcards.is_empty());
    }

    #[test]
    fn play_commits_and_undo_takes_back() {
        let dictionary = dictionary();
        let mut game_state = GameState::from_rules("wwf", 15, &dictionary).unwrap();
        let played = game_state.play(8, 8, "cat", matrix::Orientation::Row).unwrap();
        assert_eq!(played.score(), 6);
        assert_eq!(game_state.grid().turn(), 1);
        assert!(game_state.grid().cell(7, 7).is_fresh());
        let played = game_state.play(8, 8, "cats", matrix::Orientation::Row).unwrap();
        assert_eq!(played.score(), 7);
        assert!(!game_state.grid().cell(7, 7).is_fresh());
        assert_eq!(game_state.undo(), 1);
        assert_eq!(game_state.grid().turn(), 1);
        assert!(game_state.grid().cell(7, 10).is_empty());
        assert_eq!(
            game_state.play(8, 8, "cat", matrix::Orientation::Row).err(),
            Some(Rejection::NoTilesPlaced)
        );
        assert_eq!(
            game_state.play(0, 8, "cat", matrix::Orientation::Row).err(),
            Some(Rejection::GeometryOutOfBounds { row: -1, col: 7 })
        );
    }

    #[test]
    fn blanks_can_be_toggled_on_tiles_only() {
        let dictionary = dictionary();
        let mut game_state = GameState::from_rules("wwf", 15, &dictionary).unwrap();
        game_state.play(8, 8, "c?at", matrix::Orientation::Row).unwrap();
        assert!(game_state.grid().cell(7, 7).is_blank());
        assert_eq!(game_state.toggle_blank(8, 8).ok(), Some(false));
        assert_eq!(game_state.toggle_blank(8, 8).ok(), Some(true));
        assert!(game_state.toggle_blank(1, 1).is_err());
        assert!(game_state.toggle_blank(16, 1).is_err());
    }

    #[test]
    fn known_words_are_face_value() {
        let dictionary = dictionary();
        let game_state = GameState::from_rules("wwf", 15, &dictionary).unwrap();
        let words = game_state.known_words("tca?");
        let texts = words.iter().map(|w| w.text()).collect::<Vec<_>>();
        // zax needs two wildcards
        assert!(!texts.contains(&"zax"));
        assert_eq!(words[0].score(), 6);
        assert!(words.windows(2).all(|w| w[0].score() >= w[1].score()));
        let cats = words.iter().find(|w| w.text() == "cats");
        assert_eq!(cats.map(|w| w.score()), Some(6));
        assert_eq!(texts.iter().filter(|&&t| t == "cat").count(), 1);
    }

    #[test]
    fn json_keeps_everything() {
        let dictionary = dictionary();
        let mut game_state = GameState::from_rules("wwf-open", 11, &dictionary).unwrap();
        game_state.play(1, 1, "ca?t", matrix::Orientation::Col).unwrap();
        let json = game_state.to_json().unwrap();
        let back = GameState::from_json(&json, &dictionary).unwrap();
        assert_eq!(back.game_config().name(), "wwf-open");
        assert!(back.grid() == game_state.grid());
        let empty = r#"{"rules":"wwf","size":3,"turn":0,"cells":[]}"#;
        assert!(GameState::from_json(empty, &dictionary).is_err());
    }

    #[test]
    fn oversized_boards_are_refused() {
        let dictionary = dictionary();
        for size in [5_000_000_000usize, 1 << 32, usize::MAX] {
            let json = format!(
                r#"{{"rules":"wwf","size":{},"turn":0,"cells":[]}}"#,
                size
            );
            assert!(GameState::from_json(&json, &dictionary).is_err());
        }
        // the cell count matches, the size is still too big
        let size = game_config::MAX_BOARD_SIZE + 1;
        let json = format!(
            r#"{{"rules":"plain","size":{},"turn":0,"cells":[{}]}}"#,
            size,
            vec!["{}"; size * size].join(",")
        );
        assert!(GameState::from_json(&json, &dictionary).is_err());
    }

    #[test]
    fn draws_come_from_unseen_tiles() {
        let dictionary = dictionary();
        let game_state = GameState::from_rules("wwf", 15, &dictionary).unwrap();
        assert_eq!(game_state.draw(Some(42)), game_state.draw(Some(42)));
        assert_eq!(game_state.draw(None).len(), 7);
        assert_eq!(game_state.unseen_distribution("").len(), 104);
    }
}
