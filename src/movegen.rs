// Copyright (C) 2020-2026 Andy Kurnia.

use super::{candidate, dictionary, fash, game_config, grid, matrix, placement, play_scorer};
use std::collections::BTreeSet;

// Letters plus wildcard tiles. Parsed case-insensitively; '?' and '_' are
// wildcards.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Rack {
    tally: dictionary::LetterTally,
    num_wildcards: usize,
}

impl Rack {
    pub fn new(tally: dictionary::LetterTally, num_wildcards: usize) -> Self {
        Self {
            tally,
            num_wildcards,
        }
    }

    pub fn parse(s: &str) -> Self {
        let mut rack = Self::default();
        for c in s.chars() {
            match c.to_ascii_lowercase() {
                '?' | '_' => rack.num_wildcards += 1,
                c if c.is_ascii_lowercase() => rack.tally.add(c),
                c if c.is_whitespace() => {}
                c => tracing::warn!(%c, "ignoring rack character"),
            }
        }
        rack
    }

    #[inline(always)]
    pub fn tally(&self) -> &dictionary::LetterTally {
        &self.tally
    }

    #[inline(always)]
    pub fn num_wildcards(&self) -> usize {
        self.num_wildcards
    }

    pub fn len(&self) -> usize {
        self.tally.len() + self.num_wildcards
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.tally)?;
        for _ in 0..self.num_wildcards {
            write!(f, "?")?;
        }
        Ok(())
    }
}

// A dictionary word with the positions a wildcard tile stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion<'a> {
    pub word: &'a str,
    pub wildcard_indices: BTreeSet<usize>,
}

// Every word formable from `available` plus up to `num_wildcards` wildcards,
// once per way of assigning wildcards to its letters. An assignment covers at
// least the letters `available` lacks; spare wildcards may stay unused or
// stand in for letters that are available. Entries come in key order, so the
// sequence is the same every time it is asked for.
pub fn expand_wildcards<'a>(
    dictionary: &'a dictionary::Dictionary,
    available: dictionary::LetterTally,
    num_wildcards: usize,
) -> impl Iterator<Item = Expansion<'a>> + 'a {
    dictionary.entries().iter().flat_map(move |entry| {
        let missing = available.shortfall(entry.tally());
        let fits = missing.len() <= num_wildcards;
        entry
            .words()
            .iter()
            .filter(move |_| fits)
            .flat_map(move |word| {
                let mut assignments = Vec::new();
                assign_wildcards(
                    word.as_bytes(),
                    0,
                    num_wildcards,
                    missing,
                    &mut Vec::new(),
                    &mut assignments,
                );
                assignments.into_iter().map(move |wildcard_indices| Expansion {
                    word: &**word,
                    wildcard_indices,
                })
            })
    })
}

// Chooses positions in ascending order; `missing` counts the letters still
// to be covered.
fn assign_wildcards(
    word: &[u8],
    start: usize,
    spare: usize,
    missing: dictionary::LetterTally,
    chosen: &mut Vec<usize>,
    out: &mut Vec<BTreeSet<usize>>,
) {
    if missing.is_empty() {
        out.push(chosen.iter().copied().collect());
    }
    if spare == 0 {
        return;
    }
    for i in start..word.len() {
        let mut missing = missing;
        // taking a letter that was already covered is fine
        missing.take(word[i] as char);
        chosen.push(i);
        assign_wildcards(word, i + 1, spare - 1, missing, chosen, out);
        chosen.pop();
    }
}

// Whether `word` fits the line at `offset`: existing letters must match, new
// letters must come from the rack (wildcard positions from its wildcards and
// only onto empty cells), the word must be the whole run, and at least one
// tile must be placed.
pub fn lines_up(
    word: &str,
    wildcard_indices: &BTreeSet<usize>,
    bucket: &[Option<char>],
    offset: usize,
    rack: &Rack,
) -> bool {
    let len = word.chars().count();
    if len == 0 || offset + len > bucket.len() {
        return false;
    }
    if offset > 0 && bucket[offset - 1].is_some() {
        return false;
    }
    if offset + len < bucket.len() && bucket[offset + len].is_some() {
        return false;
    }
    let mut tally = rack.tally;
    let mut wildcards = rack.num_wildcards;
    let mut num_placed = 0;
    for (i, c) in word.chars().enumerate() {
        match bucket[offset + i] {
            Some(existing) => {
                if existing != c || wildcard_indices.contains(&i) {
                    return false;
                }
            }
            None => {
                if wildcard_indices.contains(&i) {
                    if wildcards == 0 {
                        return false;
                    }
                    wildcards -= 1;
                } else if !tally.take(c) {
                    return false;
                }
                num_placed += 1;
            }
        }
    }
    num_placed > 0
}

// Lines worth searching, rows top to bottom then columns left to right.
pub fn live_lines(
    grid: &grid::Grid,
    first_move: game_config::FirstMoveRule,
) -> Vec<(matrix::Orientation, usize)> {
    let dim = grid.dim();
    let mut lines = Vec::new();
    for orientation in [matrix::Orientation::Row, matrix::Orientation::Col] {
        for lane in 0..dim.num_lanes(orientation) {
            if line_is_live(grid, first_move, orientation, lane) {
                lines.push((orientation, lane));
            }
        }
    }
    lines
}

fn line_is_live(
    grid: &grid::Grid,
    first_move: game_config::FirstMoveRule,
    orientation: matrix::Orientation,
    lane: usize,
) -> bool {
    if grid.turn() == 0 {
        let (star_row, star_col) = grid.star();
        return match first_move {
            game_config::FirstMoveRule::Anywhere => true,
            game_config::FirstMoveRule::CoverStar => match orientation {
                matrix::Orientation::Row => lane == star_row,
                matrix::Orientation::Col => lane == star_col,
            },
        };
    }
    let dim = grid.dim();
    (0..dim.lane(orientation, lane).len()).any(|i| {
        let (row, col) = dim.row_col_in_lane(orientation, lane, i);
        grid.touches_committed(row, col)
    })
}

pub struct MoveGenerator<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    dictionary: &'a dictionary::Dictionary,
    validator: placement::PlacementValidator<'a>,
    scorer: play_scorer::PlayScorer,
    bucket: Vec<Option<char>>,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        dictionary: &'a dictionary::Dictionary,
    ) -> Self {
        Self {
            game_config,
            dictionary,
            validator: placement::PlacementValidator::new(dictionary, game_config.first_move()),
            scorer: play_scorer::PlayScorer::new(),
            bucket: Vec::new(),
        }
    }

    // Every legal play of `rack` on `grid`, best first, at most `limit` of them
    // (0 for all). The grid is returned exactly as it came in.
    pub fn find_best(
        &mut self,
        grid: &mut grid::Grid,
        rack: &Rack,
        limit: usize,
    ) -> Vec<candidate::WordCandidate> {
        let mut found = Vec::new();
        for (orientation, lane) in live_lines(grid, self.game_config.first_move()) {
            self.search_line(grid, rack, orientation, lane, &mut found);
        }
        rank(found, limit)
    }

    // Same result as find_best, with lines shared out over one grid copy per
    // thread.
    pub fn find_best_parallel(
        game_config: &'a game_config::GameConfig<'a>,
        dictionary: &'a dictionary::Dictionary,
        grid: &grid::Grid,
        rack: &Rack,
        limit: usize,
    ) -> Vec<candidate::WordCandidate> {
        let lines = live_lines(grid, game_config.first_move());
        let num_threads = num_cpus::get().clamp(1, lines.len().max(1));
        let chunk_size = lines.len().div_ceil(num_threads).max(1);
        tracing::debug!(lines = lines.len(), num_threads, "parallel search");
        let found = std::thread::scope(|s| {
            let workers = lines
                .chunks(chunk_size)
                .map(|chunk| {
                    let mut grid = grid.clone();
                    s.spawn(move || {
                        let mut move_generator = MoveGenerator::new(game_config, dictionary);
                        let mut found = Vec::new();
                        for &(orientation, lane) in chunk {
                            move_generator.search_line(
                                &mut grid,
                                rack,
                                orientation,
                                lane,
                                &mut found,
                            );
                        }
                        found
                    })
                })
                .collect::<Vec<_>>();
            // joined in spawn order, which is line order
            let mut found = Vec::new();
            for worker in workers {
                match worker.join() {
                    Ok(chunk_found) => found.extend(chunk_found),
                    Err(e) => std::panic::resume_unwind(e),
                }
            }
            found
        });
        rank(found, limit)
    }

    fn search_line(
        &mut self,
        grid: &mut grid::Grid,
        rack: &Rack,
        orientation: matrix::Orientation,
        lane: usize,
        found: &mut Vec<candidate::WordCandidate>,
    ) {
        let dim = grid.dim();
        let strider = dim.lane(orientation, lane);
        self.bucket.clear();
        self.bucket
            .extend((0..strider.len()).map(|i| grid.cell_at(strider.at(i)).letter()));
        let mut available = rack.tally;
        for c in self.bucket.iter().flatten() {
            available.add(*c);
        }
        let num_found = found.len();
        let dictionary = self.dictionary;
        for expansion in expand_wildcards(dictionary, available, rack.num_wildcards) {
            let len = expansion.word.len();
            if len > self.bucket.len() {
                continue;
            }
            for offset in 0..=self.bucket.len() - len {
                if !lines_up(
                    expansion.word,
                    &expansion.wildcard_indices,
                    &self.bucket,
                    offset,
                    rack,
                ) {
                    continue;
                }
                let (row, col) = dim.row_col(strider.at(offset));
                let Ok(pending_set) = self.validator.attempt_placement(
                    grid,
                    row,
                    col,
                    expansion.word,
                    &expansion.wildcard_indices,
                    orientation,
                ) else {
                    continue;
                };
                let sheet = self.scorer.score_sheet(self.game_config, grid);
                pending_set.rollback(grid);
                if sheet.total == 0 {
                    continue;
                }
                found.push(sheet.apply_to(candidate::WordCandidate::new(
                    expansion.word,
                    row,
                    col,
                    orientation,
                    expansion.wildcard_indices.clone(),
                )));
            }
        }
        tracing::trace!(%orientation, lane, found = found.len() - num_found, "searched line");
    }
}

// First occurrence of each play wins; ties keep their search order.
fn rank(found: Vec<candidate::WordCandidate>, limit: usize) -> Vec<candidate::WordCandidate> {
    let mut seen = fash::MyHashSet::default();
    let mut ranked = found
        .into_iter()
        .filter(|c| seen.insert(c.key()))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));
    if limit > 0 {
        ranked.truncate(limit);
    }
    ranked
}
