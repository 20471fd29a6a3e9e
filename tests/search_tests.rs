use proptest::prelude::*;
use rackfit::dictionary::Dictionary;
use rackfit::error::Rejection;
use rackfit::game_config::{self, GameConfig};
use rackfit::grid::Grid;
use rackfit::matrix::Orientation;
use rackfit::movegen::{MoveGenerator, Rack};
use rackfit::placement::PlacementValidator;
use rackfit::play_scorer::PlayScorer;
use rstest::rstest;
use std::collections::BTreeSet;

const WORDS: &[&str] = &["cat", "cats", "act", "tacs", "at", "as", "ta", "sat", "tas"];

// "cat" across the middle row, one turn in.
fn board_with_cat(game_config: &GameConfig, row: usize, col: usize) -> Grid {
    let mut grid = Grid::new(game_config.board_layout());
    for (i, c) in "cat".chars().enumerate() {
        grid.set_letter(row, col + i, c, false, false);
    }
    grid.set_turn(1);
    grid
}

fn summary(
    game_config: &GameConfig,
    dictionary: &Dictionary,
    grid: &mut Grid,
    rack: &str,
) -> Vec<(String, usize, usize, Orientation, i32)> {
    MoveGenerator::new(game_config, dictionary)
        .find_best(grid, &Rack::parse(rack), 0)
        .iter()
        .map(|c| (c.text().to_string(), c.row() + 1, c.col() + 1, c.orientation(), c.score()))
        .collect()
}

#[test]
fn small_board_search_is_complete() {
    let game_config = game_config::make_plain_game_config(5);
    let dictionary = Dictionary::from_words(["cat", "cats", "at", "ta", "tas", "sat"]);
    let mut grid = board_with_cat(&game_config, 2, 1);
    let found = summary(&game_config, &dictionary, &mut grid, "ts");
    let expected = [
        ("cats", 3, 2, Orientation::Row, 7),
        ("sat", 2, 3, Orientation::Col, 3),
        ("tas", 2, 3, Orientation::Col, 3),
        ("at", 3, 3, Orientation::Col, 2),
        ("ta", 2, 3, Orientation::Col, 2),
    ]
    .map(|(w, r, c, o, s)| (w.to_string(), r, c, o, s));
    assert_eq!(found, expected);
}

#[test]
fn only_cats_extends_cat_with_s() {
    let game_config = game_config::make_words_with_friends_game_config(15);
    let dictionary = Dictionary::from_words(["cat", "cats", "act", "tacs"]);
    let mut grid = board_with_cat(&game_config, 7, 7);
    let found = summary(&game_config, &dictionary, &mut grid, "S");
    assert_eq!(found, [("cats".to_string(), 8, 8, Orientation::Row, 7)]);
}

#[rstest]
#[case::plain_center(7, 7, "cat", &[], 6)]
#[case::double_word_at_the_end(7, 9, "cat", &[], 12)]
#[case::blank_on_the_double_word(7, 9, "cat", &[2], 5)]
#[case::all_blanks(7, 7, "cat", &[0, 1, 2], 0)]
#[case::triple_letter(5, 5, "cat", &[], 14)]
fn first_plays_score(
    #[case] row: usize,
    #[case] col: usize,
    #[case] word: &str,
    #[case] blanks: &[usize],
    #[case] expected: i32,
) {
    let game_config = game_config::make_open_words_with_friends_game_config(15);
    let dictionary = Dictionary::from_words(WORDS);
    let mut grid = Grid::new(game_config.board_layout());
    let blanks = blanks.iter().copied().collect();
    let pending = PlacementValidator::new(&dictionary, game_config.first_move())
        .attempt_placement(&mut grid, row, col, word, &blanks, Orientation::Row)
        .unwrap();
    assert_eq!(PlayScorer::new().score(&game_config, &grid), expected);
    pending.rollback(&mut grid);
}

#[rstest]
#[case::off_the_edge(7, 13, "cats", Orientation::Row)]
#[case::clashes_with_c(7, 7, "at", Orientation::Row)]
#[case::floating(0, 0, "at", Orientation::Row)]
#[case::makes_ata(5, 8, "at", Orientation::Col)]
#[case::makes_aa(8, 8, "as", Orientation::Row)]
#[case::origin_far_below(usize::MAX, 0, "at", Orientation::Col)]
#[case::origin_far_right(7, usize::MAX, "at", Orientation::Row)]
#[case::origin_past_the_edge(15, 7, "t", Orientation::Row)]
fn rejections_are_clean(
    #[case] row: usize,
    #[case] col: usize,
    #[case] word: &str,
    #[case] orientation: Orientation,
) {
    let game_config = game_config::make_words_with_friends_game_config(15);
    let dictionary = Dictionary::from_words(WORDS);
    let mut grid = board_with_cat(&game_config, 7, 7);
    let before = grid.clone();
    let result = PlacementValidator::new(&dictionary, game_config.first_move()).attempt_placement(
        &mut grid,
        row,
        col,
        word,
        &BTreeSet::new(),
        orientation,
    );
    assert!(result.is_err());
    assert!(grid == before);
}

#[test]
fn bingo_pays_once() {
    let game_config = game_config::make_plain_game_config(15);
    let dictionary = Dictionary::from_words(["abcdefg", "abcdefgh"]);
    let mut grid = Grid::new(game_config.board_layout());
    let mut validator = PlacementValidator::new(&dictionary, game_config.first_move());
    let pending = validator
        .attempt_placement(&mut grid, 7, 4, "abcdefg", &BTreeSet::new(), Orientation::Row)
        .unwrap();
    assert_eq!(PlayScorer::new().score(&game_config, &grid), 19 + 35);
    pending.rollback(&mut grid);
    let pending = validator
        .attempt_placement(&mut grid, 7, 4, "abcdefgh", &BTreeSet::new(), Orientation::Row)
        .unwrap();
    assert_eq!(PlayScorer::new().score(&game_config, &grid), 22);
    pending.rollback(&mut grid);
}

#[test]
fn first_move_off_the_star_is_refused() {
    let game_config = game_config::make_words_with_friends_game_config(15);
    let dictionary = Dictionary::from_words(WORDS);
    let mut grid = Grid::new(game_config.board_layout());
    let result = PlacementValidator::new(&dictionary, game_config.first_move()).attempt_placement(
        &mut grid,
        0,
        0,
        "cat",
        &BTreeSet::new(),
        Orientation::Row,
    );
    assert_eq!(result.err(), Some(Rejection::NotConnected));
}

prop_compose! {
    fn arb_attempt()(
        row in 0usize..15,
        col in 0usize..15,
        word in prop::sample::select(
            vec!["cat", "cats", "act", "tacs", "at", "as", "ta", "sat", "zzz", "t"],
        ),
        down in any::<bool>(),
        blanks in prop::collection::btree_set(0usize..4, 0..3),
    ) -> (usize, usize, &'static str, Orientation, BTreeSet<usize>) {
        (row, col, word, if down { Orientation::Col } else { Orientation::Row }, blanks)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn every_attempt_leaves_the_grid_as_it_was(
        (row, col, word, orientation, blanks) in arb_attempt(),
    ) {
        let game_config = game_config::make_words_with_friends_game_config(15);
        let dictionary = Dictionary::from_words(WORDS);
        let mut grid = board_with_cat(&game_config, 7, 7);
        let before = grid.clone();
        let mut validator = PlacementValidator::new(&dictionary, game_config.first_move());
        let attempt = validator.attempt_placement(&mut grid, row, col, word, &blanks, orientation);
        if let Ok(pending) = attempt {
            let mut scorer = PlayScorer::new();
            let snapshot = grid.clone();
            let first = scorer.score(&game_config, &grid);
            let second = scorer.score(&game_config, &grid);
            prop_assert_eq!(first, second);
            prop_assert!(grid == snapshot);
            pending.rollback(&mut grid);
        }
        prop_assert!(grid == before);
    }

    #[test]
    fn search_never_dirties_the_grid(rack in "[acst?]{0,5}") {
        let game_config = game_config::make_words_with_friends_game_config(15);
        let dictionary = Dictionary::from_words(WORDS);
        let mut grid = board_with_cat(&game_config, 7, 7);
        let before = grid.clone();
        let found = MoveGenerator::new(&game_config, &dictionary)
            .find_best(&mut grid, &Rack::parse(&rack), 0);
        prop_assert!(grid == before);
        prop_assert!(found.windows(2).all(|w| w[0].score() >= w[1].score()));
        prop_assert!(found.iter().all(|c| c.score() > 0));
    }
}
