// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error};

pub const DEFAULT_BOARD_SIZE: usize = 15;
// board coordinates print in two columns
pub const MAX_BOARD_SIZE: usize = 99;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BingoRule {
    pub threshold: usize,
    pub bonus: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMoveRule {
    // the first play must cover the center cell
    CoverStar,
    // older boards: the first play may go anywhere
    Anywhere,
}

pub struct StaticGameConfig<'a> {
    name: &'static str,
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    bingo: BingoRule,
    first_move: FirstMoveRule,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        match self {
            GameConfig::Static(x) => x.name,
        }
    }

    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn bingo(&self) -> BingoRule {
        match self {
            GameConfig::Static(x) => x.bingo,
        }
    }

    #[inline(always)]
    pub fn first_move(&self) -> FirstMoveRule {
        match self {
            GameConfig::Static(x) => x.first_move,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i32 {
        let bingo = self.bingo();
        if num_played == bingo.threshold {
            bingo.bonus
        } else {
            0
        }
    }
}

static WWF_BINGO: BingoRule = BingoRule {
    threshold: 7,
    bonus: 35,
};

pub fn make_words_with_friends_game_config<'a>(size: usize) -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        name: "wwf",
        alphabet: alphabet::make_words_with_friends_alphabet(),
        board_layout: board_layout::make_words_with_friends_board_layout(size),
        bingo: WWF_BINGO,
        first_move: FirstMoveRule::CoverStar,
    })
}

pub fn make_open_words_with_friends_game_config<'a>(size: usize) -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        name: "wwf-open",
        alphabet: alphabet::make_words_with_friends_alphabet(),
        board_layout: board_layout::make_words_with_friends_board_layout(size),
        bingo: WWF_BINGO,
        first_move: FirstMoveRule::Anywhere,
    })
}

pub fn make_plain_game_config<'a>(size: usize) -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        name: "plain",
        alphabet: alphabet::make_words_with_friends_alphabet(),
        board_layout: board_layout::make_plain_board_layout(size),
        bingo: WWF_BINGO,
        first_move: FirstMoveRule::CoverStar,
    })
}

pub fn make_game_config<'a>(name: &str, size: usize) -> error::Returns<GameConfig<'a>> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return_error!(format!(
            "board size must be from 1 to {}, not {}",
            MAX_BOARD_SIZE, size
        ));
    }
    Ok(match name {
        "wwf" => make_words_with_friends_game_config(size),
        "wwf-open" => make_open_words_with_friends_game_config(size),
        "plain" => make_plain_game_config(size),
        _ => {
            return_error!(format!(
                "unknown rules {:?} (try 'wwf', 'wwf-open' or 'plain')",
                name
            ));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bingo_only_on_exact_threshold() {
        let game_config = make_words_with_friends_game_config(DEFAULT_BOARD_SIZE);
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(7), 35);
        assert_eq!(game_config.num_played_bonus(8), 0);
    }

    #[test]
    fn rules_by_name() {
        let first_move = |name| make_game_config(name, 15).map(|c| c.first_move()).ok();
        assert_eq!(first_move("wwf"), Some(FirstMoveRule::CoverStar));
        assert_eq!(first_move("wwf-open"), Some(FirstMoveRule::Anywhere));
        assert!(make_game_config("scrabble", 15).is_err());
        assert!(make_game_config("wwf", 0).is_err());
        assert!(make_game_config("plain", MAX_BOARD_SIZE).is_ok());
        assert!(make_game_config("plain", MAX_BOARD_SIZE + 1).is_err());
        assert!(make_game_config("wwf", usize::MAX).is_err());
    }
}
