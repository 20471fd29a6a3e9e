// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, grid};

pub const EMPTY: &str = "-";
pub const EMPTY_PREMIUM: &str = "*";
pub const WILDCARD_MARK: char = '?';

// Committed letters in lowercase, the latest turn in uppercase, '?' after a
// wildcard tile.
#[inline(always)]
pub fn cell_label(cell: &grid::Cell) -> String {
    match cell.letter() {
        Some(letter) => {
            let mut s = String::with_capacity(2);
            s.push(if cell.is_fresh() || cell.is_pending() {
                letter.to_ascii_uppercase()
            } else {
                letter
            });
            if cell.is_blank() {
                s.push(WILDCARD_MARK);
            }
            s
        }
        None if cell.has_premium() => EMPTY_PREMIUM.to_string(),
        None => EMPTY.to_string(),
    }
}

#[inline(always)]
pub fn premium_label(premium: board_layout::Premium) -> &'static str {
    match (premium.word_multiplier, premium.letter_multiplier) {
        (3, _) => "TW",
        (2, _) => "DW",
        (_, 3) => "TL",
        (_, 2) => "DL",
        _ => "--",
    }
}

pub fn board_to_text(grid: &grid::Grid) -> String {
    let dim = grid.dim();
    let mut text = String::with_capacity(dim.len() * 3);
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if col > 0 {
                text.push(' ');
            }
            text.push_str(&cell_label(grid.cell(row, col)));
        }
        text.push('\n');
    }
    text
}

pub fn bonuses_to_text(board_layout: &board_layout::BoardLayout) -> String {
    let dim = board_layout.dim();
    let mut text = String::with_capacity(dim.len() * 3);
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if col > 0 {
                text.push(' ');
            }
            text.push_str(premium_label(board_layout.premium_at(row, col)));
        }
        text.push('\n');
    }
    text
}

fn parse_token(token: &str) -> Option<Option<(char, bool, bool)>> {
    if token == EMPTY || token == EMPTY_PREMIUM {
        return Some(None);
    }
    let mut chars = token.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let blank = match chars.next() {
        None => false,
        Some(WILDCARD_MARK) => true,
        Some(_) => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(Some((letter.to_ascii_lowercase(), blank, letter.is_ascii_uppercase())))
}

// The inverse of board_to_text. Bonus squares come from `board_layout`, so a
// '*' reads back as a plain empty cell.
pub fn parse_board_text(
    text: &str,
    board_layout: &board_layout::BoardLayout,
) -> error::Returns<grid::Grid> {
    let dim = board_layout.dim();
    let mut grid = grid::Grid::new(board_layout);
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    if rows.len() != dim.rows {
        return_error!(format!(
            "expected {} rows, found {}",
            dim.rows,
            rows.len()
        ));
    }
    for (row, line) in rows.iter().enumerate() {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != dim.cols {
            return_error!(format!(
                "row {}: expected {} cells, found {}",
                row + 1,
                dim.cols,
                tokens.len()
            ));
        }
        for (col, token) in tokens.iter().enumerate() {
            match parse_token(token) {
                Some(Some((letter, blank, fresh))) => {
                    grid.set_letter(row, col, letter, blank, fresh)
                }
                Some(None) => {}
                None => {
                    return_error!(format!("row {}: bad cell {:?}", row + 1, token));
                }
            }
        }
    }
    grid.set_turn(if grid.has_tiles() { 1 } else { 0 });
    Ok(grid)
}

pub fn print_board(grid: &grid::Grid) {
    let dim = grid.dim();
    print!("   ");
    for c in 0..dim.cols {
        print!(" {:>2}", c + 1);
    }
    println!();
    print!("   +");
    for _ in 1..dim.cols {
        print!("---");
    }
    println!("--+");
    for r in 0..dim.rows {
        print!("{:2} |", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                print!(" ")
            }
            print!("{:<2}", cell_label(grid.cell(r, c)));
        }
        println!("|{}", r + 1);
    }
    print!("   +");
    for _ in 1..dim.cols {
        print!("---");
    }
    println!("--+");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips_letters_and_flags() {
        let layout = board_layout::make_words_with_friends_board_layout(5);
        let mut grid = grid::Grid::new(&layout);
        grid.set_letter(2, 1, 'c', false, false);
        grid.set_letter(2, 2, 'a', true, false);
        grid.set_letter(2, 3, 't', false, true);
        let text = board_to_text(&grid);
        assert_eq!(text.lines().nth(2), Some("- c a? T -"));
        assert_eq!(text.lines().next(), Some("* - - - *"));
        let back = parse_board_text(&text, &layout).unwrap();
        assert!(back.cell(2, 2).is_blank());
        assert!(back.cell(2, 3).is_fresh());
        assert_eq!(back.turn(), 1);
        assert_eq!(board_to_text(&back), text);
    }

    #[test]
    fn bad_text_names_the_row() {
        let layout = board_layout::make_plain_board_layout(3);
        let empty = parse_board_text("- - -\n- - -\n- - -\n", &layout);
        assert_eq!(empty.map(|g| g.turn()).ok(), Some(0));
        let err = parse_board_text("- - -\n- -\n- - -\n", &layout).err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("row 2: expected 3 cells, found 2"));
        assert!(parse_board_text("- - -\n- 7 -\n- - -\n", &layout).is_err());
        assert!(parse_board_text("- - -\n- - -\n", &layout).is_err());
        assert!(parse_board_text("- - -\n- ab -\n- - -\n", &layout).is_err());
    }

    #[test]
    fn bonus_view() {
        let text = bonuses_to_text(&board_layout::make_words_with_friends_board_layout(15));
        let first = text.lines().next().unwrap_or_default().split(' ').collect::<Vec<_>>();
        assert_eq!(first[3], "TW");
        assert_eq!(first[6], "TL");
        assert_eq!(first[0], "--");
    }
}
