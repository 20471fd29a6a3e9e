// Copyright (C) 2020-2026 Andy Kurnia.

use super::{candidate, display, error, game_state, matrix};

pub const COMMANDS: &[&str] = &[
    "print",
    "play",
    "find",
    "load",
    "blank",
    "words",
    "undo",
    "distribution",
    "draw",
    "export",
    "json",
    "help",
];

// A missing or zero limit lists every play.
pub const ALL_PLAYS: usize = 0;

pub const USAGE: &str = "commands (rows and columns count from 1):
  print [bonuses]                  show the board, or its bonus squares
  play <row> <col> <word> <row|col>
                                   play a word, '?' after a letter marks a blank
  find <letters> [limit]           best plays for a rack, '?' is a blank,
                                   all of them unless limited
  load <text file>                 replace the board with a text board
  blank <row> <col>                toggle whether a tile is a blank
  words <letters>                  words the rack alone can make
  undo                             take back the latest play
  distribution [leftovers]         tiles not on the board or in leftovers
  draw [seed]                      draw a random rack from unseen tiles
  export <letters> <csv file> [limit]
                                   write plays to a csv file
  json <letters> [limit]           print plays as json";

fn arg<'b>(args: &'b [String], idx: usize, what: &str) -> error::Returns<&'b str> {
    match args.get(idx) {
        Some(s) => Ok(s.as_str()),
        None => {
            return_error!(format!("{}: missing {}", args[0], what));
        }
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, what: &str) -> error::Returns<T> {
    let s = arg(args, idx, what)?;
    match s.parse::<T>() {
        Ok(v) => Ok(v),
        Err(_) => {
            return_error!(format!("{}: bad {} {:?}", args[0], what, s));
        }
    }
}

fn optional_arg<T: std::str::FromStr>(
    args: &[String],
    idx: usize,
    what: &str,
    default: T,
) -> error::Returns<T> {
    if args.len() > idx {
        parse_arg(args, idx, what)
    } else {
        Ok(default)
    }
}

fn limit_arg(args: &[String], idx: usize) -> error::Returns<usize> {
    optional_arg(args, idx, "limit", ALL_PLAYS)
}

fn candidate_json(c: &candidate::WordCandidate) -> serde_json::Value {
    serde_json::json!({
        "word": c.text(),
        "display": c.annotated_text(),
        "score": c.score(),
        "row": c.row() + 1,
        "col": c.col() + 1,
        "direction": c.orientation().label(),
        "blanks": c.wildcard_indices(),
        "bonuses": c.bonus_tags().iter().map(|tag| tag.label()).collect::<Vec<_>>(),
        "also": c
            .attached()
            .iter()
            .map(|a| serde_json::json!({ "word": a.annotated_text(), "score": a.score() }))
            .collect::<Vec<_>>(),
    })
}

pub fn candidates_to_json(candidates: &[candidate::WordCandidate]) -> error::Returns<String> {
    let result = candidates.iter().map(candidate_json).collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn write_csv<W: std::io::Write>(
    writer: W,
    candidates: &[candidate::WordCandidate],
) -> error::Returns<()> {
    let mut csv_out = csv::Writer::from_writer(writer);
    csv_out.serialize(("score", "word", "row", "col", "direction", "bonuses", "also"))?;
    for c in candidates {
        csv_out.serialize((
            c.score(),
            c.annotated_text(),
            c.row() + 1,
            c.col() + 1,
            c.orientation().label(),
            c.bonus_labels(),
            c.attached()
                .iter()
                .map(|a| a.annotated_text())
                .collect::<Vec<_>>()
                .join(" "),
        ))?;
    }
    csv_out.flush()?;
    Ok(())
}

// Runs one command against the session, printing to stdout. `args[0]` is the
// command name.
pub fn execute(game_state: &mut game_state::GameState, args: &[String]) -> error::Returns<()> {
    let Some(command) = args.first() else {
        return Ok(());
    };
    match command.as_str() {
        "help" => {
            println!("{}", USAGE);
        }
        "print" => {
            if args.get(1).map(String::as_str) == Some("bonuses") {
                print!(
                    "{}",
                    display::bonuses_to_text(game_state.game_config().board_layout())
                );
            } else {
                display::print_board(game_state.grid());
            }
        }
        "play" => {
            let row = parse_arg::<usize>(args, 1, "row")?;
            let col = parse_arg::<usize>(args, 2, "col")?;
            let word = arg(args, 3, "word")?;
            let orientation = parse_arg::<matrix::Orientation>(args, 4, "direction")?;
            let played = game_state.play(row, col, word, orientation)?;
            println!("{}", played);
        }
        "find" => {
            let rack = arg(args, 1, "letters")?;
            let limit = limit_arg(args, 2)?;
            let t0 = std::time::Instant::now();
            let found = game_state.find_best_parallel(rack, limit);
            tracing::info!(found = found.len(), elapsed = ?t0.elapsed(), "search done");
            if found.is_empty() {
                println!("no plays");
            }
            for c in &found {
                println!("{}", c);
            }
        }
        "load" => {
            let path = arg(args, 1, "text file")?;
            game_state.load_text(&std::fs::read_to_string(path)?)?;
            display::print_board(game_state.grid());
        }
        "blank" => {
            let row = parse_arg::<usize>(args, 1, "row")?;
            let col = parse_arg::<usize>(args, 2, "col")?;
            if game_state.toggle_blank(row, col)? {
                println!("({},{}) is now a blank", row, col);
            } else {
                println!("({},{}) is no longer a blank", row, col);
            }
        }
        "words" => {
            let rack = arg(args, 1, "letters")?;
            for c in game_state.known_words(rack) {
                println!("{:3}  {}", c.score(), c.annotated_text());
            }
        }
        "undo" => {
            println!("removed {} tiles", game_state.undo());
        }
        "distribution" => {
            let leftovers = args.get(1).map_or("", String::as_str);
            let unseen = game_state.unseen_distribution(leftovers);
            println!("{}", unseen);
            println!("{} unseen", unseen.len());
        }
        "draw" => {
            let seed = if args.len() > 1 {
                Some(parse_arg::<u64>(args, 1, "seed")?)
            } else {
                None
            };
            println!("{}", game_state.draw(seed));
        }
        "export" => {
            let rack = arg(args, 1, "letters")?;
            let path = arg(args, 2, "csv file")?;
            let limit = limit_arg(args, 3)?;
            let found = game_state.find_best_parallel(rack, limit);
            write_csv(std::fs::File::create(path)?, &found)?;
            println!("wrote {} plays to {}", found.len(), path);
        }
        "json" => {
            let rack = arg(args, 1, "letters")?;
            let limit = limit_arg(args, 2)?;
            println!(
                "{}",
                candidates_to_json(&game_state.find_best_parallel(rack, limit))?
            );
        }
        _ => {
            return_error!(format!("unknown command {:?}, try help", command));
        }
    }
    Ok(())
}
