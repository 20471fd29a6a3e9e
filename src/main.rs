// Copyright (C) 2020-2026 Andy Kurnia.

use rackfit::{commands, error, game_state, settings};

fn main() -> error::Returns<()> {
    settings::init_tracing();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 3 || args[2] == "help" {
        println!(
            "usage: {} <board file> <command> [args]\n{}",
            args.first().map_or("rackfit", String::as_str),
            commands::USAGE
        );
        println!(
            "the dictionary is read from ${} (default {}), logging is set by ${}",
            settings::DICTIONARY_ENV,
            settings::DEFAULT_DICTIONARY,
            settings::LOG_ENV
        );
        return Ok(());
    }
    let dictionary = settings::load_dictionary(&settings::dictionary_path())?;
    let board_path = std::path::Path::new(&args[1]);
    let mut game_state = game_state::GameState::open_or_create(board_path, &dictionary)?;
    commands::execute(&mut game_state, &args[2..])?;
    game_state.save(board_path)?;
    Ok(())
}
