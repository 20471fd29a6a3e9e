// Copyright (C) 2020-2026 Andy Kurnia.

mod rlhelper;

use rackfit::{commands, error, game_config, game_state, settings};

const SHELL_USAGE: &str = "  new [rules] [size]               start over (wwf, wwf-open, plain)
  open <board file>                load a saved board, or start one there
  save [board file]                save the board
  source <file>                    run the commands in a file
  exit";

fn main() -> error::Returns<()> {
    settings::init_tracing();
    let dictionary = settings::load_dictionary(&settings::dictionary_path())?;
    println!("{} words", dictionary.num_words());
    let mut game_state =
        game_state::GameState::from_rules("wwf", game_config::DEFAULT_BOARD_SIZE, &dictionary)?;
    let mut board_path = None::<std::path::PathBuf>;

    let mut rl = rlhelper::new_rl_editor(
        commands::COMMANDS
            .iter()
            .copied()
            .chain(["new", "open", "save", "source", "exit"])
            .collect(),
    )?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                    continue;
                }
            };
            if strings.is_empty() {
                continue;
            }
            match strings[0].as_str() {
                "help" => {
                    println!("{}\n{}", commands::USAGE, SHELL_USAGE);
                }
                "exit" => {
                    break;
                }
                "source" => {
                    if strings.len() > 1 {
                        match std::fs::read_to_string(&strings[1]) {
                            Ok(whole_file) => {
                                let v = cmd_stack.len();
                                for (line_num, line) in whole_file.lines().enumerate() {
                                    cmd_stack.push((
                                        line.to_string(),
                                        Some((strings[1].clone(), line_num + 1)),
                                    ));
                                }
                                cmd_stack[v..].reverse();
                            }
                            Err(err) => {
                                println!("cannot open file: {:?}", err);
                            }
                        }
                    } else {
                        println!("need another arg");
                    }
                }
                "new" => {
                    let rules = strings.get(1).map_or("wwf", String::as_str);
                    let size = match strings.get(2).map(|s| s.parse::<usize>()) {
                        None => game_config::DEFAULT_BOARD_SIZE,
                        Some(Ok(size)) => size,
                        Some(Err(err)) => {
                            println!("bad size: {}", err);
                            continue;
                        }
                    };
                    match game_state::GameState::from_rules(rules, size, &dictionary) {
                        Ok(new_game_state) => {
                            game_state = new_game_state;
                            board_path = None;
                        }
                        Err(err) => println!("{}", err),
                    }
                }
                "open" => {
                    if strings.len() > 1 {
                        let path = std::path::PathBuf::from(&strings[1]);
                        match game_state::GameState::open_or_create(&path, &dictionary) {
                            Ok(opened) => {
                                game_state = opened;
                                board_path = Some(path);
                            }
                            Err(err) => println!("cannot open board: {}", err),
                        }
                    } else {
                        println!("need another arg");
                    }
                }
                "save" => {
                    if let Some(path) = strings.get(1) {
                        board_path = Some(path.into());
                    }
                    match &board_path {
                        Some(path) => match game_state.save(path) {
                            Ok(()) => println!("saved to {}", path.display()),
                            Err(err) => println!("cannot save: {}", err),
                        },
                        None => println!("need a board file"),
                    }
                }
                _ => {
                    if let Err(err) = commands::execute(&mut game_state, &strings) {
                        println!("{}", err);
                    }
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
