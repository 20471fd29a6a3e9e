// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod candidate;
pub mod commands;
pub mod dictionary;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod game_state;
pub mod grid;
pub mod matrix;
pub mod movegen;
pub mod placement;
pub mod play_scorer;
pub mod settings;
