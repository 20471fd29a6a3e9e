// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Why a placement was refused. Coordinates are 0-based.
#[derive(Clone, PartialEq, Eq)]
pub enum Rejection {
    GeometryOutOfBounds {
        row: isize,
        col: isize,
    },
    LetterConflict {
        row: usize,
        col: usize,
        existing: char,
        wanted: char,
    },
    NotConnected,
    InvalidCrossWord(String),
    NoTilesPlaced,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::GeometryOutOfBounds { row, col } => {
                write!(
                    f,
                    "({},{}) is off the board",
                    row.saturating_add(1),
                    col.saturating_add(1)
                )
            }
            Rejection::LetterConflict {
                row,
                col,
                existing,
                wanted,
            } => write!(
                f,
                "couldn't play {} on ({},{}), contains {}",
                wanted,
                row + 1,
                col + 1,
                existing
            ),
            Rejection::NotConnected => write!(f, "word doesn't touch an existing letter"),
            Rejection::InvalidCrossWord(word) => write!(f, "'{}' is not a valid word", word),
            Rejection::NoTilesPlaced => write!(f, "no tiles were placed"),
        }
    }
}

impl std::fmt::Debug for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for Rejection {}
