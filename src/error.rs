use std::fmt;

use crate::coord::Coord;


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

// The only thing that can go wrong with a user gesture. Front-ends typically collapse this
// to "the gesture had no effect", but the session keeps the reason for logging and tests.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MoveRejection {
    // Piece was dropped outside the board.
    NoDestination,
    // Front-end passed a square name that could not be parsed.
    MalformedSquare(String),
    // Not a legal move in the current position (includes moving after the game ended).
    Illegal { from: Coord, to: Coord },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::NoDestination => write!(f, "piece dropped outside the board"),
            MoveRejection::MalformedSquare(name) => write!(f, "malformed square name \"{name}\""),
            MoveRejection::Illegal { from, to } => write!(f, "illegal move {from}-{to}"),
        }
    }
}

impl std::error::Error for MoveRejection {}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EngineSetupError {
    InvalidFen(String),
    InvalidPosition(String),
}

impl fmt::Display for EngineSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSetupError::InvalidFen(fen) => write!(f, "cannot parse FEN \"{fen}\""),
            EngineSetupError::InvalidPosition(reason) => write!(f, "illegal position: {reason}"),
        }
    }
}

impl std::error::Error for EngineSetupError {}
