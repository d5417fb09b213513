// Test utilities that cannot be moved to the "tests" folder, because the console `replay`
// command uses them.

use crate::coord::Coord;
use crate::error::MoveRejection;
use crate::piece::PieceKind;
use crate::rules::{DEFAULT_PROMOTION, MoveRecord, MoveRequest, RulesEngine};
use crate::session::parse_square;


// Parses a move in coordinate notation: "e2e4", or "e7e8n" for an explicit promotion.
pub fn parse_coordinate_move(notation: &str) -> Result<MoveRequest, MoveRejection> {
    let malformed = || MoveRejection::MalformedSquare(notation.to_owned());
    if !notation.is_ascii() {
        return Err(malformed());
    }
    let (from, to, promotion) = match notation.len() {
        4 => (&notation[0..2], &notation[2..4], None),
        5 => (&notation[0..2], &notation[2..4], Some(&notation[4..5])),
        _ => return Err(malformed()),
    };
    let from: Coord = parse_square(from)?;
    let to: Coord = parse_square(to)?;
    let promotion = match promotion {
        Some(p) => PieceKind::from_algebraic(p).ok_or_else(malformed)?,
        None => DEFAULT_PROMOTION,
    };
    Ok(MoveRequest { from, to, promotion })
}

// Plays whitespace-separated coordinate moves, stopping at the first rejected one.
pub fn replay_moves(
    engine: &mut impl RulesEngine, log: &str,
) -> Result<Vec<MoveRecord>, MoveRejection> {
    log.split_whitespace()
        .map(|notation| engine.attempt_move(parse_coordinate_move(notation)?))
        .collect()
}
