// Contract between the board UI and the chess rules engine. The UI never inspects the
// position itself: everything it knows about the game comes through this trait.

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::MoveRejection;
use crate::force::Force;
use crate::piece::{Piece, PieceKind};


pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// There is no promotion picker in the UI: pawns reaching the last rank always become queens.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRequest {
    pub from: Coord,
    pub to: Coord,
    // Ignored unless the move is a promotion.
    pub promotion: PieceKind,
}

impl MoveRequest {
    pub fn new(from: Coord, to: Coord) -> Self {
        MoveRequest { from, to, promotion: DEFAULT_PROMOTION }
    }
}

// Verbose move record. For castling `to` is the king destination (e.g. g1), not the rook.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(with = "coord_name")]
    pub from: Coord,
    #[serde(with = "coord_name")]
    pub to: Coord,
    pub piece: PieceKind,
    pub force: Force,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub san: String,
}

// Where the game began. Differs from the standard start for games set up from a FEN.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameStart {
    pub position: String,
    pub side_to_move: Force,
    pub move_number: u32,
}

impl GameStart {
    pub fn is_standard(&self) -> bool { self.position == STARTING_FEN }
}

pub trait RulesEngine {
    // FEN of the current position.
    fn position_notation(&self) -> String;
    // Legal moves of the side to move, optionally limited to pieces standing on `from`.
    // Records returned here have an empty `san`.
    fn legal_moves(&self, from: Option<Coord>) -> Vec<MoveRecord>;
    fn attempt_move(&mut self, request: MoveRequest) -> Result<MoveRecord, MoveRejection>;
    fn piece_at(&self, coord: Coord) -> Option<Piece>;
    fn side_to_move(&self) -> Force;

    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_draw(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_threefold_repetition(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    fn game_start(&self) -> &GameStart;
    // All moves since the start of the game, oldest first.
    fn history(&self) -> &[MoveRecord];
    fn reset(&mut self);

    fn is_game_over(&self) -> bool { self.is_checkmate() || self.is_draw() }
}

mod coord_name {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::coord::Coord;

    pub fn serialize<S: Serializer>(coord: &Coord, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&coord.to_algebraic())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coord, D::Error> {
        let name = String::deserialize(deserializer)?;
        Coord::from_algebraic(&name)
            .ok_or_else(|| D::Error::custom(format!("invalid square \"{name}\"")))
    }
}
