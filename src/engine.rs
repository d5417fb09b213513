// `RulesEngine` backed by shakmaty. This is the only module that talks to shakmaty directly
// (apart from square/piece conversions).

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position};

use crate::coord::Coord;
use crate::error::{EngineSetupError, MoveRejection};
use crate::force::Force;
use crate::piece::{Piece, PieceKind};
use crate::rules::{GameStart, MoveRecord, MoveRequest, RulesEngine};


// Halfmove clock value at which the fifty-move rule makes the game drawn.
const FIFTY_MOVE_RULE_HALFMOVES: u32 = 100;

#[derive(Clone, Debug)]
pub struct ShakmatyEngine {
    position: Chess,
    start: GameStart,
    history: Vec<MoveRecord>,
    // Hashes of every position reached in the game, including the starting and the current one.
    position_hashes: Vec<u64>,
}

impl ShakmatyEngine {
    pub fn new() -> Self { Self::with_position(Chess::default()) }

    // Starts from an arbitrary position. Note that `reset` still goes to the standard
    // starting position.
    pub fn from_fen(fen: &str) -> Result<Self, EngineSetupError> {
        let parsed: Fen = fen.parse().map_err(|_| EngineSetupError::InvalidFen(fen.to_owned()))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|err| EngineSetupError::InvalidPosition(err.to_string()))?;
        Ok(Self::with_position(position))
    }

    fn with_position(position: Chess) -> Self {
        let start = GameStart {
            position: Fen::from_position(&position, EnPassantMode::Legal).to_string(),
            side_to_move: Force::from_shakmaty(position.turn()),
            move_number: position.fullmoves().get(),
        };
        let mut engine = ShakmatyEngine {
            position,
            start,
            history: Vec::new(),
            position_hashes: Vec::new(),
        };
        engine.position_hashes.push(engine.current_hash());
        engine
    }

    fn current_hash(&self) -> u64 {
        self.position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
    }

    fn is_fifty_move_draw(&self) -> bool {
        self.position.halfmoves() >= FIFTY_MOVE_RULE_HALFMOVES && !self.position.is_checkmate()
    }

    fn find_legal_move(&self, request: MoveRequest) -> Option<Move> {
        let from = request.from.to_square();
        let to = request.to.to_square();
        let promotion = request.promotion.to_role();
        self.position.legal_moves().into_iter().find(|&m| {
            m.from() == Some(from)
                && ui_destination(&self.position, m) == to
                && m.promotion().is_none_or(|role| role == promotion)
        })
    }
}

impl Default for ShakmatyEngine {
    fn default() -> Self { Self::new() }
}

impl RulesEngine for ShakmatyEngine {
    fn position_notation(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    fn legal_moves(&self, from: Option<Coord>) -> Vec<MoveRecord> {
        self.position
            .legal_moves()
            .into_iter()
            .filter_map(|m| describe_move(&self.position, m))
            .filter(|record| from.is_none_or(|from| record.from == from))
            .collect()
    }

    fn attempt_move(&mut self, request: MoveRequest) -> Result<MoveRecord, MoveRejection> {
        let illegal = || MoveRejection::Illegal { from: request.from, to: request.to };
        let m = self.find_legal_move(request).ok_or_else(illegal)?;
        let mut record = describe_move(&self.position, m).ok_or_else(illegal)?;
        let san = San::from_move(&self.position, m);
        self.position.play_unchecked(m);
        let suffix = if self.position.is_checkmate() {
            "#"
        } else if self.position.is_check() {
            "+"
        } else {
            ""
        };
        record.san = format!("{san}{suffix}");
        self.position_hashes.push(self.current_hash());
        self.history.push(record.clone());
        Ok(record)
    }

    fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.position.board().piece_at(coord.to_square()).map(Piece::from_shakmaty)
    }

    fn side_to_move(&self) -> Force { Force::from_shakmaty(self.position.turn()) }

    fn is_check(&self) -> bool { self.position.is_check() }
    fn is_checkmate(&self) -> bool { self.position.is_checkmate() }
    fn is_stalemate(&self) -> bool { self.position.is_stalemate() }
    fn is_insufficient_material(&self) -> bool { self.position.is_insufficient_material() }

    fn is_threefold_repetition(&self) -> bool {
        let current = self.current_hash();
        self.position_hashes.iter().filter(|&&hash| hash == current).count() >= 3
    }

    fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
            || self.is_fifty_move_draw()
    }

    fn game_start(&self) -> &GameStart { &self.start }
    fn history(&self) -> &[MoveRecord] { &self.history }

    fn reset(&mut self) { *self = Self::new(); }
}

// Where the user puts the piece to make this move. Castling is entered by moving the king two
// squares, while shakmaty encodes it as "king takes own rook".
fn ui_destination(position: &Chess, m: Move) -> shakmaty::Square {
    match m.castling_side() {
        Some(side) => side.king_to(position.turn()),
        None => m.to(),
    }
}

fn describe_move(position: &Chess, m: Move) -> Option<MoveRecord> {
    // Drops don't exist in standard chess.
    let from = m.from()?;
    Some(MoveRecord {
        from: Coord::from_square(from),
        to: Coord::from_square(ui_destination(position, m)),
        piece: PieceKind::from_role(m.role()),
        force: Force::from_shakmaty(position.turn()),
        captured: m.capture().map(PieceKind::from_role),
        promotion: m.promotion().map(PieceKind::from_role),
        san: String::new(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::STARTING_FEN;

    fn play(engine: &mut ShakmatyEngine, moves: &[(Coord, Coord)]) {
        for &(from, to) in moves {
            engine.attempt_move(MoveRequest::new(from, to)).unwrap();
        }
    }

    #[test]
    fn starting_position() {
        let engine = ShakmatyEngine::new();
        assert_eq!(engine.position_notation(), STARTING_FEN);
        assert_eq!(engine.legal_moves(None).len(), 20);
        assert_eq!(engine.legal_moves(Some(Coord::G1)).len(), 2);
        assert_eq!(engine.legal_moves(Some(Coord::E7)).len(), 0);
        assert_eq!(engine.side_to_move(), Force::White);
        assert_eq!(engine.piece_at(Coord::D8), Some(Piece::new(PieceKind::Queen, Force::Black)));
        assert_eq!(engine.piece_at(Coord::D4), None);
    }

    #[test]
    fn san_suffixes() {
        let mut engine = ShakmatyEngine::new();
        play(&mut engine, &[(Coord::E2, Coord::E4), (Coord::F7, Coord::F5)]);
        let check = engine.attempt_move(MoveRequest::new(Coord::D1, Coord::H5)).unwrap();
        assert_eq!(check.san, "Qh5+");
        assert!(engine.is_check());
    }

    #[test]
    fn castling_by_king_destination() {
        let mut engine =
            ShakmatyEngine::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let king_moves = engine.legal_moves(Some(Coord::E1));
        assert!(king_moves.iter().any(|m| m.to == Coord::G1));
        assert!(king_moves.iter().any(|m| m.to == Coord::C1));
        let record = engine.attempt_move(MoveRequest::new(Coord::E1, Coord::G1)).unwrap();
        assert_eq!(record.san, "O-O");
        assert_eq!(engine.piece_at(Coord::F1), Some(Piece::new(PieceKind::Rook, Force::White)));
        assert_eq!(engine.piece_at(Coord::G1), Some(Piece::new(PieceKind::King, Force::White)));
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut engine = ShakmatyEngine::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        // One record per promotion piece.
        assert_eq!(engine.legal_moves(Some(Coord::A7)).len(), 4);
        let record = engine.attempt_move(MoveRequest::new(Coord::A7, Coord::A8)).unwrap();
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(record.san, "a8=Q");
        assert_eq!(engine.piece_at(Coord::A8), Some(Piece::new(PieceKind::Queen, Force::White)));
    }

    #[test]
    fn en_passant_reports_captured_pawn() {
        let mut engine = ShakmatyEngine::new();
        play(&mut engine, &[
            (Coord::E2, Coord::E4),
            (Coord::A7, Coord::A6),
            (Coord::E4, Coord::E5),
            (Coord::D7, Coord::D5),
        ]);
        let record = engine.attempt_move(MoveRequest::new(Coord::E5, Coord::D6)).unwrap();
        assert_eq!(record.captured, Some(PieceKind::Pawn));
        assert_eq!(engine.piece_at(Coord::D5), None);
    }

    #[test]
    fn illegal_move_keeps_state() {
        let mut engine = ShakmatyEngine::new();
        let before = engine.position_notation();
        assert_eq!(
            engine.attempt_move(MoveRequest::new(Coord::E1, Coord::E3)),
            Err(MoveRejection::Illegal { from: Coord::E1, to: Coord::E3 })
        );
        assert_eq!(engine.position_notation(), before);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn threefold_repetition() {
        let mut engine = ShakmatyEngine::new();
        let shuffle = [
            (Coord::G1, Coord::F3),
            (Coord::G8, Coord::F6),
            (Coord::F3, Coord::G1),
            (Coord::F6, Coord::G8),
        ];
        play(&mut engine, &shuffle);
        play(&mut engine, &shuffle[..3]);
        assert!(!engine.is_threefold_repetition());
        play(&mut engine, &shuffle[3..]);
        assert!(engine.is_threefold_repetition());
        assert!(engine.is_draw());
        assert!(!engine.is_stalemate());
    }

    #[test]
    fn fifty_move_rule() {
        let engine = ShakmatyEngine::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
        assert!(engine.is_draw());
        assert!(!engine.is_stalemate());
        assert!(!engine.is_insufficient_material());
        assert!(!engine.is_threefold_repetition());
    }

    #[test]
    fn bad_fen() {
        assert!(matches!(
            ShakmatyEngine::from_fen("not a fen"),
            Err(EngineSetupError::InvalidFen(_))
        ));
        assert!(matches!(
            ShakmatyEngine::from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(EngineSetupError::InvalidPosition(_))
        ));
    }

    #[test]
    fn reset_goes_to_standard_start() {
        let mut engine = ShakmatyEngine::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        engine.attempt_move(MoveRequest::new(Coord::A1, Coord::A8)).unwrap();
        engine.reset();
        assert_eq!(engine.position_notation(), STARTING_FEN);
        assert!(engine.history().is_empty());
        assert!(engine.game_start().is_standard());
    }

    #[test]
    fn game_start_from_fen() {
        let fen = "4k3/8/8/8/8/8/8/R3K3 b - - 3 12";
        let mut engine = ShakmatyEngine::from_fen(fen).unwrap();
        engine.attempt_move(MoveRequest::new(Coord::E8, Coord::E7)).unwrap();
        assert_eq!(engine.game_start(), &GameStart {
            position: fen.to_owned(),
            side_to_move: Force::Black,
            move_number: 12,
        });
        assert!(!engine.game_start().is_standard());
        assert!(ShakmatyEngine::new().game_start().is_standard());
    }
}
