// Read-only projection of the rules engine into what the UI shows next to the board.
//
// Everything here is recomputed from scratch after each accepted move. A game is at most a few
// hundred moves long, so there is nothing to gain from incremental bookkeeping.

use std::fmt;

use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::force::Force;
use crate::piece::PieceKind;
use crate::rules::{GameStart, MoveRecord, RulesEngine};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CapturedPiece {
    pub kind: PieceKind,
    pub force: Force,
}

// Captured pieces grouped by the force they belonged to, in capture order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CapturedPieces {
    lost: EnumMap<Force, Vec<CapturedPiece>>,
}

impl CapturedPieces {
    pub fn new() -> Self { CapturedPieces { lost: enum_map! { _ => vec![] } } }

    pub fn from_history(history: &[MoveRecord]) -> Self {
        let mut captured = Self::new();
        for record in history {
            captured.record(record);
        }
        captured
    }

    pub fn record(&mut self, record: &MoveRecord) {
        if let Some(kind) = record.captured {
            let force = record.force.opponent();
            self.lost[force].push(CapturedPiece { kind, force });
        }
    }

    // Pieces of `force` that were taken by the opponent.
    pub fn lost_by(&self, force: Force) -> &[CapturedPiece] { &self.lost[force] }
    // Opponent pieces that `force` has taken.
    pub fn captured_by(&self, force: Force) -> &[CapturedPiece] { &self.lost[force.opponent()] }

    // Material balance from white's point of view, in pawns.
    pub fn material_advantage(&self) -> i32 {
        let total = |force: Force| -> i32 {
            self.lost[force].iter().map(|piece| i32::from(piece.kind.value())).sum()
        };
        total(Force::Black) - total(Force::White)
    }

    // Lost pieces of `force` grouped by kind, pawns first. Kinds with no losses are skipped.
    pub fn lost_counts(&self, force: Force) -> Vec<(PieceKind, usize)> {
        PieceKind::iter()
            .map(|kind| (kind, self.lost[force].iter().filter(|p| p.kind == kind).count()))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    pub fn is_empty(&self) -> bool { self.lost.values().all(|pieces| pieces.is_empty()) }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct GameStatus {
    pub in_check: bool,
    pub in_checkmate: bool,
    pub in_draw: bool,
    pub in_stalemate: bool,
    pub in_threefold_repetition: bool,
    pub in_insufficient_material: bool,
}

impl GameStatus {
    pub fn from_engine(engine: &impl RulesEngine) -> Self {
        GameStatus {
            in_check: engine.is_check(),
            in_checkmate: engine.is_checkmate(),
            in_draw: engine.is_draw(),
            in_stalemate: engine.is_stalemate(),
            in_threefold_repetition: engine.is_threefold_repetition(),
            in_insufficient_material: engine.is_insufficient_material(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawReason {
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    Other, // e.g. fifty-move rule
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusMessage {
    Checkmate { winner: Force },
    Draw(DrawReason),
    Check { side: Force },
    ToMove { side: Force },
}

impl StatusMessage {
    // Several flags can be set at once (e.g. stalemate always comes with draw), so the most
    // specific one wins.
    pub fn new(status: &GameStatus, side_to_move: Force) -> Self {
        if status.in_checkmate {
            StatusMessage::Checkmate { winner: side_to_move.opponent() }
        } else if status.in_draw {
            let reason = if status.in_stalemate {
                DrawReason::Stalemate
            } else if status.in_threefold_repetition {
                DrawReason::ThreefoldRepetition
            } else if status.in_insufficient_material {
                DrawReason::InsufficientMaterial
            } else {
                DrawReason::Other
            };
            StatusMessage::Draw(reason)
        } else if status.in_check {
            StatusMessage::Check { side: side_to_move }
        } else {
            StatusMessage::ToMove { side: side_to_move }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Checkmate { winner } => write!(f, "Checkmate! {} wins.", winner.name()),
            StatusMessage::Draw(DrawReason::Stalemate) => write!(f, "Draw by stalemate."),
            StatusMessage::Draw(DrawReason::ThreefoldRepetition) => {
                write!(f, "Draw by threefold repetition.")
            }
            StatusMessage::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "Draw by insufficient material.")
            }
            StatusMessage::Draw(DrawReason::Other) => write!(f, "Draw."),
            StatusMessage::Check { side } => write!(f, "{} is in check.", side.name()),
            StatusMessage::ToMove { side } => write!(f, "{} to move.", side.name()),
        }
    }
}

// One row of the move list. `white` is empty only in the first row of a game that started
// with black to move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MovePair {
    pub number: u32,
    pub white: Option<String>,
    pub black: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ViewState {
    pub start: GameStart,
    pub position: String,
    pub history: Vec<String>,
    pub captured: CapturedPieces,
    pub status: GameStatus,
    pub side_to_move: Force,
}

impl ViewState {
    pub fn sync(engine: &impl RulesEngine) -> Self {
        let history = engine.history();
        ViewState {
            start: engine.game_start().clone(),
            position: engine.position_notation(),
            history: history.iter().map(|record| record.san.clone()).collect(),
            captured: CapturedPieces::from_history(history),
            status: GameStatus::from_engine(engine),
            side_to_move: engine.side_to_move(),
        }
    }

    pub fn status_message(&self) -> StatusMessage {
        StatusMessage::new(&self.status, self.side_to_move)
    }

    // Rows for a two-column move list, numbered from the starting position.
    pub fn move_pairs(&self) -> Vec<MovePair> {
        let mut number = self.start.move_number;
        let mut moves = self.history.as_slice();
        let mut pairs = Vec::new();
        if self.start.side_to_move == Force::Black {
            if let Some((black, rest)) = moves.split_first() {
                pairs.push(MovePair { number, white: None, black: Some(black.clone()) });
                number += 1;
                moves = rest;
            }
        }
        pairs.extend(moves.chunks(2).zip(number..).map(|(chunk, number)| MovePair {
            number,
            white: Some(chunk[0].clone()),
            black: chunk.get(1).cloned(),
        }));
        pairs
    }
}
