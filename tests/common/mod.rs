// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use chessboard_ui::config::BoardConfig;
use chessboard_ui::coord::Coord;
use chessboard_ui::engine::ShakmatyEngine;
use chessboard_ui::session::{ClickOutcome, GameSession};
use chessboard_ui::test_util::parse_coordinate_move;
use chessboard_ui::view_state::CapturedPieces;


#[allow(dead_code)]
pub fn new_session() -> GameSession {
    GameSession::new(BoardConfig::default())
}

#[allow(dead_code)]
pub fn session_from_fen(fen: &str) -> GameSession {
    GameSession::with_engine(ShakmatyEngine::from_fen(fen).unwrap(), BoardConfig::default())
}

// Plays each coordinate move ("e2e4") as two clicks: origin, then destination.
#[allow(dead_code)]
pub fn click_moves(session: &mut GameSession, log: &str) {
    for notation in log.split_whitespace() {
        let request = parse_coordinate_move(notation).unwrap();
        assert_eq!(
            session.click_square(request.from),
            ClickOutcome::Selected(request.from),
            "cannot select {notation}"
        );
        assert!(
            matches!(session.click_square(request.to), ClickOutcome::MoveMade(_)),
            "cannot play {notation}"
        );
    }
}

// Plays each coordinate move ("e2e4") as a single drag & drop.
#[allow(dead_code)]
pub fn drag_moves(session: &mut GameSession, log: &str) {
    for notation in log.split_whitespace() {
        let request = parse_coordinate_move(notation).unwrap();
        session.drop_piece(request.from, Some(request.to)).unwrap();
    }
}

// Everything the engine-facing half of the UI shows. Used to check that rejected gestures
// leave no trace.
#[allow(dead_code)]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pub position: String,
    pub history: Vec<String>,
    pub captured: CapturedPieces,
}

#[allow(dead_code)]
pub fn snapshot(session: &GameSession) -> Snapshot {
    let view = session.view();
    Snapshot {
        position: view.position.clone(),
        history: view.history.clone(),
        captured: view.captured.clone(),
    }
}

#[macro_export]
macro_rules! squares {
    ($($coord:ident),* $(,)?) => {
        vec![$(chessboard_ui::coord::Coord::$coord),*]
    };
}

#[allow(dead_code)]
pub fn marked(session: &GameSession) -> Vec<Coord> {
    session.chalkboard().marked_squares().collect()
}
