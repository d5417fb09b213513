mod common;

use chessboard_ui::coord::Coord;
use chessboard_ui::force::Force;
use chessboard_ui::piece::PieceKind;
use chessboard_ui::rules::{RulesEngine, STARTING_FEN};
use chessboard_ui::session::{ClickOutcome, GameSession};
use chessboard_ui::view_state::{
    CapturedPiece, CapturedPieces, GameStatus, StatusMessage, ViewState,
};
use chessboard_ui::{pgn, test_util};
use common::*;
use pretty_assertions::assert_eq;


#[test]
fn starting_view() {
    let session = new_session();
    let view = session.view();
    assert_eq!(view.position, STARTING_FEN);
    assert!(view.history.is_empty());
    assert!(view.captured.is_empty());
    assert_eq!(view.status, GameStatus::default());
    assert_eq!(view.side_to_move, Force::White);
    assert_eq!(session.status_message().to_string(), "White to move.");
}

#[test]
fn fools_mate() {
    let mut session = new_session();
    click_moves(&mut session, "f2f3 e7e5 g2g4 d8h4");
    let view = session.view();
    assert_eq!(view.history, vec!["f3", "e5", "g4", "Qh4#"]);
    assert!(view.status.in_checkmate);
    assert!(view.status.in_check);
    assert!(!view.status.in_draw);
    assert_eq!(session.status_message(), StatusMessage::Checkmate { winner: Force::Black });
    assert_eq!(session.status_message().to_string(), "Checkmate! Black wins.");
}

#[test]
fn no_selection_after_game_over() {
    let mut session = new_session();
    drag_moves(&mut session, "f2f3 e7e5 g2g4 d8h4");
    assert_eq!(session.click_square(Coord::E1), ClickOutcome::Noop);
    assert_eq!(session.click_square(Coord::A2), ClickOutcome::Noop);
    assert!(session.drop_piece(Coord::A2, Some(Coord::A3)).is_err());
}

#[test]
fn check_is_reported() {
    let mut session = new_session();
    click_moves(&mut session, "e2e4 f7f5 d1h5");
    let view = session.view();
    assert_eq!(view.history.last().map(String::as_str), Some("Qh5+"));
    assert!(view.status.in_check);
    assert!(!view.status.in_checkmate);
    assert!(!view.status.in_draw);
    assert_eq!(session.status_message().to_string(), "Black is in check.");
}

#[test]
fn stalemate() {
    let mut session = session_from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1");
    session.drop_piece(Coord::F1, Some(Coord::F7)).unwrap();
    let status = session.view().status;
    assert!(status.in_stalemate);
    assert!(status.in_draw);
    assert!(!status.in_check);
    assert!(!status.in_checkmate);
    assert_eq!(session.status_message().to_string(), "Draw by stalemate.");
}

#[test]
fn insufficient_material() {
    let mut session = session_from_fen("8/8/8/4k3/8/8/3Kp3/8 w - - 0 1");
    click_moves(&mut session, "d2e2");
    let view = session.view();
    assert!(view.status.in_insufficient_material);
    assert!(view.status.in_draw);
    assert_eq!(
        view.captured.lost_by(Force::Black).to_vec(),
        vec![CapturedPiece { kind: PieceKind::Pawn, force: Force::Black }]
    );
    assert_eq!(session.status_message().to_string(), "Draw by insufficient material.");
}

#[test]
fn threefold_repetition() {
    let mut session = new_session();
    click_moves(&mut session, "g1f3 g8f6 f3g1 f6g8 g1f3 g8f6 f3g1");
    assert!(!session.view().status.in_threefold_repetition);
    click_moves(&mut session, "f6g8");
    let status = session.view().status;
    assert!(status.in_threefold_repetition);
    assert!(status.in_draw);
    assert_eq!(session.status_message().to_string(), "Draw by threefold repetition.");
}

// The tally kept move by move must always agree with the one rebuilt from the full history.
#[test]
fn captured_tally_matches_history() {
    let mut session = new_session();
    let mut tally = CapturedPieces::new();
    for notation in "e2e4 d7d5 e4d5 d8d5 b1c3 d5a2 a1a2".split_whitespace() {
        let request = test_util::parse_coordinate_move(notation).unwrap();
        let record = session.drop_piece(request.from, Some(request.to)).unwrap();
        tally.record(&record);
        assert_eq!(session.view().captured, tally);
        assert_eq!(CapturedPieces::from_history(session.engine().history()), tally);
    }
    let captured = &session.view().captured;
    let kinds = |pieces: &[CapturedPiece]| pieces.iter().map(|p| p.kind).collect::<Vec<_>>();
    assert_eq!(kinds(captured.lost_by(Force::White)), vec![PieceKind::Pawn, PieceKind::Pawn]);
    assert_eq!(kinds(captured.lost_by(Force::Black)), vec![PieceKind::Pawn, PieceKind::Queen]);
    assert_eq!(captured.captured_by(Force::White), captured.lost_by(Force::Black));
    assert_eq!(captured.material_advantage(), 8);
}

#[test]
fn reset_restores_start() {
    let mut session = new_session();
    click_moves(&mut session, "e2e4 d7d5 e4d5");
    session.click_square(Coord::D8);
    session.right_click_square(Coord::A1);
    session.reset();
    let view = session.view();
    assert_eq!(view.position, STARTING_FEN);
    assert!(view.history.is_empty());
    assert!(view.captured.is_empty());
    assert_eq!(view.status, GameStatus::default());
    assert!(session.selection().is_idle());
    assert!(session.chalkboard().is_empty());
    assert!(session.square_highlights().is_empty());
}

#[test]
fn reset_after_custom_start() {
    let mut session = session_from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1");
    session.reset();
    assert_eq!(session.view().position, STARTING_FEN);
    assert_eq!(session.status_message().to_string(), "White to move.");
}

#[test]
fn view_matches_engine_after_each_gesture() {
    let mut session = new_session();
    let gestures: [fn(&mut GameSession); 5] = [
        |s| {
            s.click_square(Coord::E2);
        },
        |s| {
            s.click_square(Coord::E4);
        },
        |s| {
            let _ = s.drop_piece(Coord::E7, Some(Coord::E4));
        },
        |s| {
            let _ = s.drop_piece(Coord::C7, Some(Coord::C5));
        },
        |s| s.reset(),
    ];
    for gesture in gestures {
        gesture(&mut session);
        assert_eq!(session.view(), &ViewState::sync(session.engine()));
    }
}

#[test]
fn pgn_export() {
    let mut session = new_session();
    click_moves(&mut session, "e2e4 e7e5 g1f3");
    let pgn = pgn::export_pgn(session.view());
    assert!(pgn.contains("[Result \"*\"]"));
    assert!(pgn.ends_with("1. e4 e5 2. Nf3 *\n"));
}

#[test]
fn pgn_export_when_black_starts() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    let mut session = session_from_fen(fen);
    assert_eq!(session.view().side_to_move, Force::Black);
    drag_moves(&mut session, "e7e5 g1f3");
    assert_eq!(session.view().history, vec!["e5", "Nf3"]);
    let pgn = pgn::export_pgn(session.view());
    assert!(pgn.contains("[SetUp \"1\"]\n"));
    assert!(pgn.contains(&format!("[FEN \"{fen}\"]\n")));
    assert!(pgn.ends_with("1... e5 2. Nf3 *\n"));
}
