use anyhow::{Context, bail};

use chessboard_ui::config::BoardConfig;
use chessboard_ui::pgn::export_pgn;
use chessboard_ui::rules::DEFAULT_PROMOTION;
use chessboard_ui::session::GameSession;
use chessboard_ui::test_util::parse_coordinate_move;

use crate::tui;


pub struct ReplayConfig {
    pub moves: Vec<String>,
}

fn replay(moves: &[String]) -> anyhow::Result<GameSession> {
    let mut session = GameSession::new(BoardConfig::default());
    for (index, notation) in moves.iter().enumerate() {
        let request = parse_coordinate_move(notation)?;
        if request.promotion != DEFAULT_PROMOTION {
            bail!("Move {} ({notation}): only queen promotion is supported", index + 1);
        }
        session
            .drop_piece(request.from, Some(request.to))
            .with_context(|| format!("Move {} ({notation})", index + 1))?;
    }
    Ok(session)
}

pub fn run(config: ReplayConfig) -> anyhow::Result<()> {
    let session = replay(&config.moves)?;
    println!("{}", tui::render_game(&session));
    print!("{}", export_pgn(session.view()));
    Ok(())
}
