// Hot-seat game in the terminal. Gestures are typed in as commands, one per line.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use crossterm::{cursor, execute, terminal};
use log::debug;
use scopeguard::defer;

use chessboard_ui::config::BoardConfig;
use chessboard_ui::coord::Coord;
use chessboard_ui::engine::ShakmatyEngine;
use chessboard_ui::pgn::export_pgn;
use chessboard_ui::session::{ClickOutcome, GameSession, parse_square};

use crate::board_config::read_board_config;
use crate::tui;


const HELP: &str =
    "Commands: click <square>, drop <from> [<to>], mark <square>, flip, new, pgn, quit";

pub struct PlayConfig {
    pub config_file: Option<String>,
    pub fen: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PlayCommand {
    Click(Coord),
    // No target square means the piece was dropped off the board.
    Drop(Coord, Option<Coord>),
    Mark(Coord),
    Flip,
    New,
    Pgn,
    Quit,
}

fn square(name: &str) -> Result<Coord, String> { parse_square(name).map_err(|err| err.to_string()) }

fn parse_command(line: &str) -> Result<PlayCommand, String> {
    let words: Vec<_> = line.split_whitespace().collect();
    match words.as_slice() {
        ["click" | "c", name] => Ok(PlayCommand::Click(square(name)?)),
        ["drop" | "d", from] => Ok(PlayCommand::Drop(square(from)?, None)),
        ["drop" | "d", from, to] => Ok(PlayCommand::Drop(square(from)?, Some(square(to)?))),
        ["mark" | "m", name] => Ok(PlayCommand::Mark(square(name)?)),
        ["flip"] => Ok(PlayCommand::Flip),
        ["new"] => Ok(PlayCommand::New),
        ["pgn"] => Ok(PlayCommand::Pgn),
        ["quit" | "q"] => Ok(PlayCommand::Quit),
        _ => Err(HELP.to_owned()),
    }
}

// Returns text to show under the board.
fn execute_command(session: &mut GameSession, command: PlayCommand) -> String {
    match command {
        PlayCommand::Click(coord) => {
            if let ClickOutcome::MoveMade(record) = session.click_square(coord) {
                debug!("Move by click: {}", record.san);
            }
            String::new()
        }
        PlayCommand::Drop(from, to) => {
            if let Err(err) = session.drop_piece(from, to) {
                debug!("Drop rejected: {err}");
            }
            String::new()
        }
        PlayCommand::Mark(coord) => {
            session.right_click_square(coord);
            String::new()
        }
        PlayCommand::Flip => {
            let config = session.config_mut();
            config.orientation = config.orientation.flipped();
            String::new()
        }
        PlayCommand::New => {
            session.reset();
            String::new()
        }
        PlayCommand::Pgn => export_pgn(session.view()),
        PlayCommand::Quit => String::new(),
    }
}

pub fn run(config: PlayConfig) -> anyhow::Result<()> {
    let board_config = match &config.config_file {
        Some(filename) => read_board_config(filename)?,
        None => BoardConfig::default(),
    };
    let engine = match &config.fen {
        Some(fen) => ShakmatyEngine::from_fen(fen).context("Invalid starting position")?,
        None => ShakmatyEngine::new(),
    };
    let mut session = GameSession::with_engine(engine, board_config);

    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    defer! {
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen);
    };

    let mut feedback = HELP.to_owned();
    let mut lines = io::stdin().lock().lines();
    loop {
        execute!(stdout, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
        write!(stdout, "{}\n{}\n> ", tui::render_game(&session), feedback)?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        feedback = match parse_command(&line?) {
            Ok(PlayCommand::Quit) => break,
            Ok(command) => execute_command(&mut session, command),
            Err(help) => help,
        };
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("click e2"), Ok(PlayCommand::Click(Coord::E2)));
        assert_eq!(parse_command("  d g1 f3 "), Ok(PlayCommand::Drop(Coord::G1, Some(Coord::F3))));
        assert_eq!(parse_command("drop g1"), Ok(PlayCommand::Drop(Coord::G1, None)));
        assert_eq!(parse_command("m h8"), Ok(PlayCommand::Mark(Coord::H8)));
        assert_eq!(parse_command("quit"), Ok(PlayCommand::Quit));
        assert_eq!(parse_command(""), Err(HELP.to_owned()));
        assert_eq!(parse_command("click e9"), Err("malformed square name \"e9\"".to_owned()));
    }

    #[test]
    fn commands_drive_the_session() {
        let mut session = GameSession::new(BoardConfig::default());
        for line in ["click e2", "click e4", "drop e7 e5", "mark d4", "flip"] {
            let command = parse_command(line).unwrap();
            assert_eq!(execute_command(&mut session, command), "");
        }
        assert_eq!(session.view().history, vec!["e4", "e5"]);
        assert!(session.chalkboard().is_marked(Coord::D4));
        assert!(execute_command(&mut session, PlayCommand::Pgn).ends_with("1. e4 e5 *\n"));
        execute_command(&mut session, PlayCommand::New);
        assert!(session.view().history.is_empty());
    }
}
