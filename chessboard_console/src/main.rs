// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate clap;
extern crate console;
extern crate crossterm;
extern crate itertools;
extern crate scopeguard;

extern crate chessboard_ui;

pub mod tui;

mod board_config;
mod play_main;
mod replay_main;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Chessboard")
        .version(clap::crate_version!())
        .about("Two players, one board: chess in the terminal")
        .subcommand_required(true)
        .subcommand(
            Command::new("play")
                .about("Play a game on this terminal")
                .arg(
                    arg!(--"config" <config_file> "Path to a yaml-serialized BoardConfig.")
                        .required(false),
                )
                .arg(
                    arg!(--"fen" <fen> "Starting position. Defaults to the standard one.")
                        .required(false),
                ),
        )
        .subcommand(
            Command::new("replay")
                .about("Plays the given moves and prints the final board and PGN.")
                .arg(arg!(<moves> ... "Moves in coordinate notation, e.g. e2e4")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("play", sub_matches)) => play_main::run(play_main::PlayConfig {
            config_file: sub_matches.get_one::<String>("config").cloned(),
            fen: sub_matches.get_one::<String>("fen").cloned(),
        }),
        Some(("replay", sub_matches)) => replay_main::run(replay_main::ReplayConfig {
            moves: sub_matches.get_many::<String>("moves").into_iter().flatten().cloned().collect(),
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
