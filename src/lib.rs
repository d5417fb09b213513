#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod chalk;
pub mod config;
pub mod coord;
pub mod display;
pub mod engine;
pub mod error;
pub mod force;
pub mod pgn;
pub mod piece;
pub mod rules;
pub mod selection;
pub mod session;
pub mod test_util;
pub mod view_state;

