use serde::Serialize;
use wasm_bindgen::prelude::*;

use chessboard_ui::config::BoardConfig;
use chessboard_ui::display::Viewport;
use chessboard_ui::pgn::export_pgn;
use chessboard_ui::rules::RulesEngine;
use chessboard_ui::session::{ClickOutcome, GameSession, parse_square};

use crate::rust_error;
use crate::web_error_handling::JsResult;


#[wasm_bindgen]
pub struct WebSession {
    session: GameSession,
}

#[wasm_bindgen]
impl WebSession {
    // Empty `config_json` means default config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> JsResult<WebSession> {
        let config = if config_json.trim().is_empty() {
            BoardConfig::default()
        } else {
            BoardConfig::from_json(config_json)
                .map_err(|err| rust_error!("Invalid board config: {err}"))?
        };
        Ok(WebSession { session: GameSession::new(config) })
    }

    // Returns whether a move was made.
    pub fn click_square(&mut self, square: &str) -> bool {
        let Ok(coord) = parse_square(square) else {
            return false;
        };
        matches!(self.session.click_square(coord), ClickOutcome::MoveMade(_))
    }

    // `target` is `None` when the piece was dropped outside the board. Returns whether a move
    // was made; if not, the board component should snap the piece back.
    pub fn drop_piece(&mut self, source: &str, target: Option<String>) -> bool {
        let Ok(from) = parse_square(source) else {
            return false;
        };
        let to = match target.as_deref().map(parse_square) {
            None => None,
            Some(Ok(to)) => Some(to),
            Some(Err(_)) => return false,
        };
        self.session.drop_piece(from, to).is_ok()
    }

    // Returns whether the square is marked now.
    pub fn right_click_square(&mut self, square: &str) -> bool {
        match parse_square(square) {
            Ok(coord) => self.session.right_click_square(coord),
            Err(_) => false,
        }
    }

    pub fn reset(&mut self) { self.session.reset(); }

    pub fn flip_board(&mut self) {
        let config = self.session.config_mut();
        config.orientation = config.orientation.flipped();
    }

    pub fn board_props_json(&self, viewport_width: f64, viewport_height: f64) -> JsResult<String> {
        let props =
            self.session.board_props(Viewport { width: viewport_width, height: viewport_height });
        to_json(&props)
    }

    // Same as `board_props_json`, sized for the current browser window.
    pub fn window_board_props_json(&self) -> JsResult<String> {
        let window = web_sys::window().ok_or_else(|| rust_error!("No window"))?;
        let width = window.inner_width()?.as_f64().ok_or_else(|| rust_error!("Bad width"))?;
        let height = window.inner_height()?.as_f64().ok_or_else(|| rust_error!("Bad height"))?;
        self.board_props_json(width, height)
    }

    pub fn fen(&self) -> String { self.session.view().position.clone() }
    pub fn status_message(&self) -> String { self.session.status_message().to_string() }
    pub fn is_game_over(&self) -> bool { self.session.engine().is_game_over() }
    pub fn history_json(&self) -> JsResult<String> { to_json(&self.session.view().move_pairs()) }
    pub fn captured_json(&self) -> JsResult<String> { to_json(&self.session.view().captured) }
    pub fn pgn(&self) -> String { export_pgn(self.session.view()) }
}

fn to_json(value: &impl Serialize) -> JsResult<String> {
    serde_json::to_string(value).map_err(|err| rust_error!("{err}"))
}
