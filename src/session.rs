// `GameSession` owns the rules engine and all UI state for one board. Front-ends forward user
// gestures here and render whatever `view()` and `board_props()` return.
//
// The engine is trusted, the user is not: no gesture may panic, whatever squares it names.

use std::collections::BTreeMap;

use log::{debug, error, info};

use crate::chalk::Chalkboard;
use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::display::{BoardProps, Highlight, Viewport};
use crate::engine::ShakmatyEngine;
use crate::error::MoveRejection;
use crate::internal_error_message;
use crate::rules::{MoveRecord, MoveRequest, RulesEngine};
use crate::selection::Selection;
use crate::view_state::{StatusMessage, ViewState};


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    Noop,
    Selected(Coord),
    Deselected,
    MoveMade(MoveRecord),
}

#[derive(Clone, Debug)]
pub struct GameSession<E: RulesEngine = ShakmatyEngine> {
    engine: E,
    // Always equals `ViewState::sync(&engine)`: refreshed after every engine mutation.
    view: ViewState,
    selection: Selection,
    chalkboard: Chalkboard,
    config: BoardConfig,
}

impl GameSession<ShakmatyEngine> {
    pub fn new(config: BoardConfig) -> Self { Self::with_engine(ShakmatyEngine::new(), config) }
}

impl<E: RulesEngine> GameSession<E> {
    pub fn with_engine(engine: E, config: BoardConfig) -> Self {
        let view = ViewState::sync(&engine);
        GameSession {
            engine,
            view,
            selection: Selection::Idle,
            chalkboard: Chalkboard::new(),
            config,
        }
    }

    pub fn engine(&self) -> &E { &self.engine }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn selection(&self) -> &Selection { &self.selection }
    pub fn chalkboard(&self) -> &Chalkboard { &self.chalkboard }
    pub fn config(&self) -> &BoardConfig { &self.config }
    pub fn config_mut(&mut self) -> &mut BoardConfig { &mut self.config }
    pub fn status_message(&self) -> StatusMessage { self.view.status_message() }

    pub fn click_square(&mut self, coord: Coord) -> ClickOutcome {
        self.chalkboard.clear();
        match self.selection {
            Selection::Idle => self.select(coord),
            Selection::Selected { origin, .. } if origin == coord => {
                debug!("Deselected {coord}");
                self.selection = Selection::Idle;
                ClickOutcome::Deselected
            }
            Selection::Selected { origin, .. } => {
                if self.selection.is_destination(coord) {
                    match self.try_move(MoveRequest::new(origin, coord)) {
                        Ok(record) => return ClickOutcome::MoveMade(record),
                        Err(err) => {
                            error!(
                                "{}",
                                internal_error_message!(
                                    "engine rejected listed move {origin}-{coord}: {err}"
                                )
                            );
                        }
                    }
                }
                self.select(coord)
            }
        }
    }

    // Drag & drop bypasses selection entirely. On failure nothing changes, and the renderer
    // should put the piece back.
    pub fn drop_piece(
        &mut self, from: Coord, to: Option<Coord>,
    ) -> Result<MoveRecord, MoveRejection> {
        let to = to.ok_or(MoveRejection::NoDestination)?;
        self.try_move(MoveRequest::new(from, to))
    }

    // Toggles a chalk mark. Returns whether the square is marked now.
    pub fn right_click_square(&mut self, coord: Coord) -> bool {
        self.chalkboard.toggle_mark(coord)
    }

    pub fn reset(&mut self) {
        info!("New game");
        self.engine.reset();
        self.selection = Selection::Idle;
        self.chalkboard.clear();
        self.sync();
    }

    // Selection and chalk highlights combined. Chalk wins when both mark the same square.
    pub fn square_highlights(&self) -> BTreeMap<Coord, Highlight> {
        let mut highlights = self.selection.highlights();
        highlights.extend(self.chalkboard.marked_squares().map(|c| (c, Highlight::Annotation)));
        highlights
    }

    pub fn board_props(&self, viewport: Viewport) -> BoardProps {
        let palette = &self.config.palette;
        BoardProps {
            position: self.view.position.clone(),
            square_styles: self
                .square_highlights()
                .into_iter()
                .map(|(coord, highlight)| (coord.to_algebraic(), palette.style(highlight)))
                .collect(),
            draggable: self.config.allow_drag,
            orientation: self.config.orientation,
            animation_duration_ms: u64::try_from(self.config.animation_duration.as_millis())
                .unwrap_or(u64::MAX),
            board_width: self.config.board_width.board_width(viewport.width, viewport.height),
        }
    }

    fn select(&mut self, coord: Coord) -> ClickOutcome {
        self.selection = Selection::select(&self.engine, coord);
        match self.selection.origin() {
            Some(origin) => {
                debug!("Selected {origin}");
                ClickOutcome::Selected(origin)
            }
            None => ClickOutcome::Noop,
        }
    }

    fn try_move(&mut self, request: MoveRequest) -> Result<MoveRecord, MoveRejection> {
        let record = self.engine.attempt_move(request)?;
        debug!("{:?} played {}", record.force, record.san);
        self.selection = Selection::Idle;
        self.sync();
        if self.engine.is_game_over() {
            info!("Game over: {}", self.status_message());
        }
        Ok(record)
    }

    fn sync(&mut self) { self.view = ViewState::sync(&self.engine); }
}

// Square names arrive as strings from the front-ends.
pub fn parse_square(name: &str) -> Result<Coord, MoveRejection> {
    Coord::from_algebraic(name).ok_or_else(|| MoveRejection::MalformedSquare(name.to_owned()))
}
