// Click-to-move selection. A selection only exists while the selected piece has somewhere to
// go: `Selected::destinations` is never empty.

use std::collections::BTreeMap;

use crate::coord::Coord;
use crate::display::Highlight;
use crate::rules::RulesEngine;


#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        origin: Coord,
        destinations: BTreeMap<Coord, Highlight>,
    },
}

impl Selection {
    // Selects the piece on `origin`, if it has any legal moves. Empty squares, opponent pieces
    // and blocked pieces all produce `Idle`.
    pub fn select(engine: &impl RulesEngine, origin: Coord) -> Self {
        if engine.piece_at(origin).is_none() {
            return Selection::Idle;
        }
        let destinations: BTreeMap<_, _> = engine
            .legal_moves(Some(origin))
            .into_iter()
            .map(|m| {
                let highlight = if engine.piece_at(m.to).is_some() {
                    Highlight::OptionCapture
                } else {
                    Highlight::OptionPlain
                };
                (m.to, highlight)
            })
            .collect();
        if destinations.is_empty() {
            Selection::Idle
        } else {
            Selection::Selected { origin, destinations }
        }
    }

    pub fn is_idle(&self) -> bool { matches!(self, Selection::Idle) }

    pub fn origin(&self) -> Option<Coord> {
        match self {
            Selection::Idle => None,
            Selection::Selected { origin, .. } => Some(*origin),
        }
    }

    pub fn is_destination(&self, coord: Coord) -> bool {
        match self {
            Selection::Idle => false,
            Selection::Selected { destinations, .. } => destinations.contains_key(&coord),
        }
    }

    // Origin and destination highlights.
    pub fn highlights(&self) -> BTreeMap<Coord, Highlight> {
        match self {
            Selection::Idle => BTreeMap::new(),
            Selection::Selected { origin, destinations } => {
                let mut highlights = destinations.clone();
                highlights.insert(*origin, Highlight::Selection);
                highlights
            }
        }
    }
}
