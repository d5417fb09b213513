// What the board renderer needs from us: square styles, orientation and sizing. The renderer
// itself (JS component in the browser, `tui` in the console) is not part of this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BoardOrientation {
    Normal,  // White at bottom
    Rotated, // Black at bottom
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Highlight {
    Selection,     // the selected piece
    OptionPlain,   // legal destination, empty square
    OptionCapture, // legal destination, occupied square
    Annotation,    // chalk mark
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareStyle {
    pub background: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

impl SquareStyle {
    pub fn filled(background: &str) -> Self {
        SquareStyle { background: background.to_owned(), border_radius: None }
    }
    pub fn rounded(background: &str) -> Self {
        SquareStyle {
            background: background.to_owned(),
            border_radius: Some("50%".to_owned()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

// Everything the board component is rendered with. Serialized as JSON for the web client.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardProps {
    pub position: String,
    pub square_styles: BTreeMap<String, SquareStyle>,
    pub draggable: bool,
    pub orientation: BoardOrientation,
    pub animation_duration_ms: u64,
    pub board_width: u32,
}

impl BoardOrientation {
    pub fn flipped(self) -> Self {
        match self {
            BoardOrientation::Normal => BoardOrientation::Rotated,
            BoardOrientation::Rotated => BoardOrientation::Normal,
        }
    }
}

// Screen cell of a square: `x` grows to the right and `y` grows downwards, (0, 0) is the top
// left corner regardless of orientation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayCoord {
    pub x: u8,
    pub y: u8,
}

pub fn to_display_coord(coord: Coord, orientation: BoardOrientation) -> DisplayCoord {
    match orientation {
        BoardOrientation::Normal => DisplayCoord {
            x: coord.col.to_zero_based(),
            y: NUM_ROWS - coord.row.to_zero_based() - 1,
        },
        BoardOrientation::Rotated => DisplayCoord {
            x: NUM_COLS - coord.col.to_zero_based() - 1,
            y: coord.row.to_zero_based(),
        },
    }
}

pub fn from_display_coord(q: DisplayCoord, orientation: BoardOrientation) -> Option<Coord> {
    if q.x >= NUM_COLS || q.y >= NUM_ROWS {
        return None;
    }
    Some(match orientation {
        BoardOrientation::Normal => Coord::new(
            Row::from_zero_based(NUM_ROWS - q.y - 1),
            Col::from_zero_based(q.x),
        ),
        BoardOrientation::Rotated => Coord::new(
            Row::from_zero_based(q.y),
            Col::from_zero_based(NUM_COLS - q.x - 1),
        ),
    })
}
