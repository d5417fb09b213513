use enum_map::Enum;
use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, Serialize, Deserialize)]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Force::White => "White",
            Force::Black => "Black",
        }
    }

    pub(crate) fn from_shakmaty(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Force::White,
            shakmaty::Color::Black => Force::Black,
        }
    }
}
