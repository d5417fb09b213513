use std::fmt;

use itertools::Itertools;
use shakmaty::{File, Rank, Square};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


const fn const_char_sub(a: char, b: char) -> u8 {
    let a_idx = a as u32;
    let b_idx = b as u32;
    assert!(a_idx >= b_idx);
    let diff = a_idx - b_idx;
    assert!(diff <= u8::MAX as u32);
    diff as u8
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based, row '1' is 0
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn from_algebraic(idx: char) -> Self {
        Self::from_zero_based(const_char_sub(idx, '1'))
    }
    pub fn try_from_algebraic(idx: char) -> Option<Self> {
        ('1'..='8').contains(&idx).then(|| Self::from_algebraic(idx))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based, col 'a' is 0
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Col {
        assert!(idx < NUM_COLS);
        Col { idx }
    }
    pub const fn from_algebraic(idx: char) -> Self {
        Self::from_zero_based(const_char_sub(idx, 'a'))
    }
    pub fn try_from_algebraic(idx: char) -> Option<Self> {
        ('a'..='h').contains(&idx).then(|| Self::from_algebraic(idx))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}


// Ordered row-major starting from 'a1', so that maps keyed by `Coord` iterate deterministically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    // Parses a square name like "e4". Returns `None` for anything else: square names come
    // from the UI and must never crash the session.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.trim().chars().collect_tuple()?;
        Some(Coord {
            row: Row::try_from_algebraic(row)?,
            col: Col::try_from_algebraic(col.to_ascii_lowercase())?,
        })
    }
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    // Light squares are those where file and rank parities differ (a1 is dark).
    pub fn is_light(self) -> bool { (self.row.to_zero_based() + self.col.to_zero_based()) % 2 == 1 }

    pub(crate) fn to_square(self) -> Square {
        Square::from_coords(
            File::new(u32::from(self.col.to_zero_based())),
            Rank::new(u32::from(self.row.to_zero_based())),
        )
    }
    pub(crate) fn from_square(square: Square) -> Self {
        Coord {
            row: Row::from_zero_based(u8::from(square.rank())),
            col: Col::from_zero_based(u8::from(square.file())),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Coord({self})") }
}


macro_rules! coord_constants {
    ($($name:ident = $col:literal $row:literal),* $(,)?) => {
        impl Coord {
            $(pub const $name: Coord = Coord::new(Row::from_algebraic($row), Col::from_algebraic($col));)*
        }
    };
}

coord_constants! {
    A1 = 'a' '1', A2 = 'a' '2', A3 = 'a' '3', A4 = 'a' '4',
    A5 = 'a' '5', A6 = 'a' '6', A7 = 'a' '7', A8 = 'a' '8',
    B1 = 'b' '1', B2 = 'b' '2', B3 = 'b' '3', B4 = 'b' '4',
    B5 = 'b' '5', B6 = 'b' '6', B7 = 'b' '7', B8 = 'b' '8',
    C1 = 'c' '1', C2 = 'c' '2', C3 = 'c' '3', C4 = 'c' '4',
    C5 = 'c' '5', C6 = 'c' '6', C7 = 'c' '7', C8 = 'c' '8',
    D1 = 'd' '1', D2 = 'd' '2', D3 = 'd' '3', D4 = 'd' '4',
    D5 = 'd' '5', D6 = 'd' '6', D7 = 'd' '7', D8 = 'd' '8',
    E1 = 'e' '1', E2 = 'e' '2', E3 = 'e' '3', E4 = 'e' '4',
    E5 = 'e' '5', E6 = 'e' '6', E7 = 'e' '7', E8 = 'e' '8',
    F1 = 'f' '1', F2 = 'f' '2', F3 = 'f' '3', F4 = 'f' '4',
    F5 = 'f' '5', F6 = 'f' '6', F7 = 'f' '7', F8 = 'f' '8',
    G1 = 'g' '1', G2 = 'g' '2', G3 = 'g' '3', G4 = 'g' '4',
    G5 = 'g' '5', G6 = 'g' '6', G7 = 'g' '7', G8 = 'g' '8',
    H1 = 'h' '1', H2 = 'h' '2', H3 = 'h' '3', H4 = 'h' '4',
    H5 = 'h' '5', H6 = 'h' '6', H7 = 'h' '7', H8 = 'h' '8',
}
