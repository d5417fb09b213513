// Chalk: user annotations on top of the board, used for analysis. Marks have no meaning for
// the rules engine and are never validated against the position.

use std::collections::BTreeSet;

use crate::coord::Coord;


#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Chalkboard {
    marked_squares: BTreeSet<Coord>,
}

impl Chalkboard {
    pub fn new() -> Self { Chalkboard { marked_squares: BTreeSet::new() } }

    pub fn is_marked(&self, coord: Coord) -> bool { self.marked_squares.contains(&coord) }
    pub fn marked_squares(&self) -> impl Iterator<Item = Coord> + '_ {
        self.marked_squares.iter().copied()
    }
    pub fn is_empty(&self) -> bool { self.marked_squares.is_empty() }

    // Adds a mark, or removes it if the square is already marked. Returns whether the square
    // is marked afterwards.
    pub fn toggle_mark(&mut self, coord: Coord) -> bool {
        if self.marked_squares.remove(&coord) {
            false
        } else {
            self.marked_squares.insert(coord);
            true
        }
    }

    // Returns whether there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.marked_squares.is_empty();
        self.marked_squares.clear();
        had_content
    }
}
