/// Direction the snake can move
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Resolve a requested direction against the last committed one.
    ///
    /// A request to reverse is replaced by the committed direction so the
    /// head can never turn back into the segment behind it.
    pub fn resolve(requested: Direction, committed: Option<Direction>) -> Direction {
        match committed {
            Some(last) if last.is_opposite(requested) => last,
            _ => requested,
        }
    }
}
