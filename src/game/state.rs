use super::action::Direction;
use super::geometry::{Coordinate, Grid};

/// Lifecycle of a game
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Ended,
}

/// The snake in the game
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Coordinate>,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Coordinate) -> Self {
        Self { body: vec![head] }
    }

    /// Create a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Coordinate>) -> Self {
        Self { body }
    }

    /// Get the head position, `None` before the game has started
    pub fn head(&self) -> Option<Coordinate> {
        self.body.first().copied()
    }

    /// Check if the cell overlaps any segment, head included
    pub fn collides_with(&self, grid: &Grid, cell: Coordinate) -> bool {
        self.body.iter().any(|&segment| grid.overlaps(segment, cell))
    }

    /// Put a new head in front and drop the tail, which is returned
    pub fn advance(&mut self, new_head: Coordinate) -> Option<Coordinate> {
        self.body.insert(0, new_head);
        self.body.pop()
    }

    /// Re-attach a segment at the tail end
    pub fn grow(&mut self, tail: Coordinate) {
        self.body.push(tail);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Coordinate>,
    /// Latest direction asked for by input, overwritten on every key press
    pub requested_direction: Direction,
    /// Direction of the last completed move, `None` until the first move
    pub committed_direction: Option<Direction>,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// A fresh running game with the given head and food
    pub fn new(head: Coordinate, food: Option<Coordinate>) -> Self {
        Self {
            snake: Snake::new(head),
            food,
            phase: GamePhase::Running,
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(100, 100, 10, 10)
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Coordinate::new(45, 45));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Some(Coordinate::new(45, 45)));
        assert!(Snake::default().head().is_none());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::from_segments(vec![Coordinate::new(45, 45), Coordinate::new(35, 45)]);
        let tail = snake.advance(Coordinate::new(55, 45));

        assert_eq!(tail, Some(Coordinate::new(35, 45)));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Some(Coordinate::new(55, 45)));
        assert_eq!(snake.body[1], Coordinate::new(45, 45));
    }

    #[test]
    fn test_grow_reattaches_tail() {
        let mut snake = Snake::new(Coordinate::new(45, 45));
        let tail = snake.advance(Coordinate::new(55, 45)).unwrap();
        snake.grow(tail);

        assert_eq!(snake.body, vec![Coordinate::new(55, 45), Coordinate::new(45, 45)]);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_segments(vec![Coordinate::new(45, 45), Coordinate::new(35, 45)]);
        assert!(snake.collides_with(&grid(), Coordinate::new(45, 45))); // head
        assert!(snake.collides_with(&grid(), Coordinate::new(38, 41))); // partial overlap
        assert!(!snake.collides_with(&grid(), Coordinate::new(55, 45))); // touching only
        assert!(!snake.collides_with(&grid(), Coordinate::new(80, 80))); // empty
    }

    #[test]
    fn test_new_state_is_running() {
        let state = GameState::new(Coordinate::new(5, 5), None);
        assert!(state.is_running());
        assert!(!state.is_ended());
        assert_eq!(state.score, 0);
        assert_eq!(state.requested_direction, Direction::Down);
        assert_eq!(state.committed_direction, None);
        assert_eq!(GameState::default().phase, GamePhase::NotStarted);
    }
}
