//! Cell geometry on the drawing surface
//!
//! Every cell is an axis-aligned rectangle of `square_width x square_height`
//! units referenced by its center. Centers are whole units but need not sit
//! on the grid lattice, so all tests here work on arbitrary offsets.

use rand::Rng;
use tracing::warn;

use super::action::Direction;
use super::config::GameConfig;

/// Center of one cell on the drawing surface
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Corners of a cell rectangle: top-left, top-right, bottom-right, bottom-left
pub type Vertices = [Coordinate; 4];

/// Dimensions of the playfield and its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub square_width: i32,
    pub square_height: i32,
}

impl Grid {
    pub fn new(canvas_width: i32, canvas_height: i32, square_width: i32, square_height: i32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            square_width,
            square_height,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.canvas_width as i32,
            config.canvas_height as i32,
            config.square_width as i32,
            config.square_height as i32,
        )
    }

    pub fn half_width(&self) -> i32 {
        self.square_width / 2
    }

    pub fn half_height(&self) -> i32 {
        self.square_height / 2
    }

    /// The four corners of the cell centered at `center`
    pub fn vertices_from_center(&self, center: Coordinate) -> Vertices {
        let (hw, hh) = (self.half_width(), self.half_height());
        [
            Coordinate::new(center.x - hw, center.y - hh),
            Coordinate::new(center.x + hw, center.y - hh),
            Coordinate::new(center.x + hw, center.y + hh),
            Coordinate::new(center.x - hw, center.y + hh),
        ]
    }

    /// True when the cells centered at `a` and `b` share interior area.
    ///
    /// Neighbours whose edges only touch do not overlap, otherwise every
    /// step would collide with the segment the head just left.
    pub fn overlaps(&self, a: Coordinate, b: Coordinate) -> bool {
        if a == b {
            return true;
        }
        (a.x - b.x).abs() < self.square_width && (a.y - b.y).abs() < self.square_height
    }

    /// True when the whole cell lies within `[0, width] x [0, height]`
    pub fn is_inside_bounds(&self, cell: Coordinate) -> bool {
        self.vertices_from_center(cell).iter().all(|v| {
            (0..=self.canvas_width).contains(&v.x) && (0..=self.canvas_height).contains(&v.y)
        })
    }

    /// Advance one cell in `direction`, re-entering from the opposite edge
    /// once the center is within half a cell of the far boundary.
    pub fn step(&self, cell: Coordinate, direction: Direction) -> Coordinate {
        let (hw, hh) = (self.half_width(), self.half_height());
        let Coordinate { x, y } = cell;
        match direction {
            Direction::Right => Coordinate::new(
                if x >= self.canvas_width - hw { hw } else { x + self.square_width },
                y,
            ),
            Direction::Left => Coordinate::new(
                if x <= hw { self.canvas_width - hw } else { x - self.square_width },
                y,
            ),
            Direction::Down => Coordinate::new(
                x,
                if y >= self.canvas_height - hh { hh } else { y + self.square_height },
            ),
            Direction::Up => Coordinate::new(
                x,
                if y <= hh { self.canvas_height - hh } else { y - self.square_height },
            ),
        }
    }

    /// Uniform point in `[0, width) x [0, height)`. Not aligned to the grid.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::new(
            rng.gen_range(0..self.canvas_width),
            rng.gen_range(0..self.canvas_height),
        )
    }

    /// In bounds and clear of both the body and the food
    pub fn is_safe(&self, cell: Coordinate, body: &[Coordinate], food: Option<Coordinate>) -> bool {
        self.is_inside_bounds(cell)
            && !body.iter().any(|&segment| self.overlaps(segment, cell))
            && !food.is_some_and(|food| self.overlaps(cell, food))
    }

    /// Find a safe cell by rejection sampling.
    ///
    /// After `max_attempts` misses every in-bounds center is scanned in
    /// row-major order, so this always terminates. `None` means the board
    /// has no safe cell left.
    pub fn find_safe_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        body: &[Coordinate],
        food: Option<Coordinate>,
        max_attempts: u32,
    ) -> Option<Coordinate> {
        for _ in 0..max_attempts {
            let cell = self.random_cell(rng);
            if self.is_safe(cell, body, food) {
                return Some(cell);
            }
        }

        warn!(
            attempts = max_attempts,
            body_len = body.len(),
            "random placement exhausted, scanning for a free cell"
        );
        self.scan_safe_cell(body, food)
    }

    fn scan_safe_cell(&self, body: &[Coordinate], food: Option<Coordinate>) -> Option<Coordinate> {
        let (hw, hh) = (self.half_width(), self.half_height());
        (hh..=self.canvas_height - hh)
            .flat_map(|y| (hw..=self.canvas_width - hw).map(move |x| Coordinate::new(x, y)))
            .find(|&cell| self.is_safe(cell, body, food))
    }
}
