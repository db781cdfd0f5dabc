//! Drawing surface the engine paints onto

/// What a filled pixel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Background,
    Body,
    Food,
}

/// A fixed-size drawable rectangle supporting clear and filled rectangles
pub trait Surface {
    /// Logical `(width, height)` of the surface
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to transparent
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle, clipped to the surface
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, paint: Paint);
}

/// In-memory surface, one slot per logical unit
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Option<Paint>>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; (width as usize) * (height as usize)],
        }
    }

    /// Paint at `(x, y)`, `None` when cleared or out of range
    pub fn pixel(&self, x: u32, y: u32) -> Option<Paint> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[self.index(x, y)]
    }

    /// Number of pixels currently showing `paint`
    pub fn count(&self, paint: Paint) -> usize {
        self.pixels.iter().filter(|p| **p == Some(paint)).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.pixels.fill(None);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, paint: Paint) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                let idx = self.index(px as u32, py as u32);
                self.pixels[idx] = Some(paint);
            }
        }
    }
}
