use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::{
    action::Direction,
    config::GameConfig,
    error::{GameError, GameResult},
    geometry::{Coordinate, Grid},
    hooks::GameHooks,
    state::{GamePhase, GameState, Snake},
    surface::{Paint, Surface},
};

/// What a single movement step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game is over, nothing changed
    Ignored,
    /// The snake moved without eating
    Moved,
    /// The snake ate and grew by one segment
    AteFood { score: u32 },
    /// The new head ran into the body and the game ended
    Collided { score: u32 },
}

impl StepOutcome {
    pub fn terminated(&self) -> bool {
        matches!(self, StepOutcome::Collided { .. } | StepOutcome::Ignored)
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<S: Surface> {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
    surface: S,
    state: GameState,
    hooks: Option<Box<dyn GameHooks>>,
}

impl<S: Surface> GameEngine<S> {
    /// Create a new engine drawing onto `surface`.
    ///
    /// Fails before any game state exists when the configuration is invalid
    /// or the surface cannot hold the configured canvas.
    pub fn new(config: GameConfig, surface: S) -> GameResult<Self> {
        config.validate()?;

        let actual = surface.size();
        if actual.0 == 0 || actual.1 == 0 {
            return Err(GameError::SurfaceUnavailable);
        }
        let expected = (config.canvas_width, config.canvas_height);
        if actual != expected {
            return Err(GameError::SurfaceMismatch { expected, actual });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            grid: Grid::from_config(&config),
            config,
            rng,
            surface,
            state: GameState::default(),
            hooks: None,
        })
    }

    /// Install the observer that receives draw, point and end notifications
    pub fn set_hooks(&mut self, hooks: impl GameHooks + 'static) {
        self.hooks = Some(Box::new(hooks));
    }

    pub fn with_hooks(mut self, hooks: impl GameHooks + 'static) -> Self {
        self.set_hooks(hooks);
        self
    }

    /// Reset to a running game with a one-segment snake and fresh food
    pub fn start(&mut self) -> GameResult<()> {
        let attempts = self.config.max_placement_attempts;
        let head = self
            .grid
            .find_safe_cell(&mut self.rng, &[], None, attempts)
            .ok_or(GameError::BoardFull)?;
        let food = self
            .grid
            .find_safe_cell(&mut self.rng, &[head], None, attempts);

        self.state = GameState::new(head, food);
        info!(?head, ?food, "game started");

        self.redraw();
        Ok(())
    }

    /// Record the latest input. Only takes effect on the next step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.state.requested_direction = direction;
    }

    /// One timer tick: move in the requested direction while running
    pub fn tick(&mut self) -> GameResult<StepOutcome> {
        match self.state.phase {
            GamePhase::Running => self.step(self.state.requested_direction),
            GamePhase::Ended => Ok(StepOutcome::Ignored),
            GamePhase::NotStarted => Err(GameError::NotStarted),
        }
    }

    /// Execute one step of the game
    pub fn step(&mut self, requested: Direction) -> GameResult<StepOutcome> {
        match self.state.phase {
            GamePhase::NotStarted => return Err(GameError::NotStarted),
            GamePhase::Ended => return Ok(StepOutcome::Ignored),
            GamePhase::Running => {}
        }

        let direction = Direction::resolve(requested, self.state.committed_direction);
        if direction != requested {
            debug!(?requested, ?direction, "reversal rejected");
        }

        let head = self.state.snake.head().ok_or(GameError::NotStarted)?;
        let new_head = self.grid.step(head, direction);
        self.state.committed_direction = Some(direction);

        if self.state.snake.collides_with(&self.grid, new_head) {
            self.state.phase = GamePhase::Ended;
            let score = self.state.score;
            info!(score, "game ended");
            if let Some(hooks) = self.hooks.as_mut() {
                hooks.on_end(score);
            }
            return Ok(StepOutcome::Collided { score });
        }

        let tail = self.state.snake.advance(new_head);

        let mut outcome = StepOutcome::Moved;
        if let (Some(food), Some(tail)) = (self.state.food, tail) {
            if self.grid.overlaps(new_head, food) || new_head == food {
                // Re-attach first so the new food also avoids the tail
                self.state.snake.grow(tail);
                self.state.food = self.place_food();
                self.state.score += 1;

                let score = self.state.score;
                debug!(score, len = self.state.snake.len(), "food eaten");
                if let Some(hooks) = self.hooks.as_mut() {
                    hooks.on_point(score);
                }
                outcome = StepOutcome::AteFood { score };
            }
        }

        self.redraw();
        Ok(outcome)
    }

    fn place_food(&mut self) -> Option<Coordinate> {
        // The old food is being replaced, so only the body has to be avoided
        let food = self.grid.find_safe_cell(
            &mut self.rng,
            &self.state.snake.body,
            None,
            self.config.max_placement_attempts,
        );
        if food.is_none() {
            warn!("no room left for food");
        }
        food
    }

    /// Repaint the whole surface from the current state
    pub fn redraw(&mut self) {
        let (width, height) = self.surface.size();
        self.surface.clear();
        self.surface.fill_rect(0, 0, width, height, Paint::Background);

        for &segment in &self.state.snake.body {
            paint_cell(&mut self.surface, &self.grid, segment, Paint::Body);
        }
        if let Some(food) = self.state.food {
            paint_cell(&mut self.surface, &self.grid, food, Paint::Food);
        }

        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_draw(&self.surface);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups (tests, replays)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Replace the snake body, head first
    pub fn place_snake(&mut self, body: Vec<Coordinate>) {
        self.state.snake = Snake::from_segments(body);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Fill the cell rectangle centered at `center`
fn paint_cell<S: Surface>(surface: &mut S, grid: &Grid, center: Coordinate, paint: Paint) {
    let [top_left, ..] = grid.vertices_from_center(center);
    surface.fill_rect(
        top_left.x,
        top_left.y,
        grid.square_width as u32,
        grid.square_height as u32,
        paint,
    );
}
