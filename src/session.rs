//! Tick timer and input subscription for one game at a time
//!
//! Each call to [`GameSession::start`] drops the previous timer and input
//! channel before creating new ones, so restarting never leaves a second
//! timer driving the snake and input sent through an old handle goes nowhere.

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crate::game::{Direction, GameEngine, GameResult, StepOutcome, Surface};

/// Sending side of the input subscription created by `start`
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: UnboundedSender<Direction>,
}

impl InputHandle {
    /// Queue a direction for the next tick. Returns false once the game this
    /// handle belonged to has been restarted.
    pub fn send(&self, direction: Direction) -> bool {
        self.tx.send(direction).is_ok()
    }

    pub fn is_live(&self) -> bool {
        !self.tx.is_closed()
    }
}

pub struct GameSession<S: Surface> {
    engine: GameEngine<S>,
    ticker: Option<Interval>,
    input: Option<UnboundedReceiver<Direction>>,
}

impl<S: Surface> GameSession<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine,
            ticker: None,
            input: None,
        }
    }

    /// Start or restart the game with a fresh timer and input subscription
    pub fn start(&mut self) -> GameResult<InputHandle> {
        self.ticker = None;
        self.input = None;

        self.engine.start()?;

        let period = self.engine.config().tick_interval();
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let (tx, rx) = unbounded_channel();

        self.ticker = Some(ticker);
        self.input = Some(rx);
        debug!(period_ms = period.as_millis() as u64, "session started");

        Ok(InputHandle { tx })
    }

    /// Wait for the next tick. Never resolves before the first `start`.
    pub async fn wait_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Apply queued input, newest last, then advance the game by one step
    pub fn tick(&mut self) -> GameResult<StepOutcome> {
        if let Some(rx) = self.input.as_mut() {
            while let Ok(direction) = rx.try_recv() {
                self.engine.set_direction(direction);
            }
        }
        self.engine.tick()
    }

    /// Drive ticks until the snake collides, returning the final score
    pub async fn run_until_end(&mut self) -> GameResult<u32> {
        loop {
            self.wait_tick().await;
            match self.tick()? {
                StepOutcome::Collided { score } => return Ok(score),
                StepOutcome::Ignored => return Ok(self.engine.state().score),
                _ => {}
            }
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<S> {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Canvas, Coordinate, GameConfig};
    use std::time::Duration;

    fn session() -> GameSession<Canvas> {
        let engine = GameEngine::new(GameConfig::seeded(7), Canvas::new(100, 100)).unwrap();
        GameSession::new(engine)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_configured_period() {
        let mut session = session();
        session.start().unwrap();
        let begin = Instant::now();

        session.wait_tick().await;
        assert_eq!(begin.elapsed(), Duration::from_millis(500));

        session.wait_tick().await;
        assert_eq!(begin.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_ticking_before_start() {
        let mut session = session();
        assert!(!session.is_ticking());

        let waited = tokio::time::timeout(Duration::from_secs(5), session.wait_tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_timer_and_input() {
        let mut session = session();
        let first = session.start().unwrap();
        tokio::time::advance(Duration::from_millis(300)).await;
        let second = session.start().unwrap();

        assert!(!first.is_live());
        assert!(!first.send(Direction::Up));
        assert!(second.send(Direction::Up));

        // The new timer is anchored at the restart, not the first start
        let begin = Instant::now();
        session.wait_tick().await;
        assert_eq!(begin.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_input_wins() {
        let mut session = session();
        let input = session.start().unwrap();
        session
            .engine_mut()
            .place_snake(vec![Coordinate::new(45, 45)]);
        session.engine_mut().state_mut().food = Some(Coordinate::new(85, 85));

        input.send(Direction::Up);
        input.send(Direction::Left);
        session.wait_tick().await;
        session.tick().unwrap();

        assert_eq!(
            session.engine().state().snake.head(),
            Some(Coordinate::new(35, 45))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_until_end_reports_score() {
        let mut session = session();
        let input = session.start().unwrap();
        session.engine_mut().place_snake(vec![
            Coordinate::new(45, 45),
            Coordinate::new(55, 45),
            Coordinate::new(55, 55),
            Coordinate::new(45, 55),
        ]);
        let state = session.engine_mut().state_mut();
        state.committed_direction = Some(Direction::Left);
        state.score = 2;
        state.food = Some(Coordinate::new(85, 15));

        input.send(Direction::Down);
        let score = session.run_until_end().await.unwrap();

        assert_eq!(score, 2);
        assert!(session.engine().state().is_ended());
    }
}
