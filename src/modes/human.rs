use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::interval;
use tracing::info;

use crate::game::{Canvas, ChannelHooks, GameConfig, GameEngine, GameEvent};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::session::{GameSession, InputHandle};

pub struct HumanMode {
    session: GameSession<Canvas>,
    events: UnboundedReceiver<GameEvent>,
    input: Option<InputHandle>,
    /// Copy of the engine's surface taken on every draw notification
    board: Canvas,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, scale: u32) -> Result<Self> {
        let canvas = Canvas::new(config.canvas_width, config.canvas_height);
        let (hooks, events) = ChannelHooks::new();
        let engine = GameEngine::new(config, canvas.clone())
            .context("Failed to create game engine")?
            .with_hooks(hooks);

        Ok(Self {
            session: GameSession::new(engine),
            events,
            input: None,
            board: canvas,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(scale),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        self.start_game()?;

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = self.session.wait_tick() => {
                    self.session.tick().context("Game tick failed")?;
                }

                // Hook notifications from the engine
                Some(event) = self.events.recv() => {
                    self.on_game_event(event);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.board, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    if let Some(input) = &self.input {
                        input.send(direction);
                    }
                }
                KeyAction::PlayAgain => {
                    // Only offered once the current game is over
                    if self.metrics.ended {
                        self.start_game()?;
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn on_game_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Drawn => {
                self.board = self.session.engine().surface().clone();
            }
            GameEvent::Point(score) => self.metrics.on_point(score),
            GameEvent::Ended(score) => {
                info!(score, high_score = self.metrics.high_score, "game over");
                self.metrics.on_game_over(score);
            }
        }
    }

    fn start_game(&mut self) -> Result<()> {
        let input = self.session.start().context("Failed to start game")?;
        self.input = Some(input);
        self.metrics.on_game_start();
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
