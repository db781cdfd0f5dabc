//! Notifications the engine sends to its presentation layer

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::surface::Surface;

/// Observer of a running game. Every method defaults to doing nothing.
pub trait GameHooks {
    /// Called after every redraw, with the freshly painted surface
    fn on_draw(&mut self, _surface: &dyn Surface) {}

    /// Called after food was eaten, with the updated score
    fn on_point(&mut self, _score: u32) {}

    /// Called once when the snake runs into itself, with the final score
    fn on_end(&mut self, _score: u32) {}
}

/// Hook notification as a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Drawn,
    Point(u32),
    Ended(u32),
}

/// Forwards hook calls into a channel so an async loop can consume them
pub struct ChannelHooks {
    tx: UnboundedSender<GameEvent>,
}

impl ChannelHooks {
    pub fn new() -> (Self, UnboundedReceiver<GameEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    fn emit(&self, event: GameEvent) {
        // The receiver going away just means nobody is watching anymore
        let _ = self.tx.send(event);
    }
}

impl GameHooks for ChannelHooks {
    fn on_draw(&mut self, _surface: &dyn Surface) {
        self.emit(GameEvent::Drawn);
    }

    fn on_point(&mut self, score: u32) {
        self.emit(GameEvent::Point(score));
    }

    fn on_end(&mut self, score: u32) {
        self.emit(GameEvent::Ended(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::surface::Canvas;

    #[test]
    fn test_channel_hooks_forward_in_order() {
        let (mut hooks, mut rx) = ChannelHooks::new();
        let canvas = Canvas::new(10, 10);

        hooks.on_draw(&canvas);
        hooks.on_point(1);
        hooks.on_end(1);

        assert_eq!(rx.try_recv().unwrap(), GameEvent::Drawn);
        assert_eq!(rx.try_recv().unwrap(), GameEvent::Point(1));
        assert_eq!(rx.try_recv().unwrap(), GameEvent::Ended(1));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (mut hooks, rx) = ChannelHooks::new();
        drop(rx);
        hooks.on_point(3);
    }
}
