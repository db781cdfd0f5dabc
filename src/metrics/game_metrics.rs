use std::time::{Duration, Instant};

/// Score line and per-process statistics shown next to the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub score: u32,
    pub ended: bool,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            score: 0,
            ended: false,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the clock. Frozen once the game has ended.
    pub fn update(&mut self) {
        if !self.ended {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.score = 0;
        self.ended = false;
    }

    pub fn on_point(&mut self, score: u32) {
        self.score = score;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.score = final_score;
        self.ended = true;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn score_text(&self) -> String {
        if self.ended {
            format!("Score : {} Game Ended", self.score)
        } else {
            format!("Score : {}", self.score)
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_score_text() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.score_text(), "Score : 0");

        metrics.on_point(4);
        assert_eq!(metrics.score_text(), "Score : 4");

        metrics.on_game_over(4);
        assert_eq!(metrics.score_text(), "Score : 4 Game Ended");

        metrics.on_game_start();
        assert_eq!(metrics.score_text(), "Score : 0");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_freezes_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(42);
        metrics.on_game_over(1);
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::from_secs(42));
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
