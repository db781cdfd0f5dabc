use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Canvas, Paint, Surface};
use crate::metrics::GameMetrics;

/// Draws the mirrored canvas and the score line into the terminal
pub struct Renderer {
    /// Canvas units covered by one terminal cell
    scale: u32,
}

impl Renderer {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn render(&self, frame: &mut Frame, board: &Canvas, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(metrics), chunks[0]);
        frame.render_widget(self.render_board(board), chunks[1]);
        frame.render_widget(self.render_controls(metrics.ended), chunks[2]);
    }

    /// Paint under the middle of each terminal cell, row by row
    pub fn sample(&self, board: &Canvas) -> Vec<Vec<Option<Paint>>> {
        let (width, height) = board.size();
        let half = self.scale / 2;

        (0..height / self.scale)
            .map(|row| {
                (0..width / self.scale)
                    .map(|col| board.pixel(col * self.scale + half, row * self.scale + half))
                    .collect()
            })
            .collect()
    }

    fn render_board(&self, board: &Canvas) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .sample(board)
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(Self::cell_span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(paint: Option<Paint>) -> Span<'static> {
        match paint {
            Some(Paint::Body) => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(Paint::Food) => Span::styled(
                "● ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(Paint::Background) => Span::styled(". ", Style::default().fg(Color::DarkGray)),
            None => Span::raw("  "),
        }
    }

    fn render_stats(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let score_style = if metrics.ended {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let text = vec![Line::from(vec![
            Span::styled(metrics.score_text(), score_style),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, ended: bool) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        if ended {
            spans.push(Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" Play Again | "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(5)
    }
}
