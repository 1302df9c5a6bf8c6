//! Splash screen component
//!
//! Shows the logo with the owner's name and headline, then hands over to the
//! main screen after a short delay or on any key.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const LOGO: [&str; 6] = [
    " ███████╗ ██████╗ ██╗     ██╗ ██████╗ ",
    " ██╔════╝██╔═══██╗██║     ██║██╔═══██╗",
    " █████╗  ██║   ██║██║     ██║██║   ██║",
    " ██╔══╝  ██║   ██║██║     ██║██║   ██║",
    " ██║     ╚██████╔╝███████╗██║╚██████╔╝",
    " ╚═╝      ╚═════╝ ╚══════╝╚═╝ ╚═════╝ ",
];

pub struct SplashComponent {
    start_time: Option<Instant>,
    duration: Duration,
    title: String,
    subtitle: String,
    pub palette: Palette,
}

impl SplashComponent {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
            title: title.into(),
            subtitle: subtitle.into(),
            palette: Theme::default().palette(),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

/// Rect of `width` columns centered horizontally on row `y`
fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, y, width, 1)
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let background = Style::default().bg(self.palette.background);
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(background), area);

        let logo_height = LOGO.len() as u16;
        let logo_width = LOGO
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 4)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = LOGO
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    *line,
                    background.fg(self.palette.accent),
                ))
            })
            .collect();
        let logo_rect = Rect::new(
            area.x + area.width.saturating_sub(logo_width) / 2,
            chunks[1].y,
            logo_width.min(area.width),
            chunks[1].height,
        );
        frame.render_widget(Paragraph::new(logo), logo_rect);

        let title = Paragraph::new(Line::from(Span::styled(
            self.title.as_str(),
            background
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(
            title,
            centered_row(area, chunks[3].y, self.title.width() as u16),
        );

        let subtitle = Paragraph::new(Line::from(Span::styled(
            self.subtitle.as_str(),
            background.fg(self.palette.muted),
        )));
        frame.render_widget(
            subtitle,
            centered_row(area, chunks[4].y, self.subtitle.width() as u16),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new("Ada", "Engineer");
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_any_key_skips() {
        let mut splash = SplashComponent::new("Ada", "Engineer");
        let action = splash
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SplashComplete));

        let action = splash
            .handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_centered_row_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(centered_row(area, 2, 4), Rect::new(3, 2, 4, 1));
        assert_eq!(centered_row(area, 2, 40), Rect::new(0, 2, 10, 1));
    }
}
