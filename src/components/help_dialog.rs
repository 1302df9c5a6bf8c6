//! Help dialog component
//!
//! Lists every keyboard shortcut, grouped by where it applies.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Palette, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
pub struct HelpDialog {
    pub scroll_offset: usize,
    pub palette: Palette,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            palette: Theme::default().palette(),
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(&self.palette);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .style(Style::default().bg(self.palette.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(
                        Style::default()
                            .fg(self.palette.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(self.palette.accent)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let section_style = Style::default()
        .fg(palette.secondary)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {} ", title), section_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            muted,
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", key), key_style),
            Span::styled(description.to_string(), text_style),
        ]));
    };

    add_section(&mut lines, "Everywhere");
    add_shortcut(&mut lines, "Tab", "Next section");
    add_shortcut(&mut lines, "Shift+Tab", "Previous section");
    add_shortcut(&mut lines, "1-4", "Home / Skills / Projects / Resume");
    add_shortcut(&mut lines, "t", "Toggle dark/light theme");
    add_shortcut(&mut lines, "r", "Open résumé");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");

    add_section(&mut lines, "Projects");
    add_shortcut(&mut lines, "j / ↓", "Next project");
    add_shortcut(&mut lines, "k / ↑", "Previous project");
    add_shortcut(&mut lines, "g / G", "First / last project");
    add_shortcut(&mut lines, "Enter", "Open gallery");
    add_shortcut(&mut lines, "o", "Open repository");
    add_shortcut(&mut lines, "Click", "Open gallery for that project");

    add_section(&mut lines, "Home & Resume");
    add_shortcut(&mut lines, "a / b / c", "Open contact link");

    add_section(&mut lines, "Gallery");
    add_shortcut(&mut lines, "l / → / Space", "Next image (wraps)");
    add_shortcut(&mut lines, "h / ←", "Previous image (wraps)");
    add_shortcut(&mut lines, "1-9", "Show image by number");
    add_shortcut(&mut lines, "o", "Open repository");
    add_shortcut(&mut lines, "i", "Open current image");
    add_shortcut(&mut lines, "Esc / q / x", "Close gallery");
    add_shortcut(&mut lines, "Mouse wheel", "Previous / next image");
    add_shortcut(&mut lines, "Click ◀ / ▶", "Previous / next image");
    add_shortcut(&mut lines, "Click a dot", "Show that image");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        muted,
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            let action = dialog
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_scroll_never_underflows() {
        let mut dialog = HelpDialog::default();
        dialog
            .handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 0);

        dialog
            .handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 10);
    }
}
