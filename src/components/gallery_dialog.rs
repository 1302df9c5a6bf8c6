//! Gallery dialog - the project lightbox
//!
//! Renders the gallery snapshot (current image, position strip, project
//! details) and maps input to gallery Actions. All navigation state lives in
//! the `GalleryController`; this component only remembers where it was drawn
//! so clicks can be hit-tested: chevrons browse, position dots jump, and a
//! click outside the popup closes it.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::calculate_gallery_layout;
use crate::model::{GallerySnapshot, Palette, Theme};
use crate::services::badge_color;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Width of the clickable chevron columns at each side of the image panel
const CHEVRON_WIDTH: u16 = 5;

const ACTIVE_DOT: &str = "━━━━ ";
const DOT: &str = "━ ";

/// Where the last frame put things, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitAreas {
    popup: Rect,
    previous: Rect,
    next: Rect,
    strip: Rect,
    total: usize,
    index: usize,
}

pub struct GalleryDialog {
    pub palette: Palette,
    last_areas: Option<HitAreas>,
}

impl Default for GalleryDialog {
    fn default() -> Self {
        Self {
            palette: Theme::default().palette(),
            last_areas: None,
        }
    }
}

impl GalleryDialog {
    pub fn draw_with_snapshot(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        snapshot: &GallerySnapshot,
    ) -> Result<()> {
        let layout = calculate_gallery_layout(area);
        let palette = self.palette;
        let (previous, next) = chevron_zones(layout.image);
        let strip = strip_area(layout.indicator, snapshot.total, snapshot.index);
        self.last_areas = Some(HitAreas {
            popup: layout.popup,
            previous,
            next,
            strip,
            total: snapshot.total,
            index: snapshot.index,
        });

        frame.render_widget(Clear, layout.popup);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(format!(" {} ", snapshot.project.title))
                .title_style(
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(palette.background).fg(palette.text)),
            layout.popup,
        );

        // Image panel. References are opaque, so the panel shows the reference
        // itself and leaves fetching to the system opener.
        let image_height = layout.image.height.saturating_sub(2);
        let padding = (image_height / 2).saturating_sub(1) as usize;
        let mut image_lines = vec![Line::from(""); padding];
        image_lines.push(Line::from(Span::styled(
            "▣",
            Style::default().fg(palette.muted),
        )));
        image_lines.push(Line::from(""));
        image_lines.push(Line::from(Span::styled(
            snapshot.image.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        let image = Paragraph::new(image_lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(format!(" {} ", snapshot.position_label())),
            );
        frame.render_widget(image, layout.image);

        let chevron_style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        let chevron_padding = vec![Line::from(""); padding];
        for (zone, symbol) in [(previous, "◀"), (next, "▶")] {
            let mut lines = chevron_padding.clone();
            lines.push(Line::from(Span::styled(symbol, chevron_style)));
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), zone);
        }

        frame.render_widget(Paragraph::new(Line::from(dot_spans(snapshot, &palette))), strip);
        let hints = Rect {
            y: layout.indicator.y.saturating_add(1),
            height: layout.indicator.height.saturating_sub(1),
            ..layout.indicator
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "←/→ browse · 1-9 jump · o repo · i image · Esc close",
                Style::default().fg(palette.muted),
            ))
            .alignment(Alignment::Center),
            hints,
        );

        frame.render_widget(
            Paragraph::new(detail_lines(snapshot, &palette)).wrap(Wrap { trim: true }),
            layout.details,
        );

        Ok(())
    }

    fn click(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        let Some(areas) = self.last_areas else {
            return Some(Action::CloseGallery);
        };
        if !areas.popup.contains(position) {
            Some(Action::CloseGallery)
        } else if areas.previous.contains(position) {
            Some(Action::ShowPreviousImage)
        } else if areas.next.contains(position) {
            Some(Action::ShowNextImage)
        } else if areas.strip.contains(position) {
            dot_at(column - areas.strip.x, areas.total, areas.index).map(Action::ShowImageAt)
        } else {
            None
        }
    }
}

/// Left and right click zones inside the image panel border
fn chevron_zones(image: Rect) -> (Rect, Rect) {
    let inner = image.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    let width = CHEVRON_WIDTH.min(inner.width / 2);
    let previous = Rect { width, ..inner };
    let next = Rect {
        x: inner.right().saturating_sub(width),
        width,
        ..inner
    };
    (previous, next)
}

fn dot_symbol(i: usize, index: usize) -> &'static str {
    if i == index {
        ACTIVE_DOT
    } else {
        DOT
    }
}

/// The dot strip row, centered on the first row of the indicator
fn strip_area(indicator: Rect, total: usize, index: usize) -> Rect {
    let width = (0..total)
        .map(|i| dot_symbol(i, index).width() as u16)
        .sum::<u16>()
        .min(indicator.width);
    Rect::new(
        indicator.x + (indicator.width - width) / 2,
        indicator.y,
        width,
        indicator.height.min(1),
    )
}

/// Which dot covers `column`, counted from the left edge of the strip
fn dot_at(column: u16, total: usize, index: usize) -> Option<usize> {
    let mut start = 0u16;
    for i in 0..total {
        let end = start + dot_symbol(i, index).width() as u16;
        if column < end {
            return Some(i);
        }
        start = end;
    }
    None
}

/// Dot strip with the current image highlighted
fn dot_spans(snapshot: &GallerySnapshot, palette: &Palette) -> Vec<Span<'static>> {
    (0..snapshot.total)
        .map(|i| {
            let style = if i == snapshot.index {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            Span::styled(dot_symbol(i, snapshot.index), style)
        })
        .collect()
}

fn detail_lines<'a>(snapshot: &GallerySnapshot<'a>, palette: &Palette) -> Vec<Line<'a>> {
    let project = snapshot.project;
    let mut lines = vec![
        Line::from(Span::styled(
            project.category.to_uppercase(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.title.as_str(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            project.description.as_str(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
    ];

    let mut tags = Vec::new();
    for tag in &project.tech_tags {
        let color = badge_color(tag).unwrap_or(palette.text);
        tags.push(Span::styled(format!("[{}]", tag), Style::default().fg(color)));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(""));

    if !project.repository_link.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(
                "VIEW ON GITHUB → ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                project.repository_link.as_str(),
                Style::default().fg(palette.secondary),
            ),
        ]));
    }

    lines
}

impl Component for GalleryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Char(' ') => {
                Some(Action::ShowNextImage)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                Some(Action::ShowPreviousImage)
            }
            KeyCode::Char(c @ '1'..='9') => {
                c.to_digit(10).map(|d| Action::ShowImageAt(d as usize - 1))
            }
            KeyCode::Char('o') => Some(Action::OpenRepository),
            KeyCode::Char('i') => Some(Action::OpenCurrentImage),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => Some(Action::CloseGallery),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ShowNextImage),
            MouseEventKind::ScrollUp => Some(Action::ShowPreviousImage),
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the gallery snapshot, see draw_with_snapshot
        Ok(())
    }
}
