//! Home component - Main application screen
//!
//! Displays the section tabs, the active section and the status/help bars.
//! Owns section and project-list navigation state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::components::sections::{self, PROJECT_ROW_HEIGHT};
use crate::model::{Catalog, Palette, Profile, Section, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph, Tabs},
    Frame,
};

/// Home component for the main application view
pub struct HomeComponent {
    /// Current section
    pub active_section: Section,

    /// Project list selection state
    pub list_state: ListState,

    /// Project ids in display order
    project_ids: Vec<String>,

    /// Number of contact links available for a/b/c shortcuts
    contact_count: usize,

    /// Project list area from the last draw, for click hit-testing
    list_area: Option<Rect>,

    pub palette: Palette,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            list_state: ListState::default(),
            project_ids: Vec::new(),
            contact_count: 0,
            list_area: None,
            palette: Theme::default().palette(),
        }
    }

    /// Take the project order from the catalog and highlight the first one
    pub fn set_content(&mut self, catalog: &Catalog, profile: &Profile) {
        self.project_ids = catalog.all().iter().map(|p| p.id.clone()).collect();
        self.contact_count = profile.links.entries().len();
        self.select_first();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_section(&mut self) {
        self.active_section = self.active_section.next();
    }

    pub fn previous_section(&mut self) {
        self.active_section = self.active_section.previous();
    }

    pub fn go_to_section(&mut self, section: Section) {
        self.active_section = section;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Project List
    // ─────────────────────────────────────────────────────────────────────────

    /// Id of the highlighted project
    pub fn selected_project_id(&self) -> Option<&str> {
        let index = self.list_state.selected()?;
        self.project_ids.get(index).map(String::as_str)
    }

    /// Highlight a project by id, e.g. after the gallery was opened for it
    pub fn select_project_id(&mut self, id: &str) {
        if let Some(index) = self.project_ids.iter().position(|p| p == id) {
            self.list_state.select(Some(index));
        }
    }

    /// Highlight the next project, wrapping to the first
    pub fn next_project(&mut self) {
        if self.project_ids.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % self.project_ids.len(),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Highlight the previous project, wrapping to the last
    pub fn previous_project(&mut self) {
        if self.project_ids.is_empty() {
            return;
        }
        let len = self.project_ids.len();
        let prev = match self.list_state.selected() {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if self.project_ids.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.project_ids.is_empty() {
            self.list_state.select(Some(self.project_ids.len() - 1));
        }
    }

    /// Project under a screen cell of the last drawn list
    fn project_at(&self, column: u16, row: u16) -> Option<&str> {
        let inner = self.list_area?.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + (row - inner.y) as usize / PROJECT_ROW_HEIGHT;
        self.project_ids.get(index).map(String::as_str)
    }

    fn contact_action(&self, c: char) -> Option<Action> {
        let index = (c as u8 - b'a') as usize;
        (index < self.contact_count).then_some(Action::OpenContact(index))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Section-specific keys first
        let section_action = match (self.active_section, key.code) {
            (Section::Projects, KeyCode::Char('j') | KeyCode::Down) => Some(Action::NextProject),
            (Section::Projects, KeyCode::Char('k') | KeyCode::Up) => Some(Action::PrevProject),
            (Section::Projects, KeyCode::Char('g') | KeyCode::Home) => Some(Action::FirstProject),
            (Section::Projects, KeyCode::Char('G') | KeyCode::End) => Some(Action::LastProject),
            (Section::Projects, KeyCode::Enter) => self
                .selected_project_id()
                .map(|id| Action::SelectProject(id.to_string())),
            (Section::Projects, KeyCode::Char('o')) => Some(Action::OpenRepository),
            (Section::Home | Section::Resume, KeyCode::Char(c @ 'a'..='c')) => {
                self.contact_action(c)
            }
            _ => None,
        };
        if section_action.is_some() {
            return Ok(section_action);
        }

        let action = match key.code {
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::BackTab => Some(Action::PrevSection),
            KeyCode::Char('1') => Some(Action::GoToSection(Section::Home)),
            KeyCode::Char('2') => Some(Action::GoToSection(Section::Skills)),
            KeyCode::Char('3') => Some(Action::GoToSection(Section::Projects)),
            KeyCode::Char('4') => Some(Action::GoToSection(Section::Resume)),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('r') => Some(Action::OpenResume),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.active_section != Section::Projects {
            return Ok(None);
        }
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextProject),
            MouseEventKind::ScrollUp => Some(Action::PrevProject),
            MouseEventKind::Down(MouseButton::Left) => self
                .project_at(mouse.column, mouse.row)
                .map(|id| Action::SelectProject(id.to_string())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub catalog: &'a Catalog,
    pub profile: &'a Profile,
    pub theme: Theme,
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let palette = home.palette;
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let layout = calculate_main_layout(area);

    render_tabs(frame, layout.tabs, home, ctx);

    home.list_area = None;
    match home.active_section {
        Section::Home => sections::render_hero(frame, layout.body, ctx.profile, &palette),
        Section::Skills => sections::render_skills(frame, layout.body, ctx.profile, &palette),
        Section::Projects => {
            home.list_area = Some(sections::render_projects(
                frame,
                layout.body,
                ctx.catalog,
                &mut home.list_state,
                &palette,
            ));
        }
        Section::Resume => sections::render_resume(frame, layout.body, ctx.profile, &palette),
    }

    render_status_bar(frame, layout.status, ctx, &palette);
    render_help_bar(frame, layout.help, home.active_section, &palette);

    Ok(())
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &HomeRenderContext) {
    let palette = home.palette;
    let all_sections = Section::all();
    let titles: Vec<String> = all_sections
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.name()))
        .collect();
    let selected = all_sections
        .iter()
        .position(|s| *s == home.active_section)
        .unwrap_or(0);

    let brand = format!(" {} ", ctx.profile.owner.name.to_uppercase());
    let theme_hint = match ctx.theme {
        Theme::Dark => " ☀ t ",
        Theme::Light => " ☾ t ",
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(
                    brand,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_top(
                    Line::from(Span::styled(theme_hint, Style::default().fg(palette.muted)))
                        .right_aligned(),
                ),
        )
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext, palette: &Palette) {
    let mut spans = vec![Span::styled(
        format!(" {} projects ", ctx.catalog.len()),
        Style::default()
            .fg(palette.highlight_fg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(palette.secondary),
        ));
    }

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(ratatui::style::Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, section: Section, palette: &Palette) {
    let key = |k: &str| {
        Span::styled(
            format!(" {} ", k),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![
        key("q"),
        Span::raw("Quit "),
        key("Tab"),
        Span::raw("Section "),
    ];
    match section {
        Section::Projects => {
            spans.extend([
                key("j/k"),
                Span::raw("Move "),
                key("Enter"),
                Span::raw("Gallery "),
                key("o"),
                Span::raw("Repository "),
            ]);
        }
        Section::Home | Section::Resume => {
            spans.extend([key("a-c"), Span::raw("Contact ")]);
        }
        Section::Skills => {}
    }
    spans.extend([
        key("r"),
        Span::raw("Résumé "),
        key("t"),
        Span::raw("Theme "),
        key("?"),
        Span::raw("Help"),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(paragraph, area);
}
