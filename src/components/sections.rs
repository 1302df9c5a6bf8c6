//! Section renderers for the main screen

use crate::model::portfolio::EducationEntry;
use crate::model::{Catalog, Palette, Profile, ProjectRecord};
use crate::services::badge_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Tags shown on a project card before "+N more"
const CARD_TAG_LIMIT: usize = 3;

/// Lines per entry in the project list (title, category)
pub const PROJECT_ROW_HEIGHT: usize = 2;

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
}

fn tag_span<'a>(tag: &'a str, palette: &Palette) -> Span<'a> {
    let color = badge_color(tag).unwrap_or(palette.text);
    Span::styled(format!("[{}]", tag), Style::default().fg(color))
}

fn contact_lines(profile: &Profile, palette: &Palette) -> Vec<Line<'static>> {
    profile
        .links
        .entries()
        .into_iter()
        .enumerate()
        .map(|(i, (label, target))| {
            let key = (b'a' + i as u8) as char;
            Line::from(vec![
                Span::styled(
                    format!(" {} ", key),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:10}", label), Style::default().fg(palette.text)),
                Span::styled(target, Style::default().fg(palette.muted)),
            ])
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────────────────

pub fn render_hero(frame: &mut Frame, area: Rect, profile: &Profile, palette: &Palette) {
    let owner = &profile.owner;
    let mut lines = vec![Line::from("")];

    if let Some(availability) = &owner.availability {
        lines.push(Line::from(vec![
            Span::styled("  ──── ", Style::default().fg(palette.accent)),
            Span::styled(
                availability.to_uppercase(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", owner.name.to_uppercase()),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", owner.headline.to_uppercase()),
        Style::default()
            .fg(palette.secondary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", owner.tagline),
        Style::default().fg(palette.muted),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(palette.muted)),
        Span::styled(
            " 3 ",
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to explore work", Style::default().fg(palette.muted)),
    ]));
    lines.push(Line::from(""));
    lines.extend(contact_lines(profile, palette));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" About ", palette));
    frame.render_widget(paragraph, area);
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills
// ─────────────────────────────────────────────────────────────────────────────

pub fn render_skills(frame: &mut Frame, area: Rect, profile: &Profile, palette: &Palette) {
    let outer = panel(" Skills & Technologies ", palette);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if profile.skills.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No skills listed",
                Style::default().fg(palette.muted),
            )),
            inner,
        );
        return;
    }

    // Grid of up to three columns, as many rows as needed
    let columns = profile.skills.len().min(3);
    let rows = profile.skills.len().div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, chunk) in profile.skills.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[row]);

        for (cell, group) in cells.iter().zip(chunk) {
            let mut items: Vec<Span> = Vec::new();
            for item in &group.items {
                items.push(tag_span(item, palette));
                items.push(Span::raw(" "));
            }
            let card = Paragraph::new(Line::from(items))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(palette.border))
                        .title(Span::styled(
                            format!(" {} ", group.category),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        )),
                );
            frame.render_widget(card, *cell);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

/// Draw the project list and the highlighted card. Returns the list area.
pub fn render_projects(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    list_state: &mut ListState,
    palette: &Palette,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = catalog
        .all()
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    project.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    project.category.as_str(),
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Selected Works ", palette))
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .bg(palette.accent)
                .fg(palette.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, chunks[0], list_state);

    let card = match list_state.selected().and_then(|i| catalog.get(i)) {
        Some(project) => project_card(project, palette),
        None => Paragraph::new(Span::styled(
            if catalog.is_empty() {
                "No projects"
            } else {
                "Select a project"
            },
            Style::default().fg(palette.muted),
        )),
    };
    frame.render_widget(card.block(panel(" Project ", palette)), chunks[1]);

    chunks[0]
}

fn project_card<'a>(project: &'a ProjectRecord, palette: &Palette) -> Paragraph<'a> {
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

    let (shown, hidden) = project.card_tags(CARD_TAG_LIMIT);
    let mut tags: Vec<Span> = Vec::new();
    for tag in shown {
        tags.push(tag_span(tag, palette));
        tags.push(Span::raw(" "));
    }
    if hidden > 0 {
        tags.push(Span::styled(
            format!("+{} more", hidden),
            Style::default().fg(palette.muted),
        ));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(""));

    if let Some(cover) = project.cover() {
        lines.push(Line::from(vec![
            Span::styled("cover  ", Style::default().fg(palette.muted)),
            Span::styled(cover, Style::default().fg(palette.text)),
            Span::styled(
                format!("  ({} images)", project.images.len()),
                Style::default().fg(palette.muted),
            ),
        ]));
    }
    if !project.repository_link.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("repo   ", Style::default().fg(palette.muted)),
            Span::styled(
                project.repository_link.as_str(),
                Style::default().fg(palette.secondary),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to open the gallery",
        Style::default().fg(palette.muted),
    )));

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

// ─────────────────────────────────────────────────────────────────────────────
// Resume
// ─────────────────────────────────────────────────────────────────────────────

pub fn render_resume(frame: &mut Frame, area: Rect, profile: &Profile, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut timeline = Vec::new();
    for (i, entry) in profile.education.iter().enumerate() {
        if i > 0 {
            timeline.push(Line::from(Span::styled(
                "  │",
                Style::default().fg(palette.border),
            )));
        }
        timeline.extend(education_lines(entry, palette));
    }
    if timeline.is_empty() {
        timeline.push(Line::from(Span::styled(
            "No education entries",
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(
        Paragraph::new(timeline)
            .wrap(Wrap { trim: false })
            .block(panel(" Education ", palette)),
        chunks[0],
    );

    let mut card = vec![
        Line::from(""),
        Line::from(Span::styled(
            " READY FOR NEW CHALLENGES?",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match &profile.resume {
        Some(resume) => {
            card.push(Line::from(vec![
                Span::styled(
                    " r ",
                    Style::default()
                        .fg(palette.highlight_fg)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" DOWNLOAD FULL CV ", Style::default().fg(palette.text)),
            ]));
            card.push(Line::from(Span::styled(
                format!(" {}", resume),
                Style::default().fg(palette.muted),
            )));
        }
        None => card.push(Line::from(Span::styled(
            " No résumé available",
            Style::default().fg(palette.muted),
        ))),
    }
    card.push(Line::from(""));
    card.extend(contact_lines(profile, palette));

    frame.render_widget(
        Paragraph::new(card)
            .wrap(Wrap { trim: false })
            .block(panel(" Resume ", palette)),
        chunks[1],
    );
}

fn education_lines<'a>(entry: &'a EducationEntry, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled("  ● ", Style::default().fg(palette.accent)),
            Span::styled(
                entry.period.as_str(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  │ ", Style::default().fg(palette.border)),
            Span::styled(
                entry.title.as_str(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  │ ", Style::default().fg(palette.border)),
            Span::styled(entry.school.as_str(), Style::default().fg(palette.text)),
        ]),
        Line::from(vec![
            Span::styled("  │ ", Style::default().fg(palette.border)),
            Span::styled(entry.description.as_str(), Style::default().fg(palette.muted)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crate::services::load_content;
    use ratatui::{backend::TestBackend, Terminal};

    fn render<F>(width: u16, height: u16, f: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(f).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_project_card_shows_tag_overflow() {
        let (catalog, _) = load_content(None).unwrap();
        let palette = Theme::Dark.palette();
        let mut state = ListState::default();
        state.select(Some(0));

        let text = render(140, 30, |frame| {
            let area = frame.area();
            let list = render_projects(frame, area, &catalog, &mut state, &palette);
            assert_eq!(list.x, area.x);
            assert!(list.width < area.width / 2);
        });
        assert!(text.contains("DrConnect"));
        assert!(text.contains("+2 more"));
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let palette = Theme::Dark.palette();
        let mut state = ListState::default();

        let text = render(100, 20, |frame| {
            let area = frame.area();
            render_projects(frame, area, &catalog, &mut state, &palette);
        });
        assert!(text.contains("No projects"));
    }

    #[test]
    fn test_skills_grid_renders_every_category() {
        let (_, profile) = load_content(None).unwrap();
        let palette = Theme::Light.palette();

        let text = render(140, 30, |frame| {
            render_skills(frame, frame.area(), &profile, &palette)
        });
        for group in &profile.skills {
            assert!(text.contains(group.category.as_str()), "missing {}", group.category);
        }
    }

    #[test]
    fn test_resume_without_document() {
        let profile = Profile::default();
        let palette = Theme::Dark.palette();

        let text = render(100, 20, |frame| {
            render_resume(frame, frame.area(), &profile, &palette)
        });
        assert!(text.contains("No résumé available"));
        assert!(text.contains("No education entries"));
    }
}
