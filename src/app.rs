//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the catalog, the gallery controller and the modal stack, and keeps
//! the `Modal::Gallery` overlay in step with whether the gallery is open.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, GalleryDialog, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog,
    SplashComponent,
};
use crate::config::Config;
use crate::model::{
    AppMode, Catalog, GalleryController, GalleryError, Modal, ModalStack, Profile, Theme,
};
use crate::services::{open_target, LinkOpener};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Showcased projects, fixed for the session
    pub catalog: Catalog,

    /// Hero, skills, education and contact content
    pub profile: Profile,

    /// Lightbox state machine
    pub gallery: GalleryController,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Active color theme
    pub theme: Theme,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Directory site-relative references resolve against
    asset_root: Option<PathBuf>,

    /// Hands links and files to the outside world
    opener: Box<dyn LinkOpener>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub gallery_dialog: GalleryDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(
        config: &Config,
        catalog: Catalog,
        profile: Profile,
        opener: Box<dyn LinkOpener>,
    ) -> App {
        let mut home = HomeComponent::new();
        home.set_content(&catalog, &profile);

        let splash = SplashComponent::new(
            profile.owner.name.clone(),
            profile.owner.headline.clone(),
        );

        let mut app = App {
            mode: if config.show_splash {
                AppMode::Splash
            } else {
                AppMode::Running
            },
            catalog,
            profile,
            gallery: GalleryController::new(),
            modals: ModalStack::new(),
            theme: config.theme,
            should_quit: false,
            error: None,
            status_message: None,
            asset_root: config.asset_root.clone(),
            opener,
            splash,
            home,
            gallery_dialog: GalleryDialog::default(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        };
        app.apply_theme();
        app
    }

    /// Push the active palette into every component
    fn apply_theme(&mut self) {
        let palette = self.theme.palette();
        self.splash.palette = palette;
        self.home.palette = palette;
        self.gallery_dialog.palette = palette;
        self.quit_dialog.palette = palette;
        self.help_dialog.palette = palette;
    }

    /// Log a failed operation and surface it in the status bar
    fn report(&mut self, message: String) {
        tracing::warn!(error = %message, "operation failed");
        self.error = Some(message);
    }

    fn report_gallery(&mut self, result: Result<usize, GalleryError>) {
        match result {
            Ok(index) => tracing::debug!(index, "gallery moved"),
            Err(e) => self.report(e.to_string()),
        }
    }

    /// Open the gallery for a project and raise its overlay
    fn select_project(&mut self, id: &str) {
        let opened = self
            .catalog
            .by_id(id)
            .map_err(anyhow::Error::from)
            .and_then(|project| self.gallery.open(project).map_err(anyhow::Error::from));

        match opened {
            Ok(()) => {
                if !self.modals.contains(&Modal::Gallery) {
                    self.modals.push(Modal::Gallery);
                }
                self.home.select_project_id(id);
            }
            Err(e) => self.report(e.to_string()),
        }
    }

    fn close_gallery(&mut self) {
        self.gallery.close();
        self.modals.remove(&Modal::Gallery);
    }

    /// Repository of the project in the gallery, or of the highlighted one
    fn current_repository(&self) -> Option<String> {
        let project = match self.gallery.snapshot() {
            Some(snapshot) => snapshot.project,
            None => {
                let id = self.home.selected_project_id()?;
                self.catalog.by_id(id).ok()?
            }
        };
        (!project.repository_link.is_empty()).then(|| project.repository_link.clone())
    }

    fn open_external(&mut self, target: &str) {
        match open_target(self.opener.as_ref(), target, self.asset_root.as_deref()) {
            Ok(resolved) => self.status_message = Some(format!("Opened {}", resolved)),
            Err(e) => self.report(format!("{:#}", e)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => match self.modals.top() {
                Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
                Some(Modal::Help) => self.help_dialog.handle_key_event(key),
                Some(Modal::Gallery) => self.gallery_dialog.handle_key_event(key),
                None => self.home.handle_key_event(key),
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => Ok(None),
            AppMode::Running => match self.modals.top() {
                Some(Modal::Gallery) => self.gallery_dialog.handle_mouse_event(mouse),
                Some(_) => Ok(None),
                None => self.home.handle_mouse_event(mouse),
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if !matches!(action, Action::Tick | Action::Resize(..)) {
            tracing::debug!(%action, "update");
            // Messages stay visible until the next user action
            self.status_message = None;
            self.error = None;
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(action);
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }

            // ─────────────────────────────────────────────────────────────────
            // Sections & Project List
            // ─────────────────────────────────────────────────────────────────
            Action::NextSection => self.home.next_section(),
            Action::PrevSection => self.home.previous_section(),
            Action::GoToSection(section) => self.home.go_to_section(section),
            Action::NextProject => self.home.next_project(),
            Action::PrevProject => self.home.previous_project(),
            Action::FirstProject => self.home.select_first(),
            Action::LastProject => self.home.select_last(),

            // ─────────────────────────────────────────────────────────────────
            // Gallery
            // ─────────────────────────────────────────────────────────────────
            Action::SelectProject(id) => self.select_project(&id),
            Action::CloseGallery => self.close_gallery(),
            Action::ShowNextImage => {
                let result = self.gallery.next();
                self.report_gallery(result);
            }
            Action::ShowPreviousImage => {
                let result = self.gallery.previous();
                self.report_gallery(result);
            }
            Action::ShowImageAt(index) => {
                let result = self.gallery.jump_to(index);
                self.report_gallery(result);
            }

            // ─────────────────────────────────────────────────────────────────
            // External Links
            // ─────────────────────────────────────────────────────────────────
            Action::OpenRepository => match self.current_repository() {
                Some(link) => self.open_external(&link),
                None => self.status_message = Some("No repository link".to_string()),
            },
            Action::OpenCurrentImage => {
                match self.gallery.snapshot().map(|s| s.image.to_string()) {
                    Some(image) => self.open_external(&image),
                    None => self.report(GalleryError::NotOpen.to_string()),
                }
            }
            Action::OpenResume => match self.profile.resume.clone() {
                Some(resume) => self.open_external(&resume),
                None => self.status_message = Some("No résumé available".to_string()),
            },
            Action::OpenContact(index) => {
                let entries = self.profile.links.entries();
                match entries.get(index) {
                    Some((_, target)) => self.open_external(target),
                    None => self.status_message = Some("No such contact link".to_string()),
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals & View
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if !self.modals.contains(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                if self.modals.top() != Some(&Modal::Help) {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                if let Some(Modal::Gallery) = self.modals.pop() {
                    self.gallery.close();
                }
            }
            Action::ConfirmModal => match self.modals.top() {
                Some(Modal::QuitConfirm) => self.should_quit = true,
                Some(_) => return Ok(Some(Action::CloseModal)),
                None => {}
            },
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.apply_theme();
                tracing::info!(theme = ?self.theme, "theme toggled");
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = HomeRenderContext {
                    catalog: &self.catalog,
                    profile: &self.profile,
                    theme: self.theme,
                    status_message: self.status_message.as_deref(),
                    error: self.error.as_deref(),
                };
                draw_home_screen(frame, area, &mut self.home, &ctx)?;

                // Overlays bottom to top, so help opened from the gallery sits above it
                let modals: Vec<Modal> = self.modals.iter().cloned().collect();
                for modal in &modals {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Gallery => {
                if let Some(snapshot) = self.gallery.snapshot() {
                    self.gallery_dialog
                        .draw_with_snapshot(frame, area, &snapshot)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::gallery::GalleryState;
    use crate::model::Section;
    use crate::services::load_content;
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, target: &str) -> Result<()> {
            self.opened.borrow_mut().push(target.to_string());
            Ok(())
        }
    }

    fn app_with(opener: RecordingOpener) -> App {
        let (catalog, profile) = load_content(None).unwrap();
        let config = Config {
            show_splash: false,
            asset_root: Some(PathBuf::from("/srv/site")),
            ..Config::default()
        };
        App::new(&config, catalog, profile, Box::new(opener))
    }

    fn app() -> App {
        app_with(RecordingOpener::default())
    }

    /// Apply an action and every follow-up it produces
    fn run(app: &mut App, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
        {
            run(app, action);
        }
    }

    fn gallery_index(app: &App) -> Option<usize> {
        match app.gallery.state() {
            GalleryState::Open { index, .. } => Some(*index),
            GalleryState::Closed => None,
        }
    }

    #[test]
    fn test_starts_running_without_splash() {
        let app = app();
        assert_eq!(app.mode, AppMode::Running);
        assert!(app.modals.is_empty());
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn test_splash_enabled_by_config() {
        let (catalog, profile) = load_content(None).unwrap();
        let mut app = App::new(
            &Config::default(),
            catalog,
            profile,
            Box::new(RecordingOpener::default()),
        );
        assert_eq!(app.mode, AppMode::Splash);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_gallery_wraps_forward_and_back() {
        let mut app = app();
        run(&mut app, Action::SelectProject("drconnect".to_string()));
        assert_eq!(gallery_index(&app), Some(0));
        assert_eq!(app.modals.top(), Some(&Modal::Gallery));

        for expected in [1, 2, 3, 0] {
            run(&mut app, Action::ShowNextImage);
            assert_eq!(gallery_index(&app), Some(expected));
        }

        run(&mut app, Action::ShowPreviousImage);
        assert_eq!(gallery_index(&app), Some(3));
    }

    #[test]
    fn test_unknown_project_leaves_gallery_closed() {
        let mut app = app();
        run(&mut app, Action::SelectProject("missing".to_string()));
        assert!(!app.gallery.is_open());
        assert!(app.modals.is_empty());
        assert_eq!(app.error.as_deref(), Some("project not found: missing"));
    }

    #[test]
    fn test_out_of_range_jump_is_reported() {
        let mut app = app();
        run(&mut app, Action::SelectProject("autopart".to_string()));
        run(&mut app, Action::ShowImageAt(1));
        run(&mut app, Action::ShowImageAt(7));

        assert_eq!(gallery_index(&app), Some(1));
        assert!(app.error.as_deref().unwrap().contains("out of range"));

        // Next action clears the message
        run(&mut app, Action::ShowNextImage);
        assert!(app.error.is_none());
        assert_eq!(gallery_index(&app), Some(0));
    }

    #[test]
    fn test_switching_projects_resets_index() {
        let mut app = app();
        run(&mut app, Action::SelectProject("drconnect".to_string()));
        run(&mut app, Action::ShowImageAt(3));
        run(&mut app, Action::SelectProject("easymanage".to_string()));

        assert_eq!(gallery_index(&app), Some(0));
        let overlays: Vec<&Modal> = app.modals.iter().collect();
        assert_eq!(overlays, vec![&Modal::Gallery]);
        assert_eq!(app.home.selected_project_id(), Some("easymanage"));
    }

    #[test]
    fn test_closing_gallery_from_either_path() {
        let mut app = app();
        run(&mut app, Action::SelectProject("drconnect".to_string()));
        run(&mut app, Action::CloseGallery);
        assert!(!app.gallery.is_open());
        assert!(app.modals.is_empty());

        run(&mut app, Action::SelectProject("drconnect".to_string()));
        run(&mut app, Action::CloseModal);
        assert!(!app.gallery.is_open());
        assert!(app.modals.is_empty());

        run(&mut app, Action::ShowNextImage);
        assert_eq!(app.error.as_deref(), Some("no project is open in the gallery"));
    }

    #[test]
    fn test_keyboard_flow_through_projects() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.home.active_section, Section::Projects);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.gallery.snapshot().unwrap().project.id, "easymanage");

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(gallery_index(&app), Some(1));

        press(&mut app, KeyCode::Esc);
        assert!(!app.gallery.is_open());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_help_over_gallery_keeps_gallery_open() {
        let mut app = app();
        run(&mut app, Action::SelectProject("drconnect".to_string()));
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modals.top(), Some(&Modal::Gallery));
        assert!(app.gallery.is_open());
    }

    #[test]
    fn test_open_links_use_asset_root() {
        let opener = RecordingOpener::default();
        let mut app = app_with(opener.clone());

        run(&mut app, Action::SelectProject("autopart".to_string()));
        run(&mut app, Action::OpenRepository);
        run(&mut app, Action::OpenCurrentImage);
        run(&mut app, Action::OpenResume);
        run(&mut app, Action::OpenContact(0));

        assert_eq!(
            *opener.opened.borrow(),
            vec![
                "https://github.com/Sara200413/AutoPart".to_string(),
                "/srv/site/projects/autopart-1.png".to_string(),
                "/srv/site/cv_sara_echffani.pdf".to_string(),
                "mailto:saraechffani@gmail.com".to_string(),
            ]
        );
        assert_eq!(
            app.status_message.as_deref(),
            Some("Opened mailto:saraechffani@gmail.com")
        );
    }

    #[test]
    fn test_open_image_requires_open_gallery() {
        let opener = RecordingOpener::default();
        let mut app = app_with(opener.clone());
        run(&mut app, Action::OpenCurrentImage);
        assert!(opener.opened.borrow().is_empty());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_theme_toggle_reaches_components() {
        let mut app = app();
        assert_eq!(app.theme, Theme::Dark);

        run(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.home.palette, Theme::Light.palette());
        assert_eq!(app.gallery_dialog.palette, Theme::Light.palette());
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_draw_gallery_overlay() {
        let mut app = app();
        run(&mut app, Action::SelectProject("drconnect".to_string()));
        run(&mut app, Action::ShowPreviousImage);

        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("image 4 of 4"));
    }
}
