//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod gallery_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod sections;
pub mod splash;

pub use gallery_dialog::GalleryDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
