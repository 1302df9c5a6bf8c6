//! External service interactions
//!
//! - Portfolio content loading
//! - Opening links and files with the system handler
//! - Technology badge lookup

pub mod content;
pub mod links;
pub mod tech;

pub use content::load_content;
pub use links::{open_target, LinkOpener, SystemOpener};
pub use tech::badge_color;
