//! Model layer - centralized state management
//!
//! - `Catalog` - the immutable project list
//! - `GalleryController` - lightbox state machine
//! - `Profile` - hero, skills, education and contact content
//! - `ModalStack` - overlay management

pub mod catalog;
pub mod gallery;
pub mod modal;
pub mod portfolio;
pub mod ui;

pub use catalog::{Catalog, ProjectRecord};
pub use gallery::{GalleryController, GalleryError, GallerySnapshot};
pub use modal::{Modal, ModalStack};
pub use portfolio::Profile;
pub use ui::{AppMode, Palette, Section, Theme};
