//! Gallery controller - the lightbox state machine
//!
//! Tracks which project's screenshots are being viewed and at which position.
//! `next`/`previous` wrap around the image sequence; `jump_to` never does.
//! Every failed operation leaves the state untouched.

use super::catalog::ProjectRecord;
use thiserror::Error;

/// Errors returned by gallery operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("project '{id}' has no images to show")]
    InvalidProject { id: String },

    #[error("no project is open in the gallery")]
    NotOpen,

    #[error("image index {index} out of range (project has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Current gallery state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryState {
    #[default]
    Closed,
    Open {
        project: ProjectRecord,
        index: usize,
    },
}

/// What the view needs to draw the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySnapshot<'a> {
    pub project: &'a ProjectRecord,
    pub image: &'a str,
    /// Zero-based index of the current image
    pub index: usize,
    pub total: usize,
}

impl GallerySnapshot<'_> {
    /// Human readable position, e.g. "image 2 of 4"
    pub fn position_label(&self) -> String {
        format!("image {} of {}", self.index + 1, self.total)
    }
}

#[derive(Debug, Default)]
pub struct GalleryController {
    state: GalleryState,
}

impl GalleryController {
    pub fn new() -> Self {
        Self {
            state: GalleryState::Closed,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, GalleryState::Open { .. })
    }

    /// Open a project at its first image, replacing whatever was open
    pub fn open(&mut self, project: &ProjectRecord) -> Result<(), GalleryError> {
        if project.images.is_empty() {
            return Err(GalleryError::InvalidProject {
                id: project.id.clone(),
            });
        }
        tracing::debug!(project = %project.id, images = project.images.len(), "gallery opened");
        self.state = GalleryState::Open {
            project: project.clone(),
            index: 0,
        };
        Ok(())
    }

    /// Close the gallery. Closing an already closed gallery is a no-op.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("gallery closed");
        }
        self.state = GalleryState::Closed;
    }

    pub fn next(&mut self) -> Result<usize, GalleryError> {
        let (project, index) = self.open_mut()?;
        let len = project.images.len();
        *index = (*index + 1) % len;
        Ok(*index)
    }

    pub fn previous(&mut self) -> Result<usize, GalleryError> {
        let (project, index) = self.open_mut()?;
        let len = project.images.len();
        *index = (*index + len - 1) % len;
        Ok(*index)
    }

    /// Show the image at `target` directly. Out of range requests are rejected.
    pub fn jump_to(&mut self, target: usize) -> Result<usize, GalleryError> {
        let (project, index) = self.open_mut()?;
        let len = project.images.len();
        if target >= len {
            return Err(GalleryError::IndexOutOfRange { index: target, len });
        }
        *index = target;
        Ok(*index)
    }

    /// Snapshot for rendering, `None` while closed
    pub fn snapshot(&self) -> Option<GallerySnapshot<'_>> {
        match &self.state {
            GalleryState::Closed => None,
            GalleryState::Open { project, index } => Some(GallerySnapshot {
                project,
                image: project.images[*index].as_str(),
                index: *index,
                total: project.images.len(),
            }),
        }
    }

    fn open_mut(&mut self) -> Result<(&ProjectRecord, &mut usize), GalleryError> {
        match &mut self.state {
            GalleryState::Open { project, index } => Ok((project, index)),
            GalleryState::Closed => Err(GalleryError::NotOpen),
        }
    }
}
