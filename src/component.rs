//! Component trait - Interface for UI components
//!
//! A component turns terminal events into Actions, applies Actions to its
//! own state, and renders itself. Components never mutate each other
//! directly; the root App routes Actions between them.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` - map input to an Action
/// 2. `update` - apply an Action, optionally returning a follow-up Action
/// 3. `draw` - render current state
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key press to an Action. Should not change state.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action. A returned Action is processed right after this one.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`. Pure rendering, no state changes.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
