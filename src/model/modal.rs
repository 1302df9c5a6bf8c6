//! Modal stack for managing overlays
//!
//! Overlays (quit confirmation, help, the project gallery) are kept on a
//! stack; only the top one receives input.

/// A modal overlay drawn on top of the main screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog listing keyboard shortcuts
    Help,
    /// Project lightbox. Its state lives in the gallery controller.
    Gallery,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.contains(modal)
    }

    /// Modals from bottom to top, the order they are drawn in
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }

    /// Remove every occurrence of `modal`, wherever it sits in the stack
    pub fn remove(&mut self, modal: &Modal) {
        self.stack.retain(|m| m != modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Gallery);
        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::Gallery));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_remove_buried_modal() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Gallery);
        stack.push(Modal::QuitConfirm);

        stack.remove(&Modal::Gallery);
        assert!(!stack.contains(&Modal::Gallery));
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));
    }
}
