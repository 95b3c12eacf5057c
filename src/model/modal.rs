//! Modal stack for managing overlays
//!
//! Overlay state lives in one enum-based stack instead of a boolean flag per
//! dialog.

/// A modal overlay displayed on top of the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        assert!(stack.top().is_some());

        stack.push(Modal::Help);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::Help));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_top() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));
        assert!(!stack.is_empty());

        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));
    }
}
