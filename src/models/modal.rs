//! Modal stack discipline for the dashboard view

/// Action modals that can be layered on top of each other, e.g. the PIN-entry
/// step on top of the send-money form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddMoney,
    SendMoney,
    EnterPin,
    SetPin,
    EditProfile,
    DownloadHistory,
}

/// Currently open dialogs. The settings panel is logically orthogonal to the
/// action stack: closing one never affects the other. `close_all` is the only
/// transition clearing both in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    settings_open: bool,
    stack: Vec<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an action modal on top of the current stack
    pub fn open(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Close the topmost action modal, returning it
    pub fn close_top(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    /// Clear the settings panel and the whole action stack
    pub fn close_all(&mut self) {
        self.settings_open = false;
        self.stack.clear();
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn stack(&self) -> &[Modal] {
        &self.stack
    }

    pub fn is_closed(&self) -> bool {
        !self.settings_open && self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_push_pop_order() {
        let mut state = ModalState::new();
        state.open(Modal::SendMoney);
        state.open(Modal::EnterPin);

        assert_eq!(state.top(), Some(Modal::EnterPin));
        assert_eq!(state.close_top(), Some(Modal::EnterPin));
        // The send-money form underneath survives the pop
        assert_eq!(state.top(), Some(Modal::SendMoney));
    }

    #[test]
    fn test_settings_is_orthogonal_to_stack() {
        let mut state = ModalState::new();
        state.toggle_settings();
        state.open(Modal::SetPin);

        state.toggle_settings();
        assert!(!state.settings_open());
        assert_eq!(state.top(), Some(Modal::SetPin));

        state.toggle_settings();
        state.close_top();
        assert!(state.settings_open());
    }

    #[test]
    fn test_close_all_clears_both() {
        let mut state = ModalState::new();
        state.toggle_settings();
        state.open(Modal::SendMoney);
        state.open(Modal::EnterPin);

        state.close_all();
        assert!(state.is_closed());
    }
}
