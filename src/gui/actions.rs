// A simple ui action queue so the panels can render against the controller
// without holding a mutable borrow of it.
#[derive(Debug, Clone)]
pub enum UiAction {
    // Wizard transitions
    Advance,
    Back,
    Reset,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
