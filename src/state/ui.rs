//! Presentation chrome state: input tabs, confirmations, and toasts.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Input panel tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputTab {
    #[default]
    Manual,
    Ai,
}

/// Destructive list actions waiting on an explicit user confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
    /// Carries the number of entries that would be removed.
    DeleteSelected(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient status message shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub input_tab: InputTab,
    pub ai_loading: bool,
    pub pending_confirm: Option<ConfirmAction>,
    pub toasts: Vec<Toast>,
}

impl UiState {
    /// Queue a toast; ids keep keyed rendering stable when several stack.
    pub fn push_toast(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.toasts.push(Toast {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
        });
    }

    pub fn dismiss_toast(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
