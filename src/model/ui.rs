//! UI Model
//!
//! Focus, toast and quit state for the dialog. Nothing here affects which
//! folders are chosen.

use std::time::Instant;

use super::selection::Level;
use crate::submit::{Notice, Notifier};

/// Field of the form that receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusField {
    FileName,
    Dropdown(Level),
    Text(Level),
    Create,
}

impl FocusField {
    /// Tab order of the form
    pub const ORDER: [FocusField; 8] = [
        FocusField::FileName,
        FocusField::Dropdown(Level::First),
        FocusField::Text(Level::First),
        FocusField::Dropdown(Level::Second),
        FocusField::Text(Level::Second),
        FocusField::Dropdown(Level::Third),
        FocusField::Text(Level::Third),
        FocusField::Create,
    ];

    pub fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct UiModel {
    pub focus: FocusField,

    /// Toast notice (notice, shown at)
    pub toast: Option<(Notice, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            focus: FocusField::FileName,
            toast: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, notice: Notice) {
        self.toast = Some((notice, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, shown_at)) = &self.toast {
            crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Notices raised during a submission become toasts
impl Notifier for UiModel {
    fn notify(&mut self, notice: Notice) {
        self.show_toast(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new();
        assert_eq!(model.focus, FocusField::FileName);
        assert!(model.toast.is_none());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new();
        model.show_toast(Notice::success("Saved"));
        assert!(model.toast.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast.is_none());
    }

    #[test]
    fn test_notify_replaces_previous_toast() {
        let mut model = UiModel::new();
        model.notify(Notice::error("first"));
        model.notify(Notice::success("second"));
        let (notice, _) = model.toast.as_ref().unwrap();
        assert_eq!(notice.message, "second");
    }

    #[test]
    fn test_focus_order_positions() {
        assert_eq!(FocusField::FileName.position(), 0);
        assert_eq!(FocusField::Text(Level::Second).position(), 4);
        assert_eq!(FocusField::Create.position(), FocusField::ORDER.len() - 1);
    }
}
