//! Pure Dialog Model - Elm Architecture
//!
//! This module defines the pure, cloneable state of one "create note" dialog.
//! The model is organized into focused parts:
//!
//! - **Selection**: the chosen levels and file name (immutable value)
//! - **LevelInput**: dropdown + free-text widget state per level
//! - **UiModel**: focus, toasts, quit flag
//!
//! Key principles:
//! - Clone + Debug: can snapshot and compare state
//! - No services: all vault I/O lives in the app
//! - Edits hand back an `OptionsQuery` when a level needs fresh choices;
//!   the caller runs it and feeds the result to `apply_options`

pub mod form;
pub mod selection;
pub mod ui;

use log::debug;

pub use form::{InputSource, LevelInput};
pub use selection::{Level, LevelPhase, Selection};
pub use ui::{FocusField, UiModel};

use crate::logic::navigation::{next_enabled, next_selection, prev_enabled, prev_selection};

/// Whether the dialog is still accepting edits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogPhase {
    Open,
    Submitted,
    Cancelled,
}

/// Full dialog state machine as seen from outside
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    Empty,
    FirstChosen,
    SecondChosen,
    ThirdChosen,
    Submitted,
    Cancelled,
}

/// Request for the choices of one level under a specific parent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionsQuery {
    pub level: Level,
    pub parent: Vec<String>,
}

/// Root dialog model
#[derive(Clone, Debug)]
pub struct Model {
    pub selection: Selection,
    pub levels: [LevelInput; 3],
    pub phase: DialogPhase,
    pub ui: UiModel,
}

impl Model {
    /// Fresh dialog with nothing chosen
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
            levels: Default::default(),
            phase: DialogPhase::Open,
            ui: UiModel::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    pub fn state(&self) -> DialogState {
        match self.phase {
            DialogPhase::Submitted => DialogState::Submitted,
            DialogPhase::Cancelled => DialogState::Cancelled,
            DialogPhase::Open => match self.selection.phase() {
                LevelPhase::Empty => DialogState::Empty,
                LevelPhase::FirstChosen => DialogState::FirstChosen,
                LevelPhase::SecondChosen => DialogState::SecondChosen,
                LevelPhase::ThirdChosen => DialogState::ThirdChosen,
            },
        }
    }

    pub fn level_input(&self, level: Level) -> &LevelInput {
        &self.levels[level.index()]
    }

    /// Whether the free-text field of `level` accepts input
    pub fn level_available(&self, level: Level) -> bool {
        self.is_open() && self.selection.is_available(level)
    }

    /// Whether the dropdown of `level` can be used
    pub fn dropdown_enabled(&self, level: Level) -> bool {
        self.level_available(level) && self.level_input(level).dropdown_enabled()
    }

    // ============================================
    // FILE NAME
    // ============================================

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        if self.is_open() {
            self.selection = self.selection.with_file_name(file_name);
        }
    }

    pub fn push_file_name_char(&mut self, c: char) {
        let mut name = self.selection.file_name().to_string();
        name.push(c);
        self.set_file_name(name);
    }

    pub fn pop_file_name_char(&mut self) {
        let mut name = self.selection.file_name().to_string();
        name.pop();
        self.set_file_name(name);
    }

    // ============================================
    // LEVELS
    // ============================================

    /// Query for the choices of `level`, or `None` while it is disabled
    pub fn options_query(&self, level: Level) -> Option<OptionsQuery> {
        if !self.is_open() {
            return None;
        }
        let parent = self.selection.parent_segments(level)?;
        Some(OptionsQuery { level, parent })
    }

    /// Store the result of `query` unless it went stale in the meantime
    ///
    /// Returns whether the options were applied.
    pub fn apply_options(&mut self, query: &OptionsQuery, options: Vec<String>) -> bool {
        if !self.is_open() {
            debug!("Dropping options for {:?}: dialog closed", query.level);
            return false;
        }
        if self.selection.parent_segments(query.level).as_ref() != Some(&query.parent) {
            debug!(
                "Dropping stale options for {:?} under {:?}",
                query.level, query.parent
            );
            return false;
        }

        self.levels[query.level.index()].set_options(options);
        true
    }

    /// Choose dropdown entry `idx` of `level`
    pub fn choose_option(&mut self, level: Level, idx: usize) -> Option<OptionsQuery> {
        if !self.dropdown_enabled(level) {
            return None;
        }
        let value = self.levels[level.index()].choose(idx)?;
        self.set_level_value(level, Some(value))
    }

    /// Move the dropdown choice of `level` one entry down (or up)
    pub fn cycle_option(&mut self, level: Level, forward: bool) -> Option<OptionsQuery> {
        let input = self.level_input(level);
        let len = input.options.len();
        let target = if forward {
            next_selection(input.chosen, len)
        } else {
            prev_selection(input.chosen, len)
        };
        self.choose_option(level, target?)
    }

    pub fn type_level_char(&mut self, level: Level, c: char) -> Option<OptionsQuery> {
        if !self.level_available(level) {
            return None;
        }
        let value = self.levels[level.index()].push_char(c);
        self.set_level_value(level, value)
    }

    pub fn erase_level_char(&mut self, level: Level) -> Option<OptionsQuery> {
        if !self.level_available(level) {
            return None;
        }
        let value = self.levels[level.index()].pop_char();
        self.set_level_value(level, value)
    }

    /// Unset `level` and clear both halves of its input
    pub fn clear_level(&mut self, level: Level) -> Option<OptionsQuery> {
        if !self.is_open() {
            return None;
        }
        let input = &mut self.levels[level.index()];
        input.chosen = None;
        input.text.clear();
        input.source = None;
        self.set_level_value(level, None)
    }

    /// Apply a new value to `level`, cascading resets below it
    ///
    /// Returns the query that refreshes the next level when the value changed.
    fn set_level_value(&mut self, level: Level, value: Option<String>) -> Option<OptionsQuery> {
        let previous = self.selection.level(level).map(String::from);
        self.selection = self.selection.with_level(level, value);
        if self.selection.level(level) == previous.as_deref() {
            return None;
        }

        for deeper in level.deeper() {
            self.levels[deeper.index()].reset();
        }
        debug!("Level {:?} now {:?}", level, self.selection.level(level));

        level.child().and_then(|child| self.options_query(child))
    }

    // ============================================
    // FOCUS
    // ============================================

    fn focus_enabled(&self, field: FocusField) -> bool {
        match field {
            FocusField::FileName | FocusField::Create => true,
            FocusField::Dropdown(level) => self.dropdown_enabled(level),
            FocusField::Text(level) => self.level_available(level),
        }
    }

    pub fn focus_next(&mut self) {
        let order = FocusField::ORDER;
        let idx = next_enabled(self.ui.focus.position(), order.len(), |i| {
            self.focus_enabled(order[i])
        });
        self.ui.focus = order[idx];
    }

    pub fn focus_prev(&mut self) {
        let order = FocusField::ORDER;
        let idx = prev_enabled(self.ui.focus.position(), order.len(), |i| {
            self.focus_enabled(order[i])
        });
        self.ui.focus = order[idx];
    }

    /// Move focus off a field that just became unavailable
    pub fn fix_focus(&mut self) {
        if !self.focus_enabled(self.ui.focus) {
            self.focus_prev();
        }
    }

    // ============================================
    // LIFECYCLE
    // ============================================

    pub fn mark_submitted(&mut self) {
        if self.is_open() {
            self.phase = DialogPhase::Submitted;
        }
    }

    pub fn cancel(&mut self) {
        if self.is_open() {
            self.phase = DialogPhase::Cancelled;
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
