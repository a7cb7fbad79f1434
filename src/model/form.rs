//! Level input widgets
//!
//! Each folder level is a dropdown of existing folders paired with a free-text
//! field for a new folder name. Whichever of the two was edited last decides
//! the level's value.

/// Which half of a level input was edited most recently
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Dropdown,
    Text,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelInput {
    /// Existing folders offered in the dropdown
    pub options: Vec<String>,
    /// Index into `options` of the chosen folder
    pub chosen: Option<usize>,
    /// Free-text folder name
    pub text: String,
    pub source: Option<InputSource>,
    /// Whether `options` were computed for the current parent
    pub loaded: bool,
}

impl LevelInput {
    pub fn dropdown_enabled(&self) -> bool {
        self.loaded && !self.options.is_empty()
    }

    pub fn chosen_option(&self) -> Option<&str> {
        self.chosen
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }

    /// Value this input currently contributes to the selection
    pub fn value(&self) -> Option<String> {
        match self.source {
            Some(InputSource::Dropdown) => self.chosen_option().map(String::from),
            Some(InputSource::Text) if !self.text.is_empty() => Some(self.text.clone()),
            _ => None,
        }
    }

    /// Choose a dropdown entry, clearing the typed name
    pub fn choose(&mut self, idx: usize) -> Option<String> {
        if idx >= self.options.len() {
            return None;
        }
        self.chosen = Some(idx);
        self.text.clear();
        self.source = Some(InputSource::Dropdown);
        self.value()
    }

    /// Type into the free-text field, clearing the dropdown choice
    pub fn push_char(&mut self, c: char) -> Option<String> {
        self.text.push(c);
        self.chosen = None;
        self.source = Some(InputSource::Text);
        self.value()
    }

    pub fn pop_char(&mut self) -> Option<String> {
        self.text.pop();
        self.chosen = None;
        self.source = Some(InputSource::Text);
        self.value()
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        if self.source == Some(InputSource::Dropdown) {
            // A fresh list invalidates indices into the old one
            self.chosen = None;
            self.source = None;
        }
        self.options = options;
        self.loaded = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
