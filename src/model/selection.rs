//! Selection Model
//!
//! The folder levels and file name the user has picked so far. A `Selection`
//! is never mutated: every edit produces a new value, and changing a level
//! drops everything below it.

/// One of the three nested folder levels offered by the dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    First,
    Second,
    Third,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::First, Level::Second, Level::Third];

    pub fn index(self) -> usize {
        match self {
            Level::First => 0,
            Level::Second => 1,
            Level::Third => 2,
        }
    }

    /// Level that must be set before this one can be used
    pub fn parent(self) -> Option<Level> {
        match self {
            Level::First => None,
            Level::Second => Some(Level::First),
            Level::Third => Some(Level::Second),
        }
    }

    pub fn child(self) -> Option<Level> {
        match self {
            Level::First => Some(Level::Second),
            Level::Second => Some(Level::Third),
            Level::Third => None,
        }
    }

    /// Levels strictly deeper than this one, shallowest first
    pub fn deeper(self) -> impl Iterator<Item = Level> {
        Level::ALL.into_iter().skip(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::First => "First Level Folder",
            Level::Second => "Second Level Folder (Optional)",
            Level::Third => "Third Level Folder (Optional)",
        }
    }
}

/// How far down the levels a selection reaches without gaps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelPhase {
    Empty,
    FirstChosen,
    SecondChosen,
    ThirdChosen,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    levels: [Option<String>; 3],
    file_name: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, level: Level) -> Option<&str> {
        self.levels[level.index()].as_deref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn with_file_name(&self, file_name: impl Into<String>) -> Selection {
        Selection {
            levels: self.levels.clone(),
            file_name: file_name.into(),
        }
    }

    /// Set or clear one level
    ///
    /// An empty string clears the level. Assigning a different value resets
    /// every deeper level; assigning the current value changes nothing.
    ///
    /// # Examples
    /// ```
    /// use nestnote::model::selection::{Level, Selection};
    ///
    /// let selection = Selection::new()
    ///     .with_level(Level::First, Some("A".to_string()))
    ///     .with_level(Level::Second, Some("B".to_string()))
    ///     .with_level(Level::First, Some("X".to_string()));
    /// assert_eq!(selection.level(Level::First), Some("X"));
    /// assert_eq!(selection.level(Level::Second), None);
    /// ```
    pub fn with_level(&self, level: Level, value: Option<String>) -> Selection {
        let value = value.filter(|v| !v.is_empty());
        if self.levels[level.index()] == value {
            return self.clone();
        }

        let mut levels = self.levels.clone();
        levels[level.index()] = value;
        for deeper in level.deeper() {
            levels[deeper.index()] = None;
        }

        Selection {
            levels,
            file_name: self.file_name.clone(),
        }
    }

    /// Whether the prerequisite of `level` is set
    pub fn is_available(&self, level: Level) -> bool {
        self.parent_segments(level).is_some()
    }

    /// Segments that lead to `level`, or `None` if any of them is unset
    ///
    /// The first level has an empty (but present) parent.
    pub fn parent_segments(&self, level: Level) -> Option<Vec<String>> {
        Level::ALL[..level.index()]
            .iter()
            .map(|l| self.levels[l.index()].clone())
            .collect()
    }

    /// Set levels from the top, stopping at the first unset one
    pub fn folder_segments(&self) -> Vec<&str> {
        self.levels
            .iter()
            .map_while(|value| value.as_deref())
            .collect()
    }

    /// Whether a deeper level holds a value while a shallower one is unset
    pub fn has_orphaned_levels(&self) -> bool {
        let contiguous = self.folder_segments().len();
        self.levels[contiguous..].iter().any(Option::is_some)
    }

    pub fn phase(&self) -> LevelPhase {
        match self.folder_segments().len() {
            0 => LevelPhase::Empty,
            1 => LevelPhase::FirstChosen,
            2 => LevelPhase::SecondChosen,
            _ => LevelPhase::ThirdChosen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chosen(first: Option<&str>, second: Option<&str>, third: Option<&str>) -> Selection {
        Selection::new()
            .with_level(Level::First, first.map(String::from))
            .with_level(Level::Second, second.map(String::from))
            .with_level(Level::Third, third.map(String::from))
    }

    #[test]
    fn test_new_selection_is_empty() {
        let selection = Selection::new();
        assert_eq!(selection.phase(), LevelPhase::Empty);
        assert!(selection.file_name().is_empty());
        for level in Level::ALL {
            assert!(selection.level(level).is_none());
        }
    }

    #[test]
    fn test_with_level_returns_new_value() {
        let original = Selection::new();
        let updated = original.with_level(Level::First, Some("A".to_string()));
        assert!(original.level(Level::First).is_none());
        assert_eq!(updated.level(Level::First), Some("A"));
    }

    #[test]
    fn test_changing_first_resets_second_and_third() {
        let selection = chosen(Some("A"), Some("B"), Some("C"));
        let changed = selection.with_level(Level::First, Some("Z".to_string()));
        assert_eq!(changed.level(Level::Second), None);
        assert_eq!(changed.level(Level::Third), None);
    }

    #[test]
    fn test_changing_second_resets_only_third() {
        let selection = chosen(Some("A"), Some("B"), Some("C"));
        let changed = selection.with_level(Level::Second, Some("Y".to_string()));
        assert_eq!(changed.level(Level::First), Some("A"));
        assert_eq!(changed.level(Level::Second), Some("Y"));
        assert_eq!(changed.level(Level::Third), None);
    }

    #[test]
    fn test_reassigning_same_value_keeps_deeper_levels() {
        let selection = chosen(Some("A"), Some("B"), Some("C"));
        let same = selection.with_level(Level::First, Some("A".to_string()));
        assert_eq!(same, selection);
    }

    #[test]
    fn test_empty_string_clears_level() {
        let selection = chosen(Some("A"), Some("B"), None);
        let cleared = selection.with_level(Level::First, Some(String::new()));
        assert_eq!(cleared.phase(), LevelPhase::Empty);
        assert_eq!(cleared.level(Level::Second), None);
    }

    #[test]
    fn test_file_name_survives_level_changes() {
        let selection = Selection::new()
            .with_file_name("note")
            .with_level(Level::First, Some("A".to_string()));
        assert_eq!(selection.file_name(), "note");
    }

    #[test]
    fn test_parent_segments() {
        let selection = chosen(Some("A"), Some("B"), None);
        assert_eq!(selection.parent_segments(Level::First), Some(vec![]));
        assert_eq!(
            selection.parent_segments(Level::Third),
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert_eq!(Selection::new().parent_segments(Level::Second), None);
    }

    #[test]
    fn test_orphaned_level_detected() {
        let orphan = Selection::new().with_level(Level::Second, Some("B".to_string()));
        assert!(orphan.has_orphaned_levels());
        assert!(orphan.folder_segments().is_empty());
        assert_eq!(orphan.phase(), LevelPhase::Empty);
        assert!(!chosen(Some("A"), Some("B"), None).has_orphaned_levels());
    }

    #[test]
    fn test_phase_follows_contiguous_levels() {
        assert_eq!(chosen(Some("A"), None, None).phase(), LevelPhase::FirstChosen);
        assert_eq!(chosen(Some("A"), Some("B"), None).phase(), LevelPhase::SecondChosen);
        assert_eq!(
            chosen(Some("A"), Some("B"), Some("C")).phase(),
            LevelPhase::ThirdChosen
        );
    }

    #[test]
    fn test_level_relations() {
        assert_eq!(Level::First.parent(), None);
        assert_eq!(Level::Third.parent(), Some(Level::Second));
        assert_eq!(Level::Second.child(), Some(Level::Third));
        assert_eq!(Level::First.deeper().collect::<Vec<_>>(), vec![Level::Second, Level::Third]);
        assert_eq!(Level::Third.deeper().count(), 0);
    }
}
