use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the form gets on large terminals
const MAX_FORM_WIDTH: u16 = 76;

/// Areas of one folder level row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRow {
    pub label: Rect,
    pub dropdown: Rect,
    pub text: Rect,
}

/// Layout information for rendering
#[derive(Clone, Debug)]
pub struct LayoutInfo {
    /// Bordered form box
    pub form_area: Rect,
    pub file_name_area: Rect,
    /// One row per folder level, top to bottom
    pub level_rows: [LevelRow; 3],
    pub create_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for the dialog
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(legend_height)])
        .split(terminal_size);

    let content = main_chunks[0];
    let form_width = content.width.min(MAX_FORM_WIDTH);
    let form_area = Rect {
        x: content.x + (content.width - form_width) / 2,
        y: content.y,
        width: form_width,
        height: content.height,
    };

    // Inside the form border
    let inner = Rect {
        x: form_area.x.saturating_add(1),
        y: form_area.y.saturating_add(1),
        width: form_area.width.saturating_sub(2),
        height: form_area.height.saturating_sub(2),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // File name
            Constraint::Length(1), // First level label
            Constraint::Length(3), // First level inputs
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3), // Create button
            Constraint::Min(0),
        ])
        .split(inner);

    let level_row = |label: Rect, inputs: Rect| {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inputs);
        LevelRow {
            label,
            dropdown: halves[0],
            text: halves[1],
        }
    };

    LayoutInfo {
        form_area,
        file_name_area: rows[0],
        level_rows: [
            level_row(rows[1], rows[2]),
            level_row(rows[3], rows[4]),
            level_row(rows[5], rows[6]),
        ],
        create_area: rows[7],
        legend_area: main_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_is_centered_and_capped() {
        let layout = calculate_layout(Rect::new(0, 0, 200, 40), 3);
        assert_eq!(layout.form_area.width, MAX_FORM_WIDTH);
        assert_eq!(layout.form_area.x, (200 - MAX_FORM_WIDTH) / 2);
        assert_eq!(layout.legend_area.height, 3);
        assert_eq!(layout.legend_area.width, 200);
    }

    #[test]
    fn test_level_rows_are_stacked_below_file_name() {
        let layout = calculate_layout(Rect::new(0, 0, 80, 40), 3);
        let [first, second, third] = layout.level_rows;
        assert!(layout.file_name_area.y < first.label.y);
        assert!(first.dropdown.y < second.label.y);
        assert!(second.dropdown.y < third.label.y);
        assert!(third.text.y < layout.create_area.y);
        assert_eq!(first.dropdown.y, first.text.y);
        assert!(first.dropdown.x < first.text.x);
    }
}
