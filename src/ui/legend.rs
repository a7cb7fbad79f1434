use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use nestnote::model::FocusField;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(focus: FocusField, dropdown_enabled: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![
        key("Tab/S-Tab"),
        Span::raw(":Next/Prev field  "),
    ];

    match focus {
        FocusField::Dropdown(_) if dropdown_enabled => {
            hotkey_spans.extend(vec![
                key("↑/↓"),
                Span::raw(":Choose folder  "),
                key("Bksp"),
                Span::raw(":Clear  "),
            ]);
        }
        FocusField::Text(_) => {
            hotkey_spans.extend(vec![
                Span::raw("Type a new folder name  "),
                key("^U"),
                Span::raw(":Clear  "),
            ]);
        }
        FocusField::Create => {
            hotkey_spans.extend(vec![key("Space"), Span::raw(":Create  ")]);
        }
        _ => {}
    }

    hotkey_spans.extend(vec![
        key("Enter"),
        Span::raw(":Create  "),
        key("Esc"),
        Span::raw(":Cancel"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(focus: FocusField, dropdown_enabled: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(focus, dropdown_enabled));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, focus: FocusField, dropdown_enabled: bool) {
    f.render_widget(build_legend_paragraph(focus, dropdown_enabled), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    focus: FocusField,
    dropdown_enabled: bool,
) -> u16 {
    // line_count() miscounts when a block is attached, so count without borders
    let hotkey_line = Line::from(build_hotkey_spans(focus, dropdown_enabled));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestnote::model::Level;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_always_shows_create_and_cancel() {
        for focus in FocusField::ORDER {
            let text = spans_to_text(&build_hotkey_spans(focus, true));
            assert!(text.contains("Enter:Create"), "missing create for {:?}: {}", focus, text);
            assert!(text.contains("Esc:Cancel"), "missing cancel for {:?}: {}", focus, text);
        }
    }

    #[test]
    fn test_legend_shows_choose_only_for_enabled_dropdown() {
        let focus = FocusField::Dropdown(Level::Second);
        assert!(spans_to_text(&build_hotkey_spans(focus, true)).contains("Choose folder"));
        assert!(!spans_to_text(&build_hotkey_spans(focus, false)).contains("Choose folder"));
    }

    #[test]
    fn test_legend_text_field_hint() {
        let text = spans_to_text(&build_hotkey_spans(FocusField::Text(Level::First), false));
        assert!(text.contains("new folder name"));
        assert!(!text.contains("Choose folder"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(200, FocusField::FileName, false);
        let narrow = calculate_legend_height(20, FocusField::FileName, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
