//! Form UI
//!
//! Renders the file name input, the per-level dropdown and text inputs,
//! the open dropdown list and the Create button.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use nestnote::logic::ui::cursor_offset;
use nestnote::model::{InputSource, Level, LevelInput};

/// Tallest the option list grows, borders included
const MAX_POPUP_HEIGHT: u16 = 10;

fn border_style(focused: bool, enabled: bool) -> Style {
    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Render a single-line text input
///
/// Returns where the terminal cursor belongs when the input is focused.
pub fn render_text_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    enabled: bool,
) -> Option<Position> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(border_style(focused, enabled));

    let line = if !enabled {
        Line::from(Span::styled("-", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(value.to_string())
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if focused && enabled && area.width > 2 && area.height > 2 {
        let field_width = area.width - 3;
        Some(Position::new(
            area.x + 1 + cursor_offset(value, field_width),
            area.y + 1,
        ))
    } else {
        None
    }
}

/// Render the closed dropdown box of one level
pub fn render_dropdown(
    f: &mut Frame,
    area: Rect,
    input: &LevelInput,
    focused: bool,
    enabled: bool,
) {
    let placeholder = Style::default().fg(Color::DarkGray);
    let line = match input.chosen_option() {
        Some(chosen) if enabled => Line::from(vec![
            Span::raw(chosen.to_string()),
            Span::styled(
                format!("  ({}/{})", input.chosen.map_or(0, |i| i + 1), input.options.len()),
                placeholder,
            ),
        ]),
        _ if !enabled && input.loaded && input.options.is_empty() => {
            Line::from(Span::styled("No folders", placeholder))
        }
        _ if !enabled => Line::from(Span::styled("-", placeholder)),
        _ => Line::from(Span::styled("Select existing folder", placeholder)),
    };

    let arrow = if focused && enabled { " ▾ " } else { " ▸ " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(arrow)
        .border_style(border_style(focused, enabled));

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the option list below an open dropdown
pub fn render_options_popup(f: &mut Frame, anchor: Rect, input: &LevelInput) {
    let screen = f.area();
    let top = anchor.y.saturating_add(anchor.height);
    let wanted = (input.options.len() as u16).saturating_add(2).min(MAX_POPUP_HEIGHT);
    let height = wanted.min(screen.height.saturating_sub(top));
    if height < 3 {
        return;
    }

    let popup_area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height,
    };

    let items: Vec<ListItem> = input
        .options
        .iter()
        .map(|option| ListItem::new(option.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(input.chosen);

    f.render_widget(Clear, popup_area);
    f.render_stateful_widget(list, popup_area, &mut state);
}

/// Label above a level row, marking which input currently supplies the value
pub fn render_level_label(
    f: &mut Frame,
    area: Rect,
    level: Level,
    input: &LevelInput,
    enabled: bool,
) {
    let style = if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(level.label(), style)];
    if let Some(InputSource::Text) = input.source {
        if !input.text.is_empty() {
            spans.push(Span::styled("  (new folder)", Style::default().fg(Color::Yellow)));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_create_button(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let width = area.width.min(12);
    let button_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let button = Paragraph::new(Line::from(Span::styled("Create", style)))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused, true)),
        );

    f.render_widget(button, button_area);
}
