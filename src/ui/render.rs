use crate::App;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use nestnote::model::{FocusField, Level};

use super::{form, layout, legend, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;
    let focus = model.ui.focus;

    let focused_dropdown_enabled = match focus {
        FocusField::Dropdown(level) => model.dropdown_enabled(level),
        _ => false,
    };

    let legend_height =
        legend::calculate_legend_height(size.width, focus, focused_dropdown_enabled);
    let layout_info = layout::calculate_layout(size, legend_height);

    let form_block = Block::default()
        .borders(Borders::ALL)
        .title(" Create New File ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Blue));
    f.render_widget(form_block, layout_info.form_area);

    let mut cursor = form::render_text_input(
        f,
        layout_info.file_name_area,
        "File name",
        model.selection.file_name(),
        focus == FocusField::FileName,
        true,
    );

    for level in Level::ALL {
        let row = layout_info.level_rows[level.index()];
        let input = model.level_input(level);
        let available = model.level_available(level);

        form::render_level_label(f, row.label, level, input, available);
        form::render_dropdown(
            f,
            row.dropdown,
            input,
            focus == FocusField::Dropdown(level),
            model.dropdown_enabled(level),
        );
        let text_cursor = form::render_text_input(
            f,
            row.text,
            "New folder",
            &input.text,
            focus == FocusField::Text(level),
            available,
        );
        cursor = cursor.or(text_cursor);
    }

    form::render_create_button(f, layout_info.create_area, focus == FocusField::Create);

    legend::render_legend(f, layout_info.legend_area, focus, focused_dropdown_enabled);

    // Overlays last so they sit on top of the form
    if let FocusField::Dropdown(level) = focus {
        if focused_dropdown_enabled {
            let row = layout_info.level_rows[level.index()];
            form::render_options_popup(f, row.dropdown, model.level_input(level));
        }
    }

    if let Some((notice, _)) = &model.ui.toast {
        toast::render_toast(f, size, notice);
    }

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }
}
