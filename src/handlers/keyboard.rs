//! Keyboard Input Handler
//!
//! Handles all keyboard input for the dialog. Global keys (quit, focus,
//! submit) come first; everything else goes to the focused field.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use nestnote::model::{FocusField, OptionsQuery};

/// Handle keyboard input
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.cancel_dialog();
            return Ok(());
        }
        KeyCode::Char('c') if ctrl => {
            app.cancel_dialog();
            return Ok(());
        }
        KeyCode::Tab => {
            app.model.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.model.focus_prev();
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit_dialog().await;
            return Ok(());
        }
        _ => {}
    }

    let query = match app.model.ui.focus {
        FocusField::FileName => {
            match key.code {
                KeyCode::Char(c) if !ctrl => app.model.push_file_name_char(c),
                KeyCode::Backspace => app.model.pop_file_name_char(),
                KeyCode::Down => app.model.focus_next(),
                KeyCode::Up => app.model.focus_prev(),
                _ => {}
            }
            None
        }
        FocusField::Dropdown(level) => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.model.cycle_option(level, true),
            KeyCode::Up | KeyCode::Char('k') => app.model.cycle_option(level, false),
            KeyCode::Backspace | KeyCode::Delete => app.model.clear_level(level),
            _ => None,
        },
        FocusField::Text(level) => match key.code {
            KeyCode::Char(c) if !ctrl => app.model.type_level_char(level, c),
            KeyCode::Backspace => app.model.erase_level_char(level),
            KeyCode::Char('u') if ctrl => app.model.clear_level(level),
            KeyCode::Down => focus_step(app, true),
            KeyCode::Up => focus_step(app, false),
            _ => None,
        },
        FocusField::Create => {
            match key.code {
                KeyCode::Char(' ') => app.submit_dialog().await,
                KeyCode::Up => app.model.focus_prev(),
                _ => {}
            }
            None
        }
    };

    app.refresh_options(query).await;
    app.model.fix_focus();

    Ok(())
}

fn focus_step(app: &mut App, forward: bool) -> Option<OptionsQuery> {
    if forward {
        app.model.focus_next();
    } else {
        app.model.focus_prev();
    }
    None
}
