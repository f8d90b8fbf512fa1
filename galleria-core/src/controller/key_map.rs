//! src/controller/key_map.rs
//! ============================================================================
//! # Key map: terminal key events to [`Action`]s
//!
//! Resolved against the open overlay first, then the active view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::{
    controller::actions::Action,
    model::{
        editor::CursorMove,
        ui_state::{InputPromptType, PickerKind, UIOverlay},
        view_mode::ViewMode,
    },
};

/// Translate one key press. Overlays capture input before the view does.
#[must_use]
pub fn map_key(key: KeyEvent, overlay: &UIOverlay, view: ViewMode) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::NoOp;
    }

    // Ctrl-C always quits, even mid-prompt
    if key == ctrl('c') {
        return Action::Quit;
    }

    let action = match overlay {
        UIOverlay::None => map_view_key(key, view),
        UIOverlay::Prompt(_) => map_prompt_key(key),
        UIOverlay::Editor => map_editor_key(key),
        UIOverlay::Confirm(_) => match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Action::Back,
            _ => Action::NoOp,
        },
        UIOverlay::Viewer(_) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Back,
            KeyCode::Right | KeyCode::Char('l') => Action::ViewerNext,
            KeyCode::Left | KeyCode::Char('h') => Action::ViewerPrevious,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveSelectionDown,
            KeyCode::Char('d') | KeyCode::Delete => Action::RequestDelete,
            KeyCode::Char('e') => Action::OpenEditor,
            KeyCode::Char('i') => Action::ShowDetails,
            KeyCode::Char('r') => Action::RequestRename,
            KeyCode::Char('p') => Action::ToggleQuickAccess,
            KeyCode::Char('a') => Action::ShowAlbumPicker,
            KeyCode::Char('s') => Action::Share,
            KeyCode::Char('o') => Action::Download,
            _ => Action::NoOp,
        },
        UIOverlay::Picker(kind) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Back,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveSelectionDown,
            KeyCode::Enter => Action::PickerSubmit,
            KeyCode::Char('p') if *kind == PickerKind::QuickAccess => Action::PickerRemove,
            KeyCode::Char('d') | KeyCode::Delete if *kind == PickerKind::QuickAccess => {
                Action::PickerDelete
            }
            _ => Action::NoOp,
        },
        UIOverlay::Help | UIOverlay::Details(_) => match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::Enter => Action::Back,
            _ => Action::NoOp,
        },
    };

    trace!(?key, ?action, "Mapped key");
    action
}

fn map_prompt_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::SubmitInputPrompt,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputChar(c)
        }
        _ => Action::NoOp,
    }
}

fn map_editor_key(key: KeyEvent) -> Action {
    if key == ctrl('s') {
        return Action::SaveEditor;
    }
    if key == ctrl('z') {
        return Action::EditorUndo;
    }
    if key == ctrl('y') {
        return Action::EditorRedo;
    }

    let with_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::InputChar('\n'),
        KeyCode::Tab => Action::InputChar('\t'),
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::EditorDelete,
        KeyCode::Left => Action::EditorCursor(CursorMove::Left),
        KeyCode::Right => Action::EditorCursor(CursorMove::Right),
        KeyCode::Up => Action::EditorCursor(CursorMove::Up),
        KeyCode::Down => Action::EditorCursor(CursorMove::Down),
        KeyCode::Home if with_ctrl => Action::EditorCursor(CursorMove::DocumentStart),
        KeyCode::End if with_ctrl => Action::EditorCursor(CursorMove::DocumentEnd),
        KeyCode::Home => Action::EditorCursor(CursorMove::LineStart),
        KeyCode::End => Action::EditorCursor(CursorMove::LineEnd),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InputChar(c)
        }
        _ => Action::NoOp,
    }
}

fn map_view_key(key: KeyEvent, view: ViewMode) -> Action {
    if key == ctrl('b') {
        return Action::ToggleSidebar;
    }

    // bindings shared by every view
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Tab => return Action::CycleView,
        KeyCode::Char('b') => return Action::OpenRecycleBin,
        KeyCode::Esc => return Action::Back,
        KeyCode::Up | KeyCode::Char('k') => return Action::MoveSelectionUp,
        KeyCode::Down | KeyCode::Char('j') => return Action::MoveSelectionDown,
        KeyCode::Home | KeyCode::Char('g') => return Action::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => return Action::SelectLast,
        KeyCode::Enter => return Action::EnterSelected,
        KeyCode::Char('?') => return Action::ToggleHelp,
        KeyCode::Char('[') => return Action::PreviousAlbum,
        KeyCode::Char(']') => return Action::NextAlbum,
        KeyCode::Char('n') => return Action::ShowInputPrompt(InputPromptType::CreateAlbum),
        KeyCode::Char('f') => return Action::ShowQuickAccess,
        _ => {}
    }

    match view {
        ViewMode::RecycleBin => match key.code {
            KeyCode::Char(' ') => Action::ToggleBinSelection,
            KeyCode::Char('A') => Action::ToggleSelectAll,
            KeyCode::Char('u') => Action::RecoverSelected,
            KeyCode::Char('U') => Action::RecoverAll,
            KeyCode::Char('x') | KeyCode::Delete => Action::RequestDeleteSelected,
            KeyCode::Char('X') => Action::RequestDeleteAll,
            KeyCode::Char('i') => Action::ShowDetails,
            _ => Action::NoOp,
        },
        ViewMode::Gallery | ViewMode::FileManager => match key.code {
            KeyCode::Char('/') => Action::ShowInputPrompt(InputPromptType::Search),
            KeyCode::Char('d') | KeyCode::Delete => Action::RequestDelete,
            KeyCode::Char('r') => Action::RequestRename,
            KeyCode::Char('e') => Action::OpenEditor,
            KeyCode::Char('i') => Action::ShowDetails,
            KeyCode::Char('p') => Action::ToggleQuickAccess,
            KeyCode::Char('a') => Action::ShowAlbumPicker,
            KeyCode::Char('s') => Action::Share,
            KeyCode::Char('o') => Action::Download,
            KeyCode::Char('R') => Action::RequestRenameAlbum,
            KeyCode::Char('D') => Action::RequestDeleteAlbum,
            KeyCode::Char('c') => Action::SelectAlbum(None),
            _ => Action::NoOp,
        },
    }
}

#[inline]
const fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{file_record::FileId, ui_state::ConfirmKind};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_global_bindings() {
        let none = UIOverlay::None;
        assert_eq!(map_key(key('q'), &none, ViewMode::Gallery), Action::Quit);
        assert_eq!(map_key(code(KeyCode::Tab), &none, ViewMode::Gallery), Action::CycleView);
        assert_eq!(map_key(key('b'), &none, ViewMode::FileManager), Action::OpenRecycleBin);
        assert_eq!(map_key(key('j'), &none, ViewMode::RecycleBin), Action::MoveSelectionDown);
        assert_eq!(map_key(key(']'), &none, ViewMode::Gallery), Action::NextAlbum);
    }

    #[test]
    fn test_view_specific_bindings() {
        let none = UIOverlay::None;
        assert_eq!(map_key(key('x'), &none, ViewMode::RecycleBin), Action::RequestDeleteSelected);
        assert_eq!(map_key(key('x'), &none, ViewMode::Gallery), Action::NoOp);
        assert_eq!(map_key(key('d'), &none, ViewMode::Gallery), Action::RequestDelete);
        assert_eq!(map_key(key(' '), &none, ViewMode::RecycleBin), Action::ToggleBinSelection);
        assert_eq!(
            map_key(key('/'), &none, ViewMode::Gallery),
            Action::ShowInputPrompt(InputPromptType::Search)
        );
    }

    #[test]
    fn test_prompt_captures_text() {
        let prompt = UIOverlay::Prompt(InputPromptType::Search);
        assert_eq!(map_key(key('q'), &prompt, ViewMode::Gallery), Action::InputChar('q'));
        assert_eq!(map_key(key('b'), &prompt, ViewMode::Gallery), Action::InputChar('b'));
        assert_eq!(map_key(code(KeyCode::Esc), &prompt, ViewMode::Gallery), Action::Back);
        assert_eq!(map_key(ctrl('c'), &prompt, ViewMode::Gallery), Action::Quit);
    }

    #[test]
    fn test_editor_keys() {
        let editor = UIOverlay::Editor;
        assert_eq!(map_key(ctrl('s'), &editor, ViewMode::Gallery), Action::SaveEditor);
        assert_eq!(
            map_key(code(KeyCode::Enter), &editor, ViewMode::Gallery),
            Action::InputChar('\n')
        );
        assert_eq!(
            map_key(code(KeyCode::Left), &editor, ViewMode::Gallery),
            Action::EditorCursor(CursorMove::Left)
        );
        assert_eq!(
            map_key(code(KeyCode::Home), &editor, ViewMode::Gallery),
            Action::EditorCursor(CursorMove::LineStart)
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL),
                &editor,
                ViewMode::Gallery
            ),
            Action::EditorCursor(CursorMove::DocumentEnd)
        );
        assert_eq!(
            map_key(code(KeyCode::Delete), &editor, ViewMode::Gallery),
            Action::EditorDelete
        );
        assert_eq!(map_key(ctrl('z'), &editor, ViewMode::Gallery), Action::EditorUndo);
        assert_eq!(map_key(ctrl('y'), &editor, ViewMode::Gallery), Action::EditorRedo);
    }

    #[test]
    fn test_confirm_and_picker_keys() {
        let confirm = UIOverlay::Confirm(ConfirmKind::DeleteAll);
        assert_eq!(map_key(key('y'), &confirm, ViewMode::RecycleBin), Action::Confirm);
        assert_eq!(map_key(key('n'), &confirm, ViewMode::RecycleBin), Action::Back);

        let albums = UIOverlay::Picker(PickerKind::Album(FileId::from("1")));
        assert_eq!(map_key(key('p'), &albums, ViewMode::Gallery), Action::NoOp);
        let quick = UIOverlay::Picker(PickerKind::QuickAccess);
        assert_eq!(map_key(key('p'), &quick, ViewMode::Gallery), Action::PickerRemove);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key('q');
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, &UIOverlay::None, ViewMode::Gallery), Action::NoOp);
    }
}
