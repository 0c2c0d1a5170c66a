use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Every user action the application understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Put the editor text on the clipboard
    CopyEditor,
    NormalizePath,
    ToForwardSlashes,
    ToBackSlashes,
    /// Run the editor text as a command line
    Execute,
    /// Open the editor text with the default handler
    Open,
    /// Save the editor text as a bookmark
    AddBookmark,
    /// Remove the selected bookmark
    RemoveBookmark,
    ClearHistory,
    /// Put the selected history entry or bookmark on the clipboard
    CopySelected,
    Quit,
}

impl Command {
    /// Ctrl shortcuts that work from every pane
    pub fn from_global_key(key: KeyEvent) -> Option<Self> {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        let command = match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Command::Quit,
            KeyCode::Char('s') => Command::CopyEditor,
            KeyCode::Char('n') => Command::NormalizePath,
            KeyCode::Char('f') => Command::ToForwardSlashes,
            KeyCode::Char('b') => Command::ToBackSlashes,
            KeyCode::Char('x') => Command::Execute,
            KeyCode::Char('o') => Command::Open,
            KeyCode::Char('d') => Command::AddBookmark,
            KeyCode::Char('l') => Command::ClearHistory,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_shortcuts_map_to_commands() {
        assert_eq!(Command::from_global_key(ctrl('n')), Some(Command::NormalizePath));
        assert_eq!(Command::from_global_key(ctrl('b')), Some(Command::ToBackSlashes));
        assert_eq!(Command::from_global_key(ctrl('q')), Some(Command::Quit));
    }

    #[test]
    fn test_plain_keys_are_not_global() {
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::empty());
        assert_eq!(Command::from_global_key(key), None);
    }

    #[test]
    fn test_unbound_ctrl_key() {
        assert_eq!(Command::from_global_key(ctrl('z')), None);
    }
}
