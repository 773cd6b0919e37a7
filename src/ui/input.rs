use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    Top,
    Bottom,
    Delete,
    Confirm,
    Cancel,
    Refresh,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, confirming: bool) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if confirming {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('g') | KeyCode::Home => Action::Top,
        KeyCode::Char('G') | KeyCode::End => Action::Bottom,
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_mode_only_takes_yes_or_no() {
        assert_eq!(map_key(key(KeyCode::Char('y')), true), Action::Confirm);
        assert_eq!(map_key(key(KeyCode::Char('n')), true), Action::Cancel);
        assert_eq!(map_key(key(KeyCode::Esc), true), Action::Cancel);
        assert_eq!(map_key(key(KeyCode::Char('d')), true), Action::None);
        assert_eq!(map_key(key(KeyCode::Char('q')), true), Action::None);
    }

    #[test]
    fn test_browse_keys() {
        assert_eq!(map_key(key(KeyCode::Char('d')), false), Action::Delete);
        assert_eq!(map_key(key(KeyCode::Char('y')), false), Action::None);
        assert_eq!(map_key(key(KeyCode::Down), false), Action::ScrollDown);
        assert_eq!(map_key(key(KeyCode::Char('r')), false), Action::Refresh);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, true), Action::Quit);
        assert_eq!(map_key(ctrl_c, false), Action::Quit);
    }
}
