use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Movement;

/// Player intents the worker loop applies to the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Movement),
    /// Player-issued drop: same Down movement, but the pending gravity tick
    /// is cancelled and rescheduled so it cannot fire right behind it.
    ForcedDown,
    Quit,
}

/// Map a key event to an action. Letters are case-insensitive; anything
/// unrecognized is ignored.
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => {
            if c == 'c' && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Action::Quit);
            }
            match c.to_ascii_lowercase() {
                'a' => Some(Action::Move(Movement::Left)),
                'd' => Some(Action::Move(Movement::Right)),
                's' => Some(Action::ForcedDown),
                'q' => Some(Action::Move(Movement::RotateLeft)),
                'e' => Some(Action::Move(Movement::RotateRight)),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn letters_map_to_movements() {
        let cases = [
            ('a', Action::Move(Movement::Left)),
            ('d', Action::Move(Movement::Right)),
            ('s', Action::ForcedDown),
            ('q', Action::Move(Movement::RotateLeft)),
            ('e', Action::Move(Movement::RotateRight)),
        ];
        for (c, action) in cases {
            assert_eq!(
                map_key(&key(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(action)
            );
            assert_eq!(
                map_key(&key(
                    KeyCode::Char(c.to_ascii_uppercase()),
                    KeyModifiers::SHIFT
                )),
                Some(action)
            );
        }
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(
            map_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(map_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(map_key(&key(KeyCode::Up, KeyModifiers::NONE)), None);
        assert_eq!(map_key(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }
}
