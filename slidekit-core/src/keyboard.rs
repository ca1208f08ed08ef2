//! Keyboard navigation mapping

use serde::{Deserialize, Serialize};

/// Keys the carousel reacts to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Home,
    End,
    Space,
}

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Navigate to the index and move focus to its indicator.
    FocusIndex(usize),
    TogglePlayback,
    Ignore,
}

/// Map a key press to an action. Arrow keys step without looping; `Space`
/// only toggles playback when autoplay is configured.
pub fn key_action(
    key: Key,
    active: usize,
    indicator_count: usize,
    autoplay: bool,
) -> KeyAction {
    let last = indicator_count.saturating_sub(1);
    match key {
        Key::ArrowLeft | Key::ArrowUp if active > 0 => {
            KeyAction::FocusIndex(active - 1)
        }
        Key::ArrowRight | Key::ArrowDown if active < last => {
            KeyAction::FocusIndex(active + 1)
        }
        Key::Home => KeyAction::FocusIndex(0),
        Key::End => KeyAction::FocusIndex(last),
        Key::Space if autoplay => KeyAction::TogglePlayback,
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_stop_at_the_ends() {
        assert_eq!(key_action(Key::ArrowLeft, 0, 4, false), KeyAction::Ignore);
        assert_eq!(key_action(Key::ArrowUp, 2, 4, false), KeyAction::FocusIndex(1));
        assert_eq!(key_action(Key::ArrowRight, 3, 4, false), KeyAction::Ignore);
        assert_eq!(
            key_action(Key::ArrowDown, 1, 4, false),
            KeyAction::FocusIndex(2)
        );
    }

    #[test]
    fn home_and_end_jump() {
        assert_eq!(key_action(Key::Home, 3, 4, false), KeyAction::FocusIndex(0));
        assert_eq!(key_action(Key::End, 0, 4, false), KeyAction::FocusIndex(3));
    }

    #[test]
    fn space_requires_autoplay() {
        assert_eq!(key_action(Key::Space, 0, 4, false), KeyAction::Ignore);
        assert_eq!(key_action(Key::Space, 0, 4, true), KeyAction::TogglePlayback);
    }
}
