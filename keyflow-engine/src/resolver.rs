//! Standard gesture-to-effect resolution
//!
//! Maps a `(KeyAction, Gesture)` pair to the effect that should run by
//! default. The resolver is stateless: it only produces effects, it
//! never touches the document itself. An action/gesture pair with no
//! table entry resolves to `None`, which is not an error; it leaves
//! the pair free for upstream configuration to override.

use crate::proxy::KeyboardController;
use keyflow_core::{Gesture, KeyAction, KeyboardType};

/// URL that opens the host's keyboard settings screen
pub const KEYBOARD_SETTINGS_URL: &str = "app-settings:";

/// An effect over the keyboard host
///
/// The controller may be absent (e.g. a weak host reference that has
/// gone away); invoking any effect with `None` is a guaranteed no-op.
pub type GestureAction = Box<dyn Fn(Option<&mut dyn KeyboardController>)>;

/// The standard effect for an action when no gesture is specified
///
/// Release is the common case for most keys, so it is preferred; a
/// minority of actions (backspace, keyboard-type switch) only define a
/// press effect and are reached through the press fallback.
pub fn standard_action(action: &KeyAction) -> Option<GestureAction> {
    standard_release_action(action).or_else(|| standard_press_action(action))
}

/// The standard effect for an action under a specific gesture
pub fn standard_action_for(action: &KeyAction, gesture: Gesture) -> Option<GestureAction> {
    match gesture {
        Gesture::DoubleTap => standard_double_tap_action(action),
        Gesture::LongPress => standard_long_press_action(action),
        Gesture::Press => standard_press_action(action),
        Gesture::Release => standard_release_action(action),
        Gesture::RepeatPress => standard_repeat_action(action),
    }
}

/// Resolve and run the standard effect for a pair
///
/// Returns whether an effect was found. Running with an absent
/// controller still counts as found; the effect itself no-ops.
pub fn run_standard_action(
    action: &KeyAction,
    gesture: Gesture,
    controller: Option<&mut dyn KeyboardController>,
) -> bool {
    match standard_action_for(action, gesture) {
        Some(effect) => {
            effect(controller);
            true
        }
        None => false,
    }
}

fn standard_double_tap_action(_action: &KeyAction) -> Option<GestureAction> {
    None
}

fn standard_long_press_action(action: &KeyAction) -> Option<GestureAction> {
    match action {
        // Reserved so that a long press does not fall through to
        // anything else; deliberately does nothing.
        KeyAction::Backspace => Some(Box::new(|_| {})),
        _ => None,
    }
}

fn standard_press_action(action: &KeyAction) -> Option<GestureAction> {
    match action {
        KeyAction::Backspace => Some(effect(|c| c.delete_backward(1))),
        KeyAction::KeyboardType(kind) => {
            let kind = *kind;
            Some(effect(move |c| c.set_keyboard_type(kind)))
        }
        _ => None,
    }
}

fn standard_release_action(action: &KeyAction) -> Option<GestureAction> {
    match action {
        KeyAction::Character(ch) | KeyAction::CharacterMargin(ch) => {
            let ch = ch.clone();
            Some(effect(move |c| c.insert_text(&ch)))
        }
        KeyAction::Dictation => Some(effect(|c| c.perform_dictation())),
        KeyAction::DismissKeyboard => Some(effect(|c| c.dismiss_keyboard())),
        KeyAction::Emoji(emoji) => {
            let ch = emoji.char().to_string();
            Some(effect(move |c| c.insert_text(&ch)))
        }
        KeyAction::MoveCursorBackward => Some(effect(|c| c.adjust_cursor(-1))),
        KeyAction::MoveCursorForward => Some(effect(|c| c.adjust_cursor(1))),
        KeyAction::NextLocale => Some(effect(|c| c.select_next_locale())),
        KeyAction::Primary => Some(effect(|c| c.insert_text("\n"))),
        KeyAction::Shift { current } => {
            let next = current.next_on_shift();
            Some(effect(move |c| {
                c.set_keyboard_type(KeyboardType::Alphabetic(next))
            }))
        }
        KeyAction::Space => Some(effect(|c| c.insert_text(" "))),
        KeyAction::SystemSettings => Some(effect(|c| c.open_url(KEYBOARD_SETTINGS_URL))),
        KeyAction::Tab => Some(effect(|c| c.insert_text("\t"))),
        KeyAction::Url(url) => {
            let url = url.clone();
            Some(effect(move |c| c.open_url(&url)))
        }
        _ => None,
    }
}

fn standard_repeat_action(action: &KeyAction) -> Option<GestureAction> {
    // No action defines a dedicated repeat effect; repeating falls
    // back to the press effect, so backspace repeats its single-press
    // delete and everything without a press effect stays silent.
    standard_press_action(action)
}

/// Lift a controller closure into an absence-tolerant effect
fn effect(f: impl Fn(&mut dyn KeyboardController) + 'static) -> GestureAction {
    Box::new(move |controller| {
        if let Some(c) = controller {
            f(c);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyflow_core::ShiftState;

    #[test]
    fn test_no_default_variants_resolve_empty() {
        for action in [
            KeyAction::None,
            KeyAction::NextKeyboard,
            KeyAction::Custom("paste".into()),
        ] {
            assert!(!action.has_standard_effect());
            for gesture in Gesture::ALL {
                assert!(standard_action_for(&action, gesture).is_none());
            }
            assert!(standard_action(&action).is_none());
        }
    }

    #[test]
    fn test_absent_controller_is_a_no_op() {
        let action = standard_action(&KeyAction::Space).unwrap();
        // Must not panic or do anything observable.
        action(None);
    }

    #[test]
    fn test_press_only_actions_reachable_without_gesture() {
        assert!(standard_action(&KeyAction::Backspace).is_some());
        assert!(standard_action(&KeyAction::KeyboardType(KeyboardType::Numeric)).is_some());
    }

    #[test]
    fn test_backspace_table_shape() {
        let action = KeyAction::Backspace;
        assert!(standard_action_for(&action, Gesture::Press).is_some());
        assert!(standard_action_for(&action, Gesture::Release).is_none());
        assert!(standard_action_for(&action, Gesture::LongPress).is_some());
        assert!(standard_action_for(&action, Gesture::RepeatPress).is_some());
        assert!(standard_action_for(&action, Gesture::DoubleTap).is_none());
    }

    #[test]
    fn test_shift_resolves_only_on_release() {
        let action = KeyAction::Shift {
            current: ShiftState::Lowercased,
        };
        assert!(standard_action_for(&action, Gesture::Release).is_some());
        assert!(standard_action_for(&action, Gesture::Press).is_none());
    }
}
