//! Basic tests for keyflow-core

use keyflow_core::*;

#[test]
fn test_key_action_construction() {
    let action = KeyAction::Character("a".into());
    assert!(action.has_standard_effect());
    assert!(!KeyAction::None.has_standard_effect());
    assert!(!KeyAction::Custom("paste".into()).has_standard_effect());
    assert!(!KeyAction::NextKeyboard.has_standard_effect());
}

#[test]
fn test_shift_cycle() {
    let mut state = ShiftState::CapsLocked;
    state = state.next_on_shift();
    assert_eq!(state, ShiftState::Lowercased);
    state = state.next_on_shift();
    assert_eq!(state, ShiftState::Uppercased);
    state = state.next_on_shift();
    assert_eq!(state, ShiftState::Lowercased);
}

#[test]
fn test_emoji_char_sequence() {
    let emoji = Emoji::new("🙂");
    assert_eq!(emoji.char(), "🙂");
    assert_eq!(KeyAction::Emoji(emoji.clone()), KeyAction::Emoji(emoji));
}

#[test]
fn test_default_delimiters() {
    let delims = SentenceDelimiters::default();
    assert_eq!(delims.as_slice(), [".", "!", "?"]);
    assert!(delims.is_delimiter("?"));
    assert!(!delims.is_delimiter(","));
}

#[test]
fn test_suggestion_roundtrip_fields() {
    let s = Suggestion::new("their")
        .with_title("their*")
        .with_subtitle("correction")
        .autocorrect()
        .sentence();
    assert_eq!(s.id(), "their");
    assert_eq!(s.title, "their*");
    assert_eq!(s.subtitle.as_deref(), Some("correction"));
    assert!(s.is_autocorrect);
    assert!(s.is_sentence);
    assert!(!s.is_unknown);
}

#[cfg(feature = "serde")]
#[test]
fn test_value_types_serialize() {
    let json = serde_json::to_string(&Gesture::RepeatPress).unwrap();
    assert_eq!(json, "\"repeat_press\"");
    let action: KeyAction = serde_json::from_str("{\"character\":\"a\"}").unwrap();
    assert_eq!(action, KeyAction::Character("a".into()));
    let state: ShiftState = serde_json::from_str("\"caps_locked\"").unwrap();
    assert_eq!(state, ShiftState::CapsLocked);
}
