use super::*;

#[test]
fn enter_is_the_commit_key() {
    assert!(KeyEvent::simple(KeyCode::Enter).is_commit());
    assert!(!KeyEvent::simple(KeyCode::Char('\r')).is_commit());
    assert!(!KeyEvent::simple(KeyCode::Esc).is_commit());
}

#[test]
fn pointer_event_carries_modifier_snapshot() {
    let e = PointerEvent::new(1.0, 2.0).with_modifiers(Modifiers::SHIFT);
    assert_eq!(e.pos, Pos::new(1.0, 2.0));
    assert!(e.modifiers.shift);
    assert!(!e.modifiers.ctrl);
}

#[test]
fn default_modifiers_are_none() {
    assert_eq!(Modifiers::default(), Modifiers::NONE);
    assert_ne!(Modifiers::CTRL, Modifiers::SHIFT);
}
