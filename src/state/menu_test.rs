use super::*;

#[test]
fn starts_closed() {
    let menu = MenuState::default();
    assert!(!menu.open);
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
    assert_eq!(menu.aria_expanded(), "true");
    menu.toggle();
    assert!(!menu.open);
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn close_forces_closed_and_is_idempotent() {
    let mut menu = MenuState::default();
    menu.toggle();
    menu.close();
    assert!(!menu.open);
    menu.close();
    assert!(!menu.open);
}
