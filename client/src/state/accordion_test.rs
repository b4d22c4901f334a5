use super::*;

#[test]
fn accordion_starts_with_first_item_open() {
    let state = AccordionState::new(6);
    assert_eq!(state.open_index(), Some(0));
    assert!(state.is_open(0));
    assert!(!state.is_open(1));
}

#[test]
fn accordion_empty_list_has_nothing_open() {
    let mut state = AccordionState::new(0);
    assert!(state.is_empty());
    assert_eq!(state.open_index(), None);
    state.toggle(0);
    state.select(0);
    assert_eq!(state.open_index(), None);
}

#[test]
fn accordion_toggle_switches_open_item() {
    let mut state = AccordionState::new(6);
    state.toggle(3);
    assert_eq!(state.open_index(), Some(3));
    assert!(!state.is_open(0));
}

#[test]
fn accordion_double_toggle_closes() {
    let mut state = AccordionState::new(6);
    state.toggle(2);
    state.toggle(2);
    assert_eq!(state.open_index(), None);

    state.toggle(0);
    assert_eq!(state.open_index(), Some(0));
}

#[test]
fn accordion_toggle_open_default_closes_it() {
    let mut state = AccordionState::new(3);
    state.toggle(0);
    assert_eq!(state.open_index(), None);
}

#[test]
fn accordion_out_of_range_is_noop() {
    let mut state = AccordionState::new(3);
    state.toggle(3);
    state.select(99);
    assert_eq!(state.open_index(), Some(0));
}

#[test]
fn accordion_select_never_closes() {
    let mut state = AccordionState::new(3);
    state.select(1);
    state.select(1);
    assert_eq!(state.open_index(), Some(1));
    assert_eq!(state.len(), 3);
}
