use super::*;

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut state = TextsState { error: Some("old".to_owned()), ..TextsState::default() };
    let ticket = state.begin_load();
    assert!(state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(ticket, state.generation);
}

#[test]
fn finish_load_replaces_items() {
    let mut state = TextsState::default();
    let first = state.begin_load();
    assert!(state.finish_load(first, vec![Item::new(1, 0, "a")]));
    let second = state.begin_load();
    assert!(state.finish_load(second, vec![Item::new(2, 0, "b"), Item::new(3, 0, "c")]));
    assert!(!state.is_loading);
    assert_eq!(state.items.iter().map(|i| i.step).collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = TextsState::default();
    let slow = state.begin_load();
    let fast = state.begin_load();
    assert!(state.finish_load(fast, vec![Item::new(2, 0, "new")]));
    assert!(!state.finish_load(slow, vec![Item::new(1, 0, "old")]));
    assert_eq!(state.items, vec![Item::new(2, 0, "new")]);
}

#[test]
fn stale_failure_does_not_clear_loading() {
    let mut state = TextsState::default();
    let slow = state.begin_load();
    let _current = state.begin_load();
    assert!(!state.fail_load(slow, "timeout"));
    assert!(state.is_loading);
    assert_eq!(state.error, None);
}

#[test]
fn fail_load_keeps_previous_items() {
    let mut state = TextsState::default();
    let first = state.begin_load();
    state.finish_load(first, vec![Item::new(1, 0, "a")]);
    let second = state.begin_load();
    assert!(state.fail_load(second, "texts request failed: 500"));
    assert!(!state.is_loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("texts request failed: 500"));
}
