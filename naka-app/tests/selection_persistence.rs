//! The chosen restaurant survives a restart, and a stale id falls back
//! to the chooser prompt.

use naka_app::config::{Selection, SelectionStore};
use naka_app::state::State;

#[test]
fn selection_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = SelectionStore::new(dir.path());
        store
            .save(&Selection {
                restaurant_id: Some("merlin".to_owned()),
            })
            .unwrap();
    }

    // Fresh session over the same directory.
    let state = State::new(SelectionStore::new(dir.path()), None);
    assert_eq!(state.selected, Some("merlin".into()));
    assert!(!state.show_restaurant_prompt);
}

#[test]
fn unknown_stored_id_reopens_the_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let store = SelectionStore::new(dir.path());
    store
        .save(&Selection {
            restaurant_id: Some("closed-location".to_owned()),
        })
        .unwrap();

    let state = State::new(SelectionStore::new(dir.path()), None);
    assert_eq!(state.selected, None);
    assert!(state.show_restaurant_prompt);
}

#[test]
fn corrupt_file_counts_as_absence() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("selection.json"), "not json {").unwrap();

    let store = SelectionStore::new(dir.path());
    assert_eq!(store.load().restaurant_id, None);

    let state = State::new(store, None);
    assert!(state.show_restaurant_prompt);
}

#[test]
fn deep_link_preselection_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let state = State::new(
        SelectionStore::new(dir.path()),
        Some("/carte?restaurant=voltaire".to_owned()),
    );
    assert_eq!(state.selected, Some("voltaire".into()));
    assert!(!state.show_restaurant_prompt);

    // The write happened, so a second session sees the same choice.
    let next = State::new(SelectionStore::new(dir.path()), None);
    assert_eq!(next.selected, Some("voltaire".into()));
}
