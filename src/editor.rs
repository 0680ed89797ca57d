use crate::membership::MembershipStore;
use log::warn;

/// Modal edit session over the membership store.
///
/// The dialog UI renders rows from `(pending, roster)`; this module only
/// mediates the store transitions. While no session is active every mutation
/// is a defensive no-op, mirroring the modal dialog being closed.
#[derive(Debug, Default)]
pub struct State {
    active: bool,
}

pub fn init() -> State {
    State::default()
}

impl State {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Opens the editor: the draft is refreshed from the committed state so the
/// dialog always shows the last confirmed selection.
pub fn open(state: &mut State, store: &mut MembershipStore) {
    if state.active {
        warn!("Editor opened while already open; refreshing draft");
    }
    store.begin_edit();
    state.active = true;
}

/// Inverts one member's staged inclusion. Returns the new staged value, or
/// `None` when the toggle was rejected (editor closed or unknown id).
pub fn toggle(state: &State, store: &mut MembershipStore, profile_id: i64) -> Option<bool> {
    if !state.active {
        warn!("Toggle for profile {} ignored: editor is not open", profile_id);
        return None;
    }
    let next = !store.pending_included(profile_id);
    match store.set_pending(profile_id, next) {
        Ok(()) => Some(next),
        Err(e) => {
            warn!("Toggle rejected: {}", e);
            None
        }
    }
}

/// Confirms the session: the draft becomes the committed state. The caller
/// rebuilds the wheel entries afterwards.
pub fn confirm(state: &mut State, store: &mut MembershipStore) {
    if !state.active {
        warn!("Confirm ignored: editor is not open");
        return;
    }
    store.commit();
    state.active = false;
}

/// Closes the session without confirmation; the draft is discarded and the
/// committed state is untouched.
pub fn cancel(state: &mut State, store: &mut MembershipStore) {
    if !state.active {
        warn!("Cancel ignored: editor is not open");
        return;
    }
    store.discard();
    state.active = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Member, Roster};

    fn store() -> MembershipStore {
        let roster = Roster::new(
            [(1, "A"), (2, "B"), (3, "C")]
                .into_iter()
                .map(|(id, name)| Member {
                    profile_id: id,
                    nickname: name.to_string(),
                    role: None,
                })
                .collect(),
        );
        let mut store = MembershipStore::new();
        store.initialize(&roster).unwrap();
        store
    }

    #[test]
    fn toggle_flips_pending_only() {
        let mut store = store();
        let mut state = init();
        open(&mut state, &mut store);
        assert_eq!(toggle(&state, &mut store, 2), Some(false));
        assert!(!store.pending_included(2));
        assert!(store.committed_included(2));
    }

    #[test]
    fn double_toggle_restores_inclusion() {
        let mut store = store();
        let mut state = init();
        open(&mut state, &mut store);
        assert_eq!(toggle(&state, &mut store, 2), Some(false));
        assert_eq!(toggle(&state, &mut store, 2), Some(true));
        assert!(store.pending_included(2));
    }

    #[test]
    fn confirm_commits_and_closes() {
        let mut store = store();
        let mut state = init();
        open(&mut state, &mut store);
        toggle(&state, &mut store, 2);
        confirm(&mut state, &mut store);
        assert!(!state.is_active());
        assert!(!store.committed_included(2));
    }

    #[test]
    fn cancel_discards_and_closes() {
        let mut store = store();
        let mut state = init();
        open(&mut state, &mut store);
        toggle(&state, &mut store, 2);
        cancel(&mut state, &mut store);
        assert!(!state.is_active());
        assert!(store.committed_included(2));
        assert!(store.pending_included(2));
    }

    #[test]
    fn reopen_after_confirm_shows_committed_not_stale_draft() {
        let mut store = store();
        let mut state = init();
        open(&mut state, &mut store);
        toggle(&state, &mut store, 2);
        confirm(&mut state, &mut store);

        open(&mut state, &mut store);
        assert!(!store.pending_included(2));
        assert!(store.pending_included(1));
    }

    #[test]
    fn toggle_while_closed_is_ignored() {
        let mut store = store();
        let state = init();
        assert_eq!(toggle(&state, &mut store, 2), None);
        assert!(store.pending_included(2));
    }

    #[test]
    fn toggle_unknown_member_is_ignored() {
        let mut store = store();
        let mut state = init();
        open(&mut state, &mut store);
        assert_eq!(toggle(&state, &mut store, 99), None);
    }
}
