use crate::roster::Roster;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// `initialize` was called on a store that already holds a session.
    /// Re-initialization goes through a full session reset, never a partial
    /// update.
    AlreadyInitialized,
    /// `set_pending` was called with an id that is not in the roster. This is
    /// an integration error; the store ignores the write.
    UnknownMember(i64),
}

impl fmt::Display for MembershipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipError::AlreadyInitialized => {
                write!(f, "membership store is already initialized")
            }
            MembershipError::UnknownMember(id) => {
                write!(f, "profile id {} is not in the roster", id)
            }
        }
    }
}

impl Error for MembershipError {}

/// Two-phase inclusion state over the roster.
///
/// `committed` is what the live wheel reflects; `pending` is the staged draft
/// an open editor mutates. Both maps hold exactly one entry per roster member
/// from `initialize` onward, and they never share storage: every transition
/// between them is a wholesale value copy, so an edit session can never leak
/// into the live state by aliasing.
#[derive(Debug, Default)]
pub struct MembershipStore {
    committed: HashMap<i64, bool>,
    pending: HashMap<i64, bool>,
}

impl MembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds both maps with every roster member included. Valid once per
    /// session.
    pub fn initialize(&mut self, roster: &Roster) -> Result<(), MembershipError> {
        if !self.committed.is_empty() {
            return Err(MembershipError::AlreadyInitialized);
        }
        for member in roster.members() {
            self.committed.insert(member.profile_id, true);
            self.pending.insert(member.profile_id, true);
        }
        Ok(())
    }

    /// Starts an edit session: the draft is re-synchronized from the
    /// committed state, dropping any stale values left by a previous
    /// non-confirmed session.
    pub fn begin_edit(&mut self) {
        self.pending = self.committed.clone();
    }

    /// Stages one inclusion change. Writes for ids outside the roster are
    /// rejected so the one-entry-per-member invariant holds.
    pub fn set_pending(&mut self, profile_id: i64, included: bool) -> Result<(), MembershipError> {
        match self.pending.get_mut(&profile_id) {
            Some(entry) => {
                *entry = included;
                Ok(())
            }
            None => Err(MembershipError::UnknownMember(profile_id)),
        }
    }

    /// Folds the draft into the committed state in one step. Callers never
    /// observe a partially applied change.
    pub fn commit(&mut self) {
        self.committed = self.pending.clone();
    }

    /// Throws the draft away, restoring it to the committed state.
    pub fn discard(&mut self) {
        self.pending = self.committed.clone();
    }

    pub fn committed(&self) -> &HashMap<i64, bool> {
        &self.committed
    }

    pub fn committed_included(&self, profile_id: i64) -> bool {
        self.committed.get(&profile_id).copied().unwrap_or(false)
    }

    pub fn pending_included(&self, profile_id: i64) -> bool {
        self.pending.get(&profile_id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Member;

    fn roster() -> Roster {
        Roster::new(
            [(1, "A"), (2, "B"), (3, "C")]
                .into_iter()
                .map(|(id, name)| Member {
                    profile_id: id,
                    nickname: name.to_string(),
                    role: None,
                })
                .collect(),
        )
    }

    fn initialized_store() -> MembershipStore {
        let mut store = MembershipStore::new();
        store.initialize(&roster()).unwrap();
        store
    }

    #[test]
    fn initialize_includes_every_member_in_both_maps() {
        let store = initialized_store();
        assert_eq!(store.committed().len(), 3);
        for id in [1, 2, 3] {
            assert!(store.committed_included(id));
            assert!(store.pending_included(id));
        }
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let mut store = initialized_store();
        assert_eq!(
            store.initialize(&roster()),
            Err(MembershipError::AlreadyInitialized)
        );
    }

    #[test]
    fn set_pending_unknown_member_is_rejected_without_side_effects() {
        let mut store = initialized_store();
        assert_eq!(
            store.set_pending(99, false),
            Err(MembershipError::UnknownMember(99))
        );
        assert_eq!(store.committed().len(), 3);
        assert!(!store.pending_included(99));
    }

    #[test]
    fn commit_folds_draft_into_committed() {
        let mut store = initialized_store();
        store.begin_edit();
        store.set_pending(2, false).unwrap();
        assert!(store.committed_included(2), "commit not yet applied");
        store.commit();
        assert!(!store.committed_included(2));
        assert!(store.committed_included(1));
    }

    #[test]
    fn discard_restores_draft_from_committed() {
        let mut store = initialized_store();
        store.begin_edit();
        store.set_pending(2, false).unwrap();
        store.discard();
        assert!(store.pending_included(2));
        assert!(store.committed_included(2));
    }

    #[test]
    fn begin_edit_drops_stale_draft_from_previous_session() {
        let mut store = initialized_store();
        store.begin_edit();
        store.set_pending(3, false).unwrap();
        // Session abandoned without commit or discard; the next open must
        // still reflect the committed state.
        store.begin_edit();
        assert!(store.pending_included(3));
    }
}
