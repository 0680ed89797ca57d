use crate::roster::Roster;
use std::collections::HashMap;

/// Projects the committed membership onto an ordered list of wheel labels.
///
/// Pure and deterministic: roster order in, roster order out, included
/// members only. The result is rebuilt wholesale after every commit; nothing
/// ever patches a previous entries value in place. An empty result is legal
/// (everyone excluded) and it is the spin path's job to refuse it.
pub fn build_entries(roster: &Roster, committed: &HashMap<i64, bool>) -> Vec<String> {
    roster
        .members()
        .iter()
        .filter(|m| committed.get(&m.profile_id).copied().unwrap_or(false))
        .map(|m| m.nickname.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipStore;
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

    #[test]
    fn full_inclusion_preserves_roster_order() {
        let roster = roster();
        let mut store = MembershipStore::new();
        store.initialize(&roster).unwrap();
        assert_eq!(build_entries(&roster, store.committed()), ["A", "B", "C"]);
    }

    #[test]
    fn excluded_members_are_filtered_in_order() {
        let roster = roster();
        let mut store = MembershipStore::new();
        store.initialize(&roster).unwrap();
        store.begin_edit();
        store.set_pending(2, false).unwrap();
        store.commit();
        assert_eq!(build_entries(&roster, store.committed()), ["A", "C"]);
    }

    #[test]
    fn excluding_everyone_yields_empty_entries() {
        let roster = roster();
        let mut store = MembershipStore::new();
        store.initialize(&roster).unwrap();
        store.begin_edit();
        for id in [1, 2, 3] {
            store.set_pending(id, false).unwrap();
        }
        store.commit();
        assert!(build_entries(&roster, store.committed()).is_empty());
    }
}
