use serde::Deserialize;

/// One family member as delivered by the roster source.
///
/// `profile_id` is the only reliable identity; nicknames are free text chosen
/// by the family and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub profile_id: i64,
    pub nickname: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Ordered member list for the current session, fixed once loaded.
///
/// The order of `members` is the canonical display and iteration order used
/// by everything downstream (wheel entries, editor rows, label resolution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Roster { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Resolves a wheel label back to a member: first nickname match in
    /// roster order.
    ///
    /// The animation reports a display string rather than an identity, so
    /// duplicate nicknames are ambiguous by construction. First-in-order is
    /// the compatible policy; swapping the animation to an index-based
    /// protocol would make this function (and the ambiguity) go away.
    pub fn resolve_label(&self, label: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.nickname == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, nickname: &str) -> Member {
        Member {
            profile_id: id,
            nickname: nickname.to_string(),
            role: None,
        }
    }

    #[test]
    fn resolve_label_finds_member_by_nickname() {
        let roster = Roster::new(vec![member(1, "A"), member(2, "B")]);
        assert_eq!(roster.resolve_label("B").map(|m| m.profile_id), Some(2));
    }

    #[test]
    fn resolve_label_prefers_first_in_roster_order_on_duplicates() {
        let roster = Roster::new(vec![member(7, "Twin"), member(8, "Twin")]);
        assert_eq!(roster.resolve_label("Twin").map(|m| m.profile_id), Some(7));
    }

    #[test]
    fn resolve_label_misses_unknown_nickname() {
        let roster = Roster::new(vec![member(1, "A")]);
        assert!(roster.resolve_label("Z").is_none());
    }

    #[test]
    fn member_deserializes_from_camel_case_payload() {
        let m: Member =
            serde_json::from_str(r#"{"profileId": 3, "nickname": "Mom", "role": "MOTHER"}"#)
                .unwrap();
        assert_eq!(m.profile_id, 3);
        assert_eq!(m.nickname, "Mom");
        assert_eq!(m.role.as_deref(), Some("MOTHER"));
    }
}
