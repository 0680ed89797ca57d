use crate::anim::WheelAnimator;
use crate::editor;
use crate::membership::{MembershipError, MembershipStore};
use crate::roster::Roster;
use crate::spin::{SpinEngine, SpinError, SpinResult, SpinState};
use crate::wheel;
use chrono::{DateTime, Local};
use log::{debug, info};
use rand::Rng;
use std::sync::mpsc::{self, Receiver};

/// One resolved spin, kept for the session-local history view. Nothing here
/// is persisted across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinRecord {
    pub member: crate::roster::Member,
    pub at: DateTime<Local>,
}

/// Owns the whole wheel session: roster, membership state, editor session,
/// spin engine, the current entries snapshot, and the spin history. Created
/// when the roster load succeeds and dropped when the user leaves; this is
/// the only component that knows all the others.
pub struct WheelController {
    roster: Roster,
    store: MembershipStore,
    editor: editor::State,
    engine: SpinEngine,
    entries: Vec<String>,
    history: Vec<SpinRecord>,
}

impl WheelController {
    /// Builds a session from a freshly loaded roster: everyone included,
    /// entries derived once.
    pub fn new(roster: Roster) -> Result<Self, MembershipError> {
        let mut store = MembershipStore::new();
        store.initialize(&roster)?;
        let entries = wheel::build_entries(&roster, store.committed());
        info!("Wheel session started with {} members", roster.len());
        Ok(WheelController {
            roster,
            store,
            editor: editor::init(),
            engine: SpinEngine::new(),
            entries,
            history: Vec::new(),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current wheel labels. Replaced wholesale on every confirm; callers
    /// must treat each value as a full snapshot.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn history(&self) -> &[SpinRecord] {
        &self.history
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_active()
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.state() == SpinState::Spinning
    }

    /// Staged inclusion for one member, for rendering the editor rows.
    pub fn pending_included(&self, profile_id: i64) -> bool {
        self.store.pending_included(profile_id)
    }

    /// Confirmed inclusion for one member, for rendering the wheel screen.
    pub fn committed_included(&self, profile_id: i64) -> bool {
        self.store.committed_included(profile_id)
    }

    pub fn open_editor(&mut self) {
        editor::open(&mut self.editor, &mut self.store);
    }

    pub fn toggle_member(&mut self, profile_id: i64) -> Option<bool> {
        editor::toggle(&self.editor, &mut self.store, profile_id)
    }

    /// Confirms the staged edit and rebuilds the entries snapshot.
    pub fn confirm_edit(&mut self) {
        editor::confirm(&mut self.editor, &mut self.store);
        self.entries = wheel::build_entries(&self.roster, self.store.committed());
        debug!("Entries rebuilt after confirm: {:?}", self.entries);
    }

    /// Closes the editor without confirmation; committed state and entries
    /// stay as they were.
    pub fn cancel_edit(&mut self) {
        editor::cancel(&mut self.editor, &mut self.store);
    }

    /// Starts a spin: guards on non-empty entries and no outstanding spin,
    /// then hands the label set and rotation to the animator. The returned
    /// receiver delivers the landing label exactly once; the caller feeds it
    /// back through [`animation_resolved`](Self::animation_resolved).
    pub fn start_spin<R: Rng>(
        &mut self,
        rng: &mut R,
        animator: &mut dyn WheelAnimator,
    ) -> Result<Receiver<String>, SpinError> {
        let plan = self.engine.spin(&self.entries, rng)?;
        animator.configure(self.entries.len(), &self.entries);
        let (tx, rx) = mpsc::channel();
        animator.rotate(
            plan.angle_degrees,
            plan.duration_ms,
            Box::new(move |label| {
                // The receiver may already be gone if the session ended
                // mid-spin; the result is simply dropped then.
                let _ = tx.send(label);
            }),
        );
        Ok(rx)
    }

    /// Routes the animation's landing label into the engine and records the
    /// outcome. An unresolved result is returned as-is so the UI can show a
    /// retry message instead of a member.
    pub fn animation_resolved(&mut self, raw_label: &str) -> Result<SpinResult, SpinError> {
        let result = self.engine.animation_resolved(raw_label, &self.roster)?;
        if let Some(member) = &result.resolved {
            self.history.push(SpinRecord {
                member: member.clone(),
                at: Local::now(),
            });
        }
        Ok(result)
    }
}
