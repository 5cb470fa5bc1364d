//! The state machine engine.

use crate::core::{ChangeKind, Config, EventName, Journal, JournalEntry, StateName};
use crate::engine::history::History;
use crate::error::FsmError;
use tracing::{debug, trace};

/// Configuration-driven state machine with single-step undo and redo.
///
/// The machine tracks an active state plus one previous and one next state.
/// Only [`Fsm::trigger`] records a previous state; [`Fsm::change_state`]
/// moves the machine without making the old state reachable through undo.
///
/// # Example
///
/// ```rust
/// use pocket_fsm::core::{Config, TransitionTable};
/// use pocket_fsm::Fsm;
///
/// let config = Config::new("idle")
///     .with_state("idle", TransitionTable::new().with("start", "running"))
///     .with_state("running", TransitionTable::new().with("stop", "idle"));
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.state(), "running");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "idle");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Config,
    active: StateName,
    history: History,
    journal: Journal,
}

impl Fsm {
    /// Create a machine sitting in the configuration's initial state.
    ///
    /// The configuration is taken as-is. An `initial` state or transition
    /// target missing from `states` only surfaces as an error once an
    /// operation reaches it.
    pub fn new(config: Config) -> Self {
        let active = config.initial.clone();
        let history = History::anchored(&active);
        Self {
            config,
            active,
            history,
            journal: Journal::new(),
        }
    }

    /// Create a machine from JSON text.
    ///
    /// A `null` document means no configuration was supplied and fails with
    /// [`FsmError::ConfigMissing`].
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<Config> =
            serde_json::from_str(json).map_err(|e| FsmError::InvalidConfig(e.to_string()))?;
        config.map(Self::new).ok_or(FsmError::ConfigMissing)
    }

    /// Keep at most `capacity` journal entries; zero turns journaling off.
    ///
    /// Entries already recorded beyond the new bound are dropped, oldest first.
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        let mut journal = Journal::with_capacity(capacity);
        for entry in self.journal.entries() {
            journal.push(entry.clone());
        }
        self.journal = journal;
        self
    }

    /// Current state (pure).
    pub fn state(&self) -> &StateName {
        &self.active
    }

    /// State `undo` would return to, if any (pure).
    pub fn previous_state(&self) -> Option<&StateName> {
        self.history.previous()
    }

    /// State `redo` would advance to, if any (pure).
    pub fn next_state(&self) -> Option<&StateName> {
        self.history.next()
    }

    /// The configuration this machine runs over (pure).
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Most recent state changes, up to the journal's capacity (pure).
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Jump to any configured state, ignoring transition rules.
    ///
    /// Sets the next state to the target but leaves the previous state
    /// alone, so the jump itself cannot be undone.
    pub fn change_state(&mut self, state: impl AsRef<str>) -> Result<(), FsmError> {
        let target = self.resolve(state.as_ref())?;
        self.enter(target, ChangeKind::Jump);
        Ok(())
    }

    /// Follow the active state's transition for `event`.
    ///
    /// On success the state being left becomes the previous state and the
    /// target becomes both the active and the next state.
    pub fn trigger(&mut self, event: impl AsRef<str>) -> Result<(), FsmError> {
        let event = event.as_ref();
        let target = self
            .config
            .table(self.active.as_str())
            .and_then(|table| table.target(event))
            .ok_or_else(|| FsmError::UnknownEvent {
                event: EventName::from(event),
                state: self.active.clone(),
            })?;
        let target = self.resolve(target.as_str())?;

        self.history.depart(self.active.clone());
        self.enter(
            target,
            ChangeKind::Trigger {
                event: EventName::from(event),
            },
        );
        Ok(())
    }

    /// Whether `event` is defined for the active state (pure).
    pub fn can_trigger(&self, event: impl AsRef<str>) -> bool {
        self.config
            .table(self.active.as_str())
            .is_some_and(|table| table.handles(event.as_ref()))
    }

    /// Events defined for the active state, in configuration order (pure).
    pub fn events(&self) -> Vec<EventName> {
        self.config
            .table(self.active.as_str())
            .map(|table| table.events().cloned().collect())
            .unwrap_or_default()
    }

    /// Return to the initial state.
    ///
    /// Previous and next states are left as they were, so undo and redo may
    /// still jump relative to the pre-reset history.
    pub fn reset(&mut self) {
        let initial = self.config.initial.clone();
        self.transition_to(initial, ChangeKind::Reset);
    }

    /// Configured state names, in configuration order.
    ///
    /// With `Some(event)` only states whose transition table defines that
    /// event are returned. An empty event name counts as no event and lists
    /// every state. Each call builds a fresh list.
    pub fn states(&self, event: Option<&str>) -> Vec<StateName> {
        let event = event.filter(|event| !event.is_empty());
        self.config
            .states
            .iter()
            .filter(|(_, table)| event.is_none_or(|event| table.handles(event)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All configured state names.
    pub fn all_states(&self) -> Vec<StateName> {
        self.states(None)
    }

    /// States that define a transition for `event`.
    pub fn states_for(&self, event: impl AsRef<str>) -> Vec<StateName> {
        self.states(Some(event.as_ref()))
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` without changing anything when there is no previous
    /// state, or when the machine is in its initial state and the previous
    /// state is that same state. History is not shifted, so repeating undo
    /// keeps landing on the same previous state.
    pub fn undo(&mut self) -> bool {
        let Some(target) = self
            .history
            .undo_target(&self.active, &self.config.initial)
            .cloned()
        else {
            trace!(state = %self.active, "Undo unavailable");
            return false;
        };

        self.transition_to(target, ChangeKind::Undo);
        true
    }

    /// Step forward to the next state.
    ///
    /// Returns `false` without changing anything when there is no next state
    /// or the machine is already in it. Because every trigger and jump sets
    /// the next state to the state entered, redo only becomes available after
    /// an undo.
    pub fn redo(&mut self) -> bool {
        let Some(target) = self.history.redo_target(&self.active).cloned() else {
            trace!(state = %self.active, "Redo unavailable");
            return false;
        };

        self.transition_to(target, ChangeKind::Redo);
        true
    }

    /// Forget the previous and next states.
    ///
    /// Undo and redo both return `false` until a trigger or jump records
    /// new history. The journal is kept.
    pub fn clear_history(&mut self) {
        debug!(state = %self.active, "Clearing undo/redo history");
        self.history.clear();
    }

    /// Drop all journal entries, keeping the journal's capacity.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    fn resolve(&self, state: &str) -> Result<StateName, FsmError> {
        self.config
            .states
            .get_key_value(state)
            .map(|(name, _)| name.clone())
            .ok_or_else(|| FsmError::UnknownState {
                state: StateName::from(state),
            })
    }

    /// Enter `target` and remember it as the next state.
    fn enter(&mut self, target: StateName, kind: ChangeKind) {
        self.history.arrive(target.clone());
        self.transition_to(target, kind);
    }

    /// Move the active state and journal the change.
    fn transition_to(&mut self, target: StateName, kind: ChangeKind) {
        let from = std::mem::replace(&mut self.active, target);
        debug!(from = %from, to = %self.active, kind = ?kind, "State changed");
        self.journal
            .push(JournalEntry::now(from, self.active.clone(), kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TransitionTable, DEFAULT_JOURNAL_CAPACITY};

    fn player() -> Config {
        Config::new("idle")
            .with_state("idle", TransitionTable::new().with("start", "running"))
            .with_state(
                "running",
                TransitionTable::new()
                    .with("stop", "idle")
                    .with("pause", "paused"),
            )
            .with_state("paused", TransitionTable::new().with("resume", "running"))
    }

    fn snapshot(fsm: &Fsm) -> (StateName, Option<StateName>, Option<StateName>) {
        (
            fsm.state().clone(),
            fsm.previous_state().cloned(),
            fsm.next_state().cloned(),
        )
    }

    #[test]
    fn new_machine_starts_at_initial() {
        let fsm = Fsm::new(player());

        assert_eq!(fsm.state(), "idle");
        assert_eq!(fsm.previous_state().unwrap(), "idle");
        assert_eq!(fsm.next_state().unwrap(), "idle");
        assert!(fsm.journal().is_empty());
    }

    #[test]
    fn from_json_null_is_config_missing() {
        let result = Fsm::from_json("null");
        assert_eq!(result.unwrap_err(), FsmError::ConfigMissing);
    }

    #[test]
    fn from_json_builds_machine() {
        let fsm = Fsm::from_json(
            r#"{"initial": "off", "states": {"off": {"transitions": {"flip": "on"}}, "on": {}}}"#,
        )
        .unwrap();

        assert_eq!(fsm.state(), "off");
        assert!(fsm.can_trigger("flip"));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        assert!(matches!(
            Fsm::from_json("{not json"),
            Err(FsmError::InvalidConfig(_))
        ));
    }

    #[test]
    fn change_state_moves_without_recording_previous() {
        let mut fsm = Fsm::new(player());

        fsm.change_state("paused").unwrap();

        assert_eq!(fsm.state(), "paused");
        assert_eq!(fsm.next_state().unwrap(), "paused");
        assert_eq!(fsm.previous_state().unwrap(), "idle");
    }

    #[test]
    fn change_state_rejects_unknown_state() {
        let mut fsm = Fsm::new(player());
        let before = snapshot(&fsm);

        let err = fsm.change_state("stopped").unwrap_err();

        assert_eq!(
            err,
            FsmError::UnknownState {
                state: "stopped".into()
            }
        );
        assert_eq!(snapshot(&fsm), before);
        assert!(fsm.journal().is_empty());
    }

    #[test]
    fn trigger_records_previous_and_next() {
        let mut fsm = Fsm::new(player());

        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();

        assert_eq!(fsm.state(), "paused");
        assert_eq!(fsm.previous_state().unwrap(), "running");
        assert_eq!(fsm.next_state().unwrap(), "paused");
    }

    #[test]
    fn trigger_rejects_unknown_event() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        let before = snapshot(&fsm);

        let err = fsm.trigger("resume").unwrap_err();

        assert_eq!(
            err,
            FsmError::UnknownEvent {
                event: "resume".into(),
                state: "running".into(),
            }
        );
        assert_eq!(snapshot(&fsm), before);
    }

    #[test]
    fn trigger_to_missing_target_leaves_machine_untouched() {
        let config = Config::new("a")
            .with_state("a", TransitionTable::new().with("go", "nowhere"));
        let mut fsm = Fsm::new(config);
        let before = snapshot(&fsm);

        let err = fsm.trigger("go").unwrap_err();

        assert_eq!(
            err,
            FsmError::UnknownState {
                state: "nowhere".into()
            }
        );
        assert_eq!(snapshot(&fsm), before);
    }

    #[test]
    fn trigger_from_unconfigured_initial_is_unknown_event() {
        let config = Config::new("ghost").with_state("a", TransitionTable::new());
        let mut fsm = Fsm::new(config);

        let err = fsm.trigger("go").unwrap_err();

        assert!(matches!(err, FsmError::UnknownEvent { .. }));
        assert_eq!(fsm.state(), "ghost");
    }

    #[test]
    fn undo_and_redo_round_trip() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "idle");

        assert!(fsm.redo());
        assert_eq!(fsm.state(), "running");
    }

    #[test]
    fn undo_unavailable_right_after_construction() {
        let mut fsm = Fsm::new(player());

        assert!(!fsm.undo());
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn redo_unavailable_right_after_trigger() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();

        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "running");
    }

    #[test]
    fn repeated_undo_stays_on_same_previous() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "running");

        // Only one step is tracked; a second undo targets the same state.
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "running");
    }

    #[test]
    fn undo_after_jump_returns_to_state_before_last_trigger() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.change_state("paused").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "idle");
        assert!(fsm.redo());
        assert_eq!(fsm.state(), "paused");
    }

    #[test]
    fn clear_history_disables_undo_and_redo() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.undo();

        fsm.clear_history();

        assert!(fsm.previous_state().is_none());
        assert!(fsm.next_state().is_none());
        assert!(!fsm.undo());
        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn trigger_after_clear_restores_history() {
        let mut fsm = Fsm::new(player());
        fsm.clear_history();

        fsm.trigger("start").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn reset_keeps_stale_history() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();

        fsm.reset();

        assert_eq!(fsm.state(), "idle");
        assert_eq!(fsm.previous_state().unwrap(), "running");
        assert_eq!(fsm.next_state().unwrap(), "paused");

        assert!(fsm.redo());
        assert_eq!(fsm.state(), "paused");
    }

    #[test]
    fn states_lists_in_configuration_order() {
        let fsm = Fsm::new(player());

        assert_eq!(fsm.states(None), vec!["idle", "running", "paused"]);
        assert_eq!(fsm.all_states(), fsm.states(None));
    }

    #[test]
    fn states_filters_by_event() {
        let fsm = Fsm::new(player());

        assert_eq!(fsm.states_for("stop"), vec!["running"]);
        assert_eq!(fsm.states(Some("resume")), vec!["paused"]);
        assert!(fsm.states_for("eject").is_empty());
    }

    #[test]
    fn events_follow_active_state() {
        let mut fsm = Fsm::new(player());
        assert_eq!(fsm.events(), vec![EventName::from("start")]);

        fsm.trigger("start").unwrap();
        assert_eq!(fsm.events(), vec![EventName::from("stop"), EventName::from("pause")]);
        assert!(fsm.can_trigger("pause"));
        assert!(!fsm.can_trigger("start"));
    }

    #[test]
    fn journal_records_each_change() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();
        fsm.undo();
        fsm.redo();
        fsm.change_state("paused").unwrap();
        fsm.reset();
        let _ = fsm.trigger("bogus");

        let kinds: Vec<&ChangeKind> = fsm.journal().entries().map(|e| &e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &ChangeKind::Trigger {
                    event: "start".into()
                },
                &ChangeKind::Undo,
                &ChangeKind::Redo,
                &ChangeKind::Jump,
                &ChangeKind::Reset,
            ]
        );

        let path = fsm.journal().path();
        assert_eq!(path, vec!["idle", "running", "idle", "running", "paused", "idle"]);

        fsm.clear_journal();
        assert!(fsm.journal().is_empty());
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn empty_event_lists_every_state() {
        let fsm = Fsm::new(player());

        assert_eq!(fsm.states(Some("")), fsm.states(None));
        assert_eq!(fsm.states_for(""), vec!["idle", "running", "paused"]);
    }

    #[test]
    fn long_runs_keep_journal_bounded() {
        let mut fsm = Fsm::new(player());
        let started = std::time::Instant::now();

        for _ in 0..25_000 {
            fsm.trigger("start").unwrap();
            fsm.trigger("stop").unwrap();
        }

        assert_eq!(fsm.journal().len(), DEFAULT_JOURNAL_CAPACITY);
        assert_eq!(fsm.journal().last().unwrap().to, "idle");
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }

    #[test]
    fn journal_capacity_is_configurable() {
        let mut fsm = Fsm::new(player()).with_journal_capacity(2);
        fsm.trigger("start").unwrap();
        fsm.trigger("pause").unwrap();
        fsm.trigger("resume").unwrap();

        let kinds: Vec<&ChangeKind> = fsm.journal().entries().map(|e| &e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &ChangeKind::Trigger {
                    event: "pause".into()
                },
                &ChangeKind::Trigger {
                    event: "resume".into()
                },
            ]
        );

        fsm.clear_journal();
        fsm.trigger("stop").unwrap();
        assert_eq!(fsm.journal().capacity(), 2);
        assert_eq!(fsm.journal().len(), 1);
    }

    #[test]
    fn disabled_journal_still_tracks_history() {
        let mut fsm = Fsm::new(player()).with_journal_capacity(0);
        fsm.trigger("start").unwrap();

        assert!(fsm.journal().is_empty());
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn clear_history_keeps_journal() {
        let mut fsm = Fsm::new(player());
        fsm.trigger("start").unwrap();

        fsm.clear_history();

        assert_eq!(fsm.journal().len(), 1);
    }
}
