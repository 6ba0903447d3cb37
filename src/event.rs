// Copyright 2025 Cowboy AI, LLC.

//! Event definitions
//!
//! An event is a named transition between case states, gated by the roles it
//! is granted to. Definitions are plain values: they are assembled by feature
//! modules and owned by the registry once added.

use crate::case_type::{CaseRole, CaseState};
use crate::errors::{ConfigError, ConfigResult};
use crate::identifiers::EventId;
use crate::permission::Permissions;
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;

/// States an event may be triggered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreStates<S: CaseState> {
    /// Any state of the case type
    Any,
    /// No state: the event creates the case
    Initial,
    /// Only the listed states
    States(BTreeSet<S>),
}

impl<S: CaseState> PreStates<S> {
    /// Whether the event can be triggered from `state`
    pub fn contains(&self, state: &S) -> bool {
        match self {
            PreStates::Any => true,
            PreStates::Initial => false,
            PreStates::States(states) => states.contains(state),
        }
    }

    /// Whether this is a case creation event
    pub fn is_initial(&self) -> bool {
        matches!(self, PreStates::Initial)
    }
}

/// State a case ends in after the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostState<S: CaseState> {
    /// The case moves to this state
    To(S),
    /// The case stays where it was
    Unchanged,
}

/// Definition of a single case event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefinition<S: CaseState, R: CaseRole> {
    id: EventId,
    pre_states: PreStates<S>,
    post_state: PostState<S>,
    grants: IndexMap<R, Permissions>,
    name: Option<String>,
    description: Option<String>,
    show_summary: bool,
    show_event_notes: bool,
    display_order: Option<u32>,
}

impl<S: CaseState, R: CaseRole> EventDefinition<S, R> {
    /// Create a definition with no grants and no display text
    pub fn new(id: impl Into<EventId>, pre_states: PreStates<S>, post_state: PostState<S>) -> Self {
        Self {
            id: id.into(),
            pre_states,
            post_state,
            grants: IndexMap::new(),
            name: None,
            description: None,
            show_summary: false,
            show_event_notes: false,
            display_order: None,
        }
    }

    /// Event moving a case from `from` to `to`
    pub fn transition(id: impl Into<EventId>, from: S, to: S) -> Self {
        Self::new(id, PreStates::States(BTreeSet::from([from])), PostState::To(to))
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Show the check-your-answers summary page
    pub fn with_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }

    /// Show the event notes field
    pub fn with_event_notes(mut self, show: bool) -> Self {
        self.show_event_notes = show;
        self
    }

    /// Pin the display order instead of using the registration position
    pub fn with_display_order(mut self, order: u32) -> Self {
        self.display_order = Some(order);
        self
    }

    /// Grant permissions to roles; repeated grants to one role are merged
    pub fn with_grant(
        mut self,
        permissions: Permissions,
        roles: impl IntoIterator<Item = R>,
    ) -> Self {
        for role in roles {
            let entry = self.grants.entry(role).or_insert(Permissions::NONE);
            *entry = entry.union(permissions);
        }
        self
    }

    /// Replace the pre-states
    pub fn with_pre_states(mut self, pre_states: PreStates<S>) -> Self {
        self.pre_states = pre_states;
        self
    }

    /// Replace the post-state
    pub fn with_post_state(mut self, post_state: PostState<S>) -> Self {
        self.post_state = post_state;
        self
    }

    /// Event identifier
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// States the event may be triggered from
    pub fn pre_states(&self) -> &PreStates<S> {
        &self.pre_states
    }

    /// State the case ends in
    pub fn post_state(&self) -> PostState<S> {
        self.post_state
    }

    /// Role grants in grant order
    pub fn grants(&self) -> &IndexMap<R, Permissions> {
        &self.grants
    }

    /// Permissions granted to `role`
    pub fn permissions_for(&self, role: &R) -> Permissions {
        self.grants.get(role).copied().unwrap_or(Permissions::NONE)
    }

    /// Display name, falling back to the id
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.as_str())
    }

    /// Description, falling back to the display name
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_else(|| self.name())
    }

    /// Whether the summary page is shown
    pub fn show_summary(&self) -> bool {
        self.show_summary
    }

    /// Whether the event notes field is shown
    pub fn show_event_notes(&self) -> bool {
        self.show_event_notes
    }

    /// Pinned display order, if any
    pub fn display_order(&self) -> Option<u32> {
        self.display_order
    }

    /// Every state the definition names, pre-states first
    pub fn referenced_states(&self) -> Vec<S> {
        let mut states = Vec::new();
        if let PreStates::States(pre) = &self.pre_states {
            states.extend(pre.iter().copied());
        }
        if let PostState::To(post) = self.post_state {
            if !states.contains(&post) {
                states.push(post);
            }
        }
        states
    }

    /// Check the id and that the event can be triggered from somewhere
    pub fn validate(&self) -> ConfigResult<()> {
        self.id.validate()?;
        if let PreStates::States(states) = &self.pre_states {
            if states.is_empty() {
                return Err(ConfigError::EmptyPreStates {
                    event: self.id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check the definition against state and role universes
    ///
    /// An empty universe does not constrain anything.
    pub fn check_membership(&self, states: &IndexSet<S>, roles: &IndexSet<R>) -> ConfigResult<()> {
        if !states.is_empty() {
            if let Some(state) = self
                .referenced_states()
                .into_iter()
                .find(|s| !states.contains(s))
            {
                return Err(ConfigError::UnknownState {
                    event: self.id.to_string(),
                    state: state.name().to_string(),
                });
            }
        }

        if !roles.is_empty() {
            if let Some(role) = self.grants.keys().find(|r| !roles.contains(*r)) {
                return Err(ConfigError::UnknownRole {
                    event: self.id.to_string(),
                    role: role.role().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divorce::{State, UserRole};

    #[test]
    fn test_transition_definition() {
        let event: EventDefinition<State, UserRole> =
            EventDefinition::transition("pay", State::AwaitingHwfDecision, State::AwaitingPayment);

        assert_eq!(event.id(), &EventId::from("pay"));
        assert!(event.pre_states().contains(&State::AwaitingHwfDecision));
        assert!(!event.pre_states().contains(&State::Draft));
        assert_eq!(event.post_state(), PostState::To(State::AwaitingPayment));
        assert_eq!(event.name(), "pay");
        assert_eq!(event.description(), "pay");
    }

    #[test]
    fn test_grants_are_merged() {
        let event: EventDefinition<State, UserRole> =
            EventDefinition::new("note", PreStates::Any, PostState::Unchanged)
                .with_grant(Permissions::READ, [UserRole::CaseWorker, UserRole::SuperUser])
                .with_grant(Permissions::CREATE_READ_UPDATE, [UserRole::CaseWorker]);

        assert_eq!(
            event.permissions_for(&UserRole::CaseWorker),
            Permissions::CREATE_READ_UPDATE
        );
        assert_eq!(event.permissions_for(&UserRole::SuperUser), Permissions::READ);
        assert_eq!(event.permissions_for(&UserRole::Citizen), Permissions::NONE);
        assert_eq!(event.grants().len(), 2);
    }

    #[test]
    fn test_membership_check() {
        let event: EventDefinition<State, UserRole> =
            EventDefinition::transition("pay", State::AwaitingHwfDecision, State::AwaitingPayment)
                .with_grant(Permissions::CREATE_READ_UPDATE, [UserRole::CaseWorker]);

        let states: IndexSet<State> = [State::AwaitingHwfDecision].into_iter().collect();
        let roles: IndexSet<UserRole> = [UserRole::CaseWorker].into_iter().collect();
        let err = event.check_membership(&states, &roles).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownState {
                event: "pay".to_string(),
                state: "AwaitingPayment".to_string(),
            }
        );

        let no_roles = IndexSet::new();
        let all_states: IndexSet<State> = State::all().into_iter().collect();
        assert!(event.check_membership(&all_states, &no_roles).is_ok());
        assert!(event.check_membership(&IndexSet::new(), &IndexSet::new()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_pre_states() {
        let event: EventDefinition<State, UserRole> =
            EventDefinition::new("never", PreStates::States(BTreeSet::new()), PostState::Unchanged)
                .with_name("Never");
        assert_eq!(
            event.validate(),
            Err(ConfigError::EmptyPreStates {
                event: "never".to_string()
            })
        );

        let any: EventDefinition<State, UserRole> =
            EventDefinition::new("note", PreStates::Any, PostState::Unchanged);
        assert!(any.validate().is_ok());
    }

    #[test]
    fn test_initial_and_any_pre_states() {
        assert!(PreStates::<State>::Initial.is_initial());
        assert!(!PreStates::<State>::Initial.contains(&State::Draft));
        assert!(PreStates::<State>::Any.contains(&State::Draft));
    }
}
