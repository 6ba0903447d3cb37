// Copyright 2025 Cowboy AI, LLC.

//! Configuration builder
//!
//! The builder is the mutable registry a configuration pass writes into.
//! It is seeded with the state and role universes of a case type, collects
//! event definitions in registration order and is frozen into a
//! [`CaseConfig`] once every registrar has run.

use crate::case_type::{CaseRole, CaseState, CaseType};
use crate::config::CaseConfig;
use crate::errors::{ConfigError, ConfigResult};
use crate::event::{EventDefinition, PostState, PreStates};
use crate::identifiers::EventId;
use crate::permission::Permissions;
use crate::policy::{DuplicatePolicy, MembershipCheck, RegistrationPolicy};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Builder for a case type's event registry
#[derive(Debug, Clone)]
pub struct ConfigBuilder<S: CaseState, R: CaseRole> {
    case_type_id: Option<String>,
    states: IndexSet<S>,
    roles: IndexSet<R>,
    policy: RegistrationPolicy,
    events: IndexMap<EventId, EventDefinition<S, R>>,
}

/// Builder type for a [`CaseType`]
pub type CaseConfigBuilder<C> = ConfigBuilder<<C as CaseType>::State, <C as CaseType>::Role>;

impl<S: CaseState, R: CaseRole> ConfigBuilder<S, R> {
    /// Create an empty builder scoped to the given universes
    pub fn new(states: impl IntoIterator<Item = S>, roles: impl IntoIterator<Item = R>) -> Self {
        Self {
            case_type_id: None,
            states: states.into_iter().collect(),
            roles: roles.into_iter().collect(),
            policy: RegistrationPolicy::default(),
            events: IndexMap::new(),
        }
    }

    /// Create a builder seeded with every state and role of `C`
    pub fn for_case_type<C>() -> Self
    where
        C: CaseType<State = S, Role = R>,
    {
        Self::new(S::all(), R::all()).with_case_type_id(C::case_type_id())
    }

    /// Set the case type id used when exporting definitions
    pub fn with_case_type_id(mut self, id: impl Into<String>) -> Self {
        self.case_type_id = Some(id.into());
        self
    }

    /// Replace the registration policy
    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active registration policy
    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Case type id, if one was set
    pub fn case_type_id(&self) -> Option<&str> {
        self.case_type_id.as_deref()
    }

    /// State universe
    pub fn states(&self) -> &IndexSet<S> {
        &self.states
    }

    /// Role universe
    pub fn roles(&self) -> &IndexSet<R> {
        &self.roles
    }

    /// Start a fluent definition for `id`; finish it with [`EventBuilder::register`]
    pub fn event(&mut self, id: impl Into<EventId>) -> EventBuilder<'_, S, R> {
        EventBuilder {
            builder: self,
            definition: EventDefinition::new(id, PreStates::Any, PostState::Unchanged),
        }
    }

    /// Add a definition to the registry
    pub fn add_event(&mut self, definition: EventDefinition<S, R>) -> ConfigResult<()> {
        definition.validate()?;

        if self.policy.membership == MembershipCheck::Eager {
            definition.check_membership(&self.states, &self.roles)?;
        }

        let id = definition.id().clone();
        if self.events.contains_key(&id) {
            match self.policy.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(ConfigError::DuplicateEvent { id: id.to_string() });
                }
                DuplicatePolicy::Replace => {
                    warn!(event = %id, "replacing previously registered event");
                }
            }
        }

        debug!(event = %id, display_name = definition.name(), "registered event");
        // IndexMap::insert keeps the original slot for an existing key
        self.events.insert(id, definition);
        Ok(())
    }

    /// All definitions in registration order
    pub fn events(&self) -> impl ExactSizeIterator<Item = &EventDefinition<S, R>> + '_ {
        self.events.values()
    }

    /// All event ids in registration order
    pub fn event_ids(&self) -> impl ExactSizeIterator<Item = &EventId> + '_ {
        self.events.keys()
    }

    /// Look a definition up by id
    pub fn get(&self, id: &str) -> Option<&EventDefinition<S, R>> {
        self.events.get(id)
    }

    /// Whether an event with this id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.events.contains_key(id)
    }

    /// Number of registered events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Freeze the registry
    ///
    /// Runs membership validation when the policy defers it.
    pub fn build(self) -> ConfigResult<CaseConfig<S, R>> {
        if self.policy.membership == MembershipCheck::Deferred {
            for definition in self.events.values() {
                definition.check_membership(&self.states, &self.roles)?;
            }
        }

        info!(
            case_type = self.case_type_id.as_deref().unwrap_or("-"),
            events = self.events.len(),
            "configuration frozen"
        );

        Ok(CaseConfig::new(
            self.case_type_id,
            self.states,
            self.roles,
            self.events,
        ))
    }
}

/// Fluent definition of one event against a [`ConfigBuilder`]
///
/// Nothing is added to the registry until [`register`](Self::register) is
/// called. Without a state method the event applies to all states and
/// leaves the state unchanged.
#[must_use = "an event is only added to the registry by calling register()"]
pub struct EventBuilder<'a, S: CaseState, R: CaseRole> {
    builder: &'a mut ConfigBuilder<S, R>,
    definition: EventDefinition<S, R>,
}

impl<'a, S: CaseState, R: CaseRole> EventBuilder<'a, S, R> {
    /// Move a case from `from` to `to`
    pub fn for_state_transition(mut self, from: S, to: S) -> Self {
        self.definition = self
            .definition
            .with_pre_states(PreStates::States(BTreeSet::from([from])))
            .with_post_state(PostState::To(to));
        self
    }

    /// Move a case from any of `from` to `to`
    pub fn for_states_transition(mut self, from: impl IntoIterator<Item = S>, to: S) -> Self {
        self.definition = self
            .definition
            .with_pre_states(PreStates::States(from.into_iter().collect()))
            .with_post_state(PostState::To(to));
        self
    }

    /// Trigger in `state` without changing it
    pub fn for_state(self, state: S) -> Self {
        self.for_states([state])
    }

    /// Trigger in any of `states` without changing the state
    pub fn for_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.definition = self
            .definition
            .with_pre_states(PreStates::States(states.into_iter().collect()))
            .with_post_state(PostState::Unchanged);
        self
    }

    /// Trigger in every state without changing it
    pub fn for_all_states(mut self) -> Self {
        self.definition = self
            .definition
            .with_pre_states(PreStates::Any)
            .with_post_state(PostState::Unchanged);
        self
    }

    /// Create a case in `state`
    pub fn initial_state(mut self, state: S) -> Self {
        self.definition = self
            .definition
            .with_pre_states(PreStates::Initial)
            .with_post_state(PostState::To(state));
        self
    }

    /// Display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.definition = self.definition.with_name(name);
        self
    }

    /// Description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.definition = self.definition.with_description(description);
        self
    }

    /// Show the summary page
    pub fn show_summary(mut self) -> Self {
        self.definition = self.definition.with_summary(true);
        self
    }

    /// Show the event notes field
    pub fn show_event_notes(mut self) -> Self {
        self.definition = self.definition.with_event_notes(true);
        self
    }

    /// Pin the display order
    pub fn display_order(mut self, order: u32) -> Self {
        self.definition = self.definition.with_display_order(order);
        self
    }

    /// Grant permissions to roles
    pub fn grant(mut self, permissions: Permissions, roles: impl IntoIterator<Item = R>) -> Self {
        self.definition = self.definition.with_grant(permissions, roles);
        self
    }

    /// Grant read access so the event shows in case history only
    pub fn grant_history_only(self, roles: impl IntoIterator<Item = R>) -> Self {
        self.grant(Permissions::READ, roles)
    }

    /// Add the definition to the builder
    pub fn register(self) -> ConfigResult<EventId> {
        let id = self.definition.id().clone();
        self.builder.add_event(self.definition)?;
        Ok(id)
    }
}
