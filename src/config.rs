// Copyright 2025 Cowboy AI, LLC.

//! Frozen case configuration
//!
//! A [`CaseConfig`] is what a configuration pass hands to the case engine.
//! It is read-only: the only way to get one is [`ConfigBuilder::build`].
//!
//! [`ConfigBuilder::build`]: crate::ConfigBuilder::build

use crate::case_type::{CaseRole, CaseState};
use crate::definition::{CaseDefinition, ExportOptions};
use crate::errors::ConfigResult;
use crate::event::EventDefinition;
use crate::identifiers::EventId;
use indexmap::{IndexMap, IndexSet};

/// Read-only event registry for one case type
#[derive(Debug, Clone)]
pub struct CaseConfig<S: CaseState, R: CaseRole> {
    case_type_id: Option<String>,
    states: IndexSet<S>,
    roles: IndexSet<R>,
    events: IndexMap<EventId, EventDefinition<S, R>>,
}

impl<S: CaseState, R: CaseRole> CaseConfig<S, R> {
    pub(crate) fn new(
        case_type_id: Option<String>,
        states: IndexSet<S>,
        roles: IndexSet<R>,
        events: IndexMap<EventId, EventDefinition<S, R>>,
    ) -> Self {
        Self {
            case_type_id,
            states,
            roles,
            events,
        }
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

    /// Registration position of an event, starting at zero
    pub fn position(&self, id: &str) -> Option<usize> {
        self.events.get_index_of(id)
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events that can be triggered from `state`
    pub fn events_from_state<'a>(
        &'a self,
        state: &'a S,
    ) -> impl Iterator<Item = &'a EventDefinition<S, R>> + 'a {
        self.events
            .values()
            .filter(move |e| e.pre_states().contains(state))
    }

    /// Events `role` has any permission on
    pub fn events_for_role<'a>(
        &'a self,
        role: &'a R,
    ) -> impl Iterator<Item = &'a EventDefinition<S, R>> + 'a {
        self.events
            .values()
            .filter(move |e| !e.permissions_for(role).is_empty())
    }

    /// Render the definition rows the case engine imports
    pub fn to_definition(&self, options: &ExportOptions) -> ConfigResult<CaseDefinition> {
        CaseDefinition::from_config(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::CaseConfig;
    use crate::divorce::{self, NoFaultDivorce, State, UserRole};
    use crate::ConfigBuilder;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_case_config_is_send_sync() {
        assert_send_sync::<CaseConfig<State, UserRole>>();
    }

    #[test]
    fn test_queries_over_frozen_config() {
        let mut builder = ConfigBuilder::for_case_type::<NoFaultDivorce>();
        divorce::registrars().configure(&mut builder).unwrap();
        let config = builder.build().unwrap();

        let from_hwf: Vec<&str> = config
            .events_from_state(&State::AwaitingHwfDecision)
            .map(|e| e.id().as_str())
            .collect();
        assert!(from_hwf.contains(&divorce::CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF));
        assert!(from_hwf.contains(&divorce::CASEWORKER_ADD_NOTE));
        assert!(!from_hwf.contains(&divorce::CITIZEN_CREATE_APPLICATION));

        let citizen: Vec<&str> = config
            .events_for_role(&UserRole::Citizen)
            .map(|e| e.id().as_str())
            .collect();
        assert_eq!(
            citizen,
            vec![
                divorce::CITIZEN_CREATE_APPLICATION,
                divorce::CITIZEN_SUBMIT_APPLICATION
            ]
        );

        assert_eq!(config.position(divorce::CITIZEN_CREATE_APPLICATION), Some(0));
        assert_eq!(config.case_type_id(), Some("NFD"));
    }
}
