// Copyright 2025 Cowboy AI, LLC.

//! Case definition export
//!
//! The case engine imports its configuration as definition sheets. This
//! module renders the two sheets that describe events, `CaseEvent` and
//! `AuthorisationCaseEvent`, from a frozen [`CaseConfig`] and writes them as
//! JSON arrays.

use crate::case_type::{CaseRole, CaseState};
use crate::config::CaseConfig;
use crate::errors::{ConfigError, ConfigResult};
use crate::event::{PostState, PreStates};
use chrono::NaiveDate;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// File name of the events sheet
pub const CASE_EVENT_FILE: &str = "CaseEvent.json";
/// File name of the event authorisation sheet
pub const AUTHORISATION_CASE_EVENT_FILE: &str = "AuthorisationCaseEvent.json";

const LIVE_FROM_FORMAT: &str = "%d/%m/%Y";

/// Security classification of generated rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum SecurityClassification {
    /// Visible to anyone granted access
    #[default]
    Public,
    /// Restricted
    Private,
    /// Most restricted
    Restricted,
}

/// Options applied to every generated row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Date the definition becomes live
    pub live_from: NaiveDate,
    /// Classification of every event
    pub security_classification: SecurityClassification,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            live_from: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap_or_default(),
            security_classification: SecurityClassification::Public,
        }
    }
}

/// One row of the `CaseEvent` sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaseEventRow {
    /// Live-from date, `dd/mm/yyyy`
    #[serde(rename = "LiveFrom")]
    pub live_from: String,
    /// Case type id
    #[serde(rename = "CaseTypeID")]
    pub case_type_id: String,
    /// Event id
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name
    #[serde(rename = "Name")]
    pub name: String,
    /// Description
    #[serde(rename = "Description")]
    pub description: String,
    /// Position in the event dropdown
    ///
    /// Pinned orders are kept; the other events fill the remaining slots
    /// from 1 in registration order.
    #[serde(rename = "DisplayOrder")]
    pub display_order: u32,
    /// `*`, or `;`-separated state ids; absent for creation events
    #[serde(
        rename = "PreConditionState(s)",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub pre_condition_states: Option<String>,
    /// Target state id, or `*` to keep the current state
    #[serde(rename = "PostConditionState")]
    pub post_condition_state: String,
    /// Security classification
    #[serde(rename = "SecurityClassification")]
    pub security_classification: SecurityClassification,
    /// `Y` or `N`
    #[serde(rename = "ShowSummary")]
    pub show_summary: String,
    /// `Y` or `N`
    #[serde(rename = "ShowEventNotes")]
    pub show_event_notes: String,
}

/// One row of the `AuthorisationCaseEvent` sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthorisationCaseEventRow {
    /// Live-from date, `dd/mm/yyyy`
    #[serde(rename = "LiveFrom")]
    pub live_from: String,
    /// Case type id
    #[serde(rename = "CaseTypeID")]
    pub case_type_id: String,
    /// Event id
    #[serde(rename = "CaseEventID")]
    pub case_event_id: String,
    /// Role id
    #[serde(rename = "UserRole")]
    pub user_role: String,
    /// CRUD string
    #[serde(rename = "CRUD")]
    pub crud: String,
}

/// Event sheets rendered from a [`CaseConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaseDefinition {
    /// `CaseEvent` rows in registration order
    pub case_events: Vec<CaseEventRow>,
    /// `AuthorisationCaseEvent` rows, grouped by event
    pub authorisations: Vec<AuthorisationCaseEventRow>,
}

fn flag(value: bool) -> String {
    let flag = if value { "Y" } else { "N" };
    flag.to_string()
}

impl CaseDefinition {
    /// Render the sheets for `config`
    pub fn from_config<S: CaseState, R: CaseRole>(
        config: &CaseConfig<S, R>,
        options: &ExportOptions,
    ) -> ConfigResult<Self> {
        let case_type_id = config
            .case_type_id()
            .ok_or(ConfigError::MissingCaseType)?
            .to_string();
        let live_from = options.live_from.format(LIVE_FROM_FORMAT).to_string();

        let mut case_events = Vec::with_capacity(config.len());
        let mut authorisations = Vec::new();

        // Unpinned events take the lowest slots no pinned event claims.
        let pinned: BTreeSet<u32> = config.events().filter_map(|e| e.display_order()).collect();
        let mut next_free = 0u32;

        for event in config.events() {
            let display_order = match event.display_order() {
                Some(order) => order,
                None => {
                    next_free += 1;
                    while pinned.contains(&next_free) {
                        next_free += 1;
                    }
                    next_free
                }
            };

            let pre_condition_states = match event.pre_states() {
                PreStates::Any => Some("*".to_string()),
                PreStates::Initial => None,
                PreStates::States(states) => Some(
                    states
                        .iter()
                        .map(|s| s.name())
                        .collect::<Vec<_>>()
                        .join(";"),
                ),
            };
            let post_condition_state = match event.post_state() {
                PostState::To(state) => state.name().to_string(),
                PostState::Unchanged => "*".to_string(),
            };

            case_events.push(CaseEventRow {
                live_from: live_from.clone(),
                case_type_id: case_type_id.clone(),
                id: event.id().to_string(),
                name: event.name().to_string(),
                description: event.description().to_string(),
                display_order,
                pre_condition_states,
                post_condition_state,
                security_classification: options.security_classification,
                show_summary: flag(event.show_summary()),
                show_event_notes: flag(event.show_event_notes()),
            });

            for (role, permissions) in event.grants() {
                if permissions.is_empty() {
                    continue;
                }
                authorisations.push(AuthorisationCaseEventRow {
                    live_from: live_from.clone(),
                    case_type_id: case_type_id.clone(),
                    case_event_id: event.id().to_string(),
                    user_role: role.role().to_string(),
                    crud: permissions.to_crud_string(),
                });
            }
        }

        Ok(Self {
            case_events,
            authorisations,
        })
    }

    /// `CaseEvent` sheet as pretty JSON
    pub fn case_events_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.case_events)?)
    }

    /// `AuthorisationCaseEvent` sheet as pretty JSON
    pub fn authorisations_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.authorisations)?)
    }

    /// Write both sheets into `dir`, creating it if needed
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> ConfigResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(dir.join(CASE_EVENT_FILE), self.case_events_json()?)?;
        fs::write(
            dir.join(AUTHORISATION_CASE_EVENT_FILE),
            self.authorisations_json()?,
        )?;
        info!(
            dir = %dir.display(),
            events = self.case_events.len(),
            authorisations = self.authorisations.len(),
            "wrote case event definitions"
        );
        Ok(())
    }

    /// JSON Schema describing the exported sheets
    pub fn json_schema() -> ConfigResult<serde_json::Value> {
        Ok(serde_json::to_value(schema_for!(CaseDefinition))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divorce::{self, NoFaultDivorce};
    use crate::{ConfigBuilder, RegistrationPolicy};

    fn definition() -> CaseDefinition {
        let config = divorce::registrars()
            .build_config(RegistrationPolicy::default())
            .unwrap();
        config.to_definition(&ExportOptions::default()).unwrap()
    }

    #[test]
    fn test_case_event_rows() {
        let definition = definition();
        let row = definition
            .case_events
            .iter()
            .find(|r| r.id == divorce::CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF)
            .unwrap();

        assert_eq!(row.live_from, "01/01/2017");
        assert_eq!(row.case_type_id, "NFD");
        assert_eq!(row.pre_condition_states.as_deref(), Some("AwaitingHWFDecision"));
        assert_eq!(row.post_condition_state, "AwaitingPayment");
        assert_eq!(row.show_event_notes, "Y");
        assert_eq!(row.show_summary, "N");
    }

    #[test]
    fn test_creation_and_any_state_rendering() {
        let definition = definition();
        let create = &definition.case_events[0];
        assert_eq!(create.id, divorce::CITIZEN_CREATE_APPLICATION);
        assert_eq!(create.pre_condition_states, None);
        assert_eq!(create.display_order, 1);

        let json = serde_json::to_value(create).unwrap();
        assert!(json.get("PreConditionState(s)").is_none());

        let note = definition
            .case_events
            .iter()
            .find(|r| r.id == divorce::CASEWORKER_ADD_NOTE)
            .unwrap();
        assert_eq!(note.pre_condition_states.as_deref(), Some("*"));
        assert_eq!(note.post_condition_state, "*");
    }

    #[test]
    fn test_unpinned_orders_skip_pinned_slots() {
        let mut builder = ConfigBuilder::for_case_type::<NoFaultDivorce>();
        builder.event("a").register().unwrap();
        builder.event("b").display_order(1).register().unwrap();
        builder.event("c").register().unwrap();
        builder.event("d").display_order(3).register().unwrap();
        builder.event("e").register().unwrap();
        let definition = builder
            .build()
            .unwrap()
            .to_definition(&ExportOptions::default())
            .unwrap();

        let orders: Vec<(&str, u32)> = definition
            .case_events
            .iter()
            .map(|r| (r.id.as_str(), r.display_order))
            .collect();
        assert_eq!(
            orders,
            vec![("a", 2), ("b", 1), ("c", 4), ("d", 3), ("e", 5)]
        );
    }

    #[test]
    fn test_missing_case_type() {
        let builder: crate::CaseConfigBuilder<NoFaultDivorce> =
            ConfigBuilder::new(Vec::new(), Vec::new());
        let config = builder.build().unwrap();
        assert_eq!(
            config.to_definition(&ExportOptions::default()),
            Err(ConfigError::MissingCaseType)
        );
    }

    #[test]
    fn test_schema_names_sheet_columns() {
        let schema = CaseDefinition::json_schema().unwrap().to_string();
        assert!(schema.contains("PostConditionState"));
        assert!(schema.contains("CRUD"));
    }
}
