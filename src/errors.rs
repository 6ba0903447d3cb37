// Copyright 2025 Cowboy AI, LLC.

//! Error types for event registration

use thiserror::Error;

/// Errors that can occur while registering or exporting case events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An event with the same identifier is already registered
    #[error("Duplicate event: {id} is already registered")]
    DuplicateEvent {
        /// Identifier that was registered twice
        id: String,
    },

    /// Event identifier is not usable
    #[error("Invalid event id {id:?}: {reason}")]
    InvalidEventId {
        /// The rejected identifier
        id: String,
        /// Why it was rejected
        reason: String,
    },

    /// Event refers to a state outside the builder's state universe
    #[error("Unknown state {state} in event {event}")]
    UnknownState {
        /// Event that referenced the state
        event: String,
        /// The state name
        state: String,
    },

    /// Event grants a role outside the builder's role universe
    #[error("Unknown role {role} in event {event}")]
    UnknownRole {
        /// Event that referenced the role
        event: String,
        /// The role id
        role: String,
    },

    /// Event is limited to an empty set of states and could never be triggered
    #[error("Event {event} has an empty pre-state set")]
    EmptyPreStates {
        /// Event with no pre-states
        event: String,
    },

    /// CRUD string contains a letter other than C, R, U or D
    #[error("Invalid permission flag {flag:?} in {crud:?}")]
    InvalidPermission {
        /// The full CRUD string
        crud: String,
        /// The rejected letter
        flag: char,
    },

    /// Definition export needs a case type id
    #[error("No case type id configured")]
    MissingCaseType,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Filesystem error while writing definitions
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for registration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl ConfigError {
    /// Check if this is a duplicate registration
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ConfigError::DuplicateEvent { .. })
    }

    /// Check if this error comes from a state or role outside the universes
    pub fn is_membership_error(&self) -> bool {
        matches!(
            self,
            ConfigError::UnknownState { .. } | ConfigError::UnknownRole { .. }
        )
    }
}
