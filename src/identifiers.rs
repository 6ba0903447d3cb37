// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for case events

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Event ID - identifies an event within a case type
///
/// Event ids are the stable keys the case engine uses to look events up, so
/// they must be non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    /// Create an event id without validation
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Create an event id, rejecting empty ids and ids with whitespace
    pub fn parse(s: impl Into<String>) -> ConfigResult<Self> {
        let id = Self(s.into());
        id.validate()?;
        Ok(id)
    }

    /// Check that the id is usable as a registry key
    pub fn validate(&self) -> ConfigResult<()> {
        if self.0.is_empty() {
            return Err(ConfigError::InvalidEventId {
                id: self.0.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.0.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidEventId {
                id: self.0.clone(),
                reason: "contains whitespace".to_string(),
            });
        }
        Ok(())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for EventId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EventId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EventId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
