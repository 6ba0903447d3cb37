// Copyright 2025 Cowboy AI, LLC.

//! Registration policy for configuration passes
//!
//! The policy decides what the builder does when an event id is registered
//! twice and when an event's states and roles are checked against the
//! builder's universes.

use crate::errors::ConfigResult;
use serde::{Deserialize, Serialize};

/// What to do when an event id is registered twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateEvent`
    #[default]
    Reject,
    /// Replace the earlier definition, keeping its registry position
    Replace,
}

/// When event states and roles are checked against the universes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipCheck {
    /// On every `add_event`
    #[default]
    Eager,
    /// Once, when the builder is frozen
    Deferred,
    /// Never
    Off,
}

/// Policy configuration for a configuration pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationPolicy {
    /// Duplicate id handling
    pub duplicates: DuplicatePolicy,
    /// Membership validation timing
    pub membership: MembershipCheck,
}

impl RegistrationPolicy {
    /// Policy that tolerates re-registration and checks membership at build
    pub fn lenient() -> Self {
        Self {
            duplicates: DuplicatePolicy::Replace,
            membership: MembershipCheck::Deferred,
        }
    }

    /// Load a policy from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
