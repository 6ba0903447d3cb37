// Copyright 2025 Cowboy AI, LLC.

//! Case type, state and role traits
//!
//! States and roles are closed enumerations owned by each case type. The
//! registry only needs to name them, compare them and enumerate the full
//! universe of values, so both are expressed as small traits implemented by
//! plain `enum`s.

use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for case states
///
/// States must be:
/// - Copyable and comparable for set membership
/// - Ordered so pre-state sets render deterministically
/// - Thread-safe so a frozen configuration can be shared
pub trait CaseState: Copy + Debug + Eq + Ord + Hash + Send + Sync + 'static {
    /// State id as known to the case engine
    fn name(&self) -> &'static str;

    /// Every state of the case type, in declaration order
    fn all() -> Vec<Self>;
}

/// Core trait for user roles that events are granted to
pub trait CaseRole: Copy + Debug + Eq + Ord + Hash + Send + Sync + 'static {
    /// Role id as known to the case engine
    fn role(&self) -> &'static str;

    /// Every role of the case type, in declaration order
    fn all() -> Vec<Self>;
}

/// A case type ties an id and jurisdiction to its state and role universes
pub trait CaseType: 'static {
    /// States a case of this type moves through
    type State: CaseState;

    /// Roles that may act on a case of this type
    type Role: CaseRole;

    /// Case type id, e.g. `NFD`
    fn case_type_id() -> &'static str;

    /// Jurisdiction the case type belongs to
    fn jurisdiction() -> &'static str;
}
