// Copyright 2025 Cowboy AI, LLC.

//! # Case Event Config
//!
//! Declarative event registration for case types managed by a case
//! management engine.
//!
//! A case type owns a closed set of **states** and **user roles**. Each
//! feature module declares one **event**, a transition between states gated
//! by the roles it is granted to, through an [`EventRegistrar`]. A
//! configuration pass runs every registrar once against a [`ConfigBuilder`]
//! and freezes the result into a [`CaseConfig`] for the engine to consume.
//!
//! - **Registry**: insertion-ordered, keyed by event id
//! - **Validation**: duplicate ids and states or roles outside the case
//!   type's universes are rejected, see [`RegistrationPolicy`]
//! - **Export**: frozen configurations render to `CaseEvent` and
//!   `AuthorisationCaseEvent` definition sheets
//!
//! ```rust
//! use case_event_config::divorce::{self, CaseworkerAwaitingPayment, NoFaultDivorce};
//! use case_event_config::{ConfigBuilder, EventRegistrar};
//!
//! let mut builder = ConfigBuilder::for_case_type::<NoFaultDivorce>();
//! CaseworkerAwaitingPayment.configure(&mut builder)?;
//!
//! assert!(builder
//!     .event_ids()
//!     .any(|id| id == divorce::CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF));
//! # Ok::<(), case_event_config::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod builder;
mod case_type;
mod config;
mod errors;
mod event;
mod identifiers;
mod permission;
mod policy;
mod registrar;
pub mod definition;
pub mod divorce;

pub use builder::{CaseConfigBuilder, ConfigBuilder, EventBuilder};
pub use case_type::{CaseRole, CaseState, CaseType};
pub use config::CaseConfig;
pub use definition::{CaseDefinition, ExportOptions, SecurityClassification};
pub use errors::{ConfigError, ConfigResult};
pub use event::{EventDefinition, PostState, PreStates};
pub use identifiers::EventId;
pub use permission::Permissions;
pub use policy::{DuplicatePolicy, MembershipCheck, RegistrationPolicy};
pub use registrar::{EventRegistrar, Registrars};
