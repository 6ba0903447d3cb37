// Copyright 2025 Cowboy AI, LLC.

//! No Fault Divorce case type
//!
//! Each module under [`event`] declares one event of the case type. They are
//! collected by [`registrars`] in the order the events appear to users.

pub mod event;
pub mod state;
pub mod user_role;

pub use event::*;
pub use state::*;
pub use user_role::*;

use crate::case_type::CaseType;
use crate::registrar::Registrars;

/// The No Fault Divorce case type
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaultDivorce;

impl CaseType for NoFaultDivorce {
    type State = State;
    type Role = UserRole;

    fn case_type_id() -> &'static str {
        "NFD"
    }

    fn jurisdiction() -> &'static str {
        "DIVORCE"
    }
}

/// Every event registrar of the case type
pub fn registrars() -> Registrars<NoFaultDivorce> {
    Registrars::new()
        .with(CitizenCreateApplication)
        .with(CitizenSubmitApplication)
        .with(CaseworkerAwaitingPayment)
        .with(CaseworkerHwfApplicationAccepted)
        .with(CaseworkerAddNote)
}
