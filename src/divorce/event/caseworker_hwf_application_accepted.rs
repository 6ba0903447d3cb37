// Copyright 2025 Cowboy AI, LLC.

//! Caseworker accepts a help-with-fees reference

use crate::builder::CaseConfigBuilder;
use crate::divorce::{NoFaultDivorce, State, UserRole};
use crate::errors::ConfigResult;
use crate::permission::Permissions;
use crate::registrar::EventRegistrar;

/// Event id
pub const CASEWORKER_HWF_APPLICATION_ACCEPTED: &str = "caseworker-hwf-application-accepted";

/// Registers [`CASEWORKER_HWF_APPLICATION_ACCEPTED`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseworkerHwfApplicationAccepted;

impl EventRegistrar<NoFaultDivorce> for CaseworkerHwfApplicationAccepted {
    fn configure(&self, builder: &mut CaseConfigBuilder<NoFaultDivorce>) -> ConfigResult<()> {
        builder
            .event(CASEWORKER_HWF_APPLICATION_ACCEPTED)
            .for_state_transition(State::AwaitingHwfDecision, State::Submitted)
            .name("HWF application accepted")
            .description("Help with fees application accepted")
            .show_summary()
            .show_event_notes()
            .grant(Permissions::CREATE_READ_UPDATE, [UserRole::CaseWorker])
            .grant_history_only([UserRole::SuperUser, UserRole::LegalAdvisor])
            .register()?;
        Ok(())
    }
}
