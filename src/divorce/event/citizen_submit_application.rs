// Copyright 2025 Cowboy AI, LLC.

//! Citizen submits a draft application
//!
//! The case waits for payment; applications with a help-with-fees reference
//! are moved on by a caseworker afterwards.

use crate::builder::CaseConfigBuilder;
use crate::divorce::{NoFaultDivorce, State, UserRole};
use crate::errors::ConfigResult;
use crate::permission::Permissions;
use crate::registrar::EventRegistrar;

/// Event id
pub const CITIZEN_SUBMIT_APPLICATION: &str = "citizen-submit-application";

/// Registers [`CITIZEN_SUBMIT_APPLICATION`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CitizenSubmitApplication;

impl EventRegistrar<NoFaultDivorce> for CitizenSubmitApplication {
    fn configure(&self, builder: &mut CaseConfigBuilder<NoFaultDivorce>) -> ConfigResult<()> {
        builder
            .event(CITIZEN_SUBMIT_APPLICATION)
            .for_state_transition(State::Draft, State::AwaitingPayment)
            .name("Applicant statement of truth")
            .description("The applicant confirms SOT")
            .grant(Permissions::CREATE_READ_UPDATE, [UserRole::Citizen])
            .grant_history_only([
                UserRole::CaseWorker,
                UserRole::SuperUser,
                UserRole::LegalAdvisor,
            ])
            .register()?;
        Ok(())
    }
}
