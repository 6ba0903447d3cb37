// Copyright 2025 Cowboy AI, LLC.

//! Citizen starts a new application

use crate::builder::CaseConfigBuilder;
use crate::divorce::{NoFaultDivorce, State, UserRole};
use crate::errors::ConfigResult;
use crate::permission::Permissions;
use crate::registrar::EventRegistrar;

/// Event id
pub const CITIZEN_CREATE_APPLICATION: &str = "citizen-create-application";

/// Registers [`CITIZEN_CREATE_APPLICATION`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CitizenCreateApplication;

impl EventRegistrar<NoFaultDivorce> for CitizenCreateApplication {
    fn configure(&self, builder: &mut CaseConfigBuilder<NoFaultDivorce>) -> ConfigResult<()> {
        builder
            .event(CITIZEN_CREATE_APPLICATION)
            .initial_state(State::Draft)
            .name("Create draft case")
            .description("Apply for a divorce or dissolution")
            .grant(Permissions::CREATE_READ_UPDATE, [UserRole::Citizen])
            .grant_history_only([UserRole::CaseWorker, UserRole::SuperUser])
            .register()?;
        Ok(())
    }
}
