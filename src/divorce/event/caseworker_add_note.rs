// Copyright 2025 Cowboy AI, LLC.

//! Case note, available in every state

use crate::builder::CaseConfigBuilder;
use crate::divorce::{NoFaultDivorce, UserRole};
use crate::errors::ConfigResult;
use crate::permission::Permissions;
use crate::registrar::EventRegistrar;

/// Event id
pub const CASEWORKER_ADD_NOTE: &str = "caseworker-add-note";

/// Registers [`CASEWORKER_ADD_NOTE`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseworkerAddNote;

impl EventRegistrar<NoFaultDivorce> for CaseworkerAddNote {
    fn configure(&self, builder: &mut CaseConfigBuilder<NoFaultDivorce>) -> ConfigResult<()> {
        builder
            .event(CASEWORKER_ADD_NOTE)
            .for_all_states()
            .name("Add note")
            .description("Add note")
            .grant(
                Permissions::CREATE_READ_UPDATE,
                [UserRole::CaseWorker, UserRole::LegalAdvisor],
            )
            .grant_history_only([UserRole::SuperUser])
            .register()?;
        Ok(())
    }
}
