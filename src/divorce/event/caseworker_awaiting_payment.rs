// Copyright 2025 Cowboy AI, LLC.

//! Caseworker moves a case whose help-with-fees reference was refused back
//! to awaiting payment

use crate::builder::CaseConfigBuilder;
use crate::divorce::{NoFaultDivorce, State, UserRole};
use crate::errors::ConfigResult;
use crate::permission::Permissions;
use crate::registrar::EventRegistrar;

/// Event id
pub const CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF: &str = "caseworker-awaiting-payment";

/// Registers [`CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseworkerAwaitingPayment;

impl EventRegistrar<NoFaultDivorce> for CaseworkerAwaitingPayment {
    fn configure(&self, builder: &mut CaseConfigBuilder<NoFaultDivorce>) -> ConfigResult<()> {
        builder
            .event(CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF)
            .for_state_transition(State::AwaitingHwfDecision, State::AwaitingPayment)
            .name("Awaiting payment")
            .description("Help with fees refused, awaiting payment")
            .show_event_notes()
            .grant(Permissions::CREATE_READ_UPDATE, [UserRole::CaseWorker])
            .grant_history_only([
                UserRole::Solicitor,
                UserRole::SuperUser,
                UserRole::LegalAdvisor,
            ])
            .register()?;
        Ok(())
    }
}
