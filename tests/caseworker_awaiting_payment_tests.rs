// Copyright 2025 Cowboy AI, LLC.

use case_event_config::divorce::{
    CaseworkerAwaitingPayment, NoFaultDivorce, State, UserRole,
    CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF,
};
use case_event_config::{CaseRole, CaseState, ConfigBuilder, EventRegistrar, PostState};

#[test]
fn adds_event_to_config_builder() {
    let mut config_builder = ConfigBuilder::new(State::all(), UserRole::all());

    CaseworkerAwaitingPayment
        .configure(&mut config_builder)
        .expect("configure");

    let ids: Vec<String> = config_builder
        .events()
        .map(|e| e.id().to_string())
        .collect();
    assert!(ids.contains(&CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF.to_string()));
}

#[test]
fn history_only_roles_must_be_in_the_role_universe() {
    let mut builder = ConfigBuilder::new(State::all(), vec![UserRole::CaseWorker]);

    let err = CaseworkerAwaitingPayment
        .configure(&mut builder)
        .expect_err("solicitor is not a known role");

    assert!(err.is_membership_error());
    assert!(builder.is_empty());
}

#[test]
fn adds_exactly_one_transition_from_awaiting_hwf() {
    let mut builder = ConfigBuilder::for_case_type::<NoFaultDivorce>();
    let before = builder.len();

    CaseworkerAwaitingPayment
        .configure(&mut builder)
        .expect("configure");

    assert_eq!(builder.len(), before + 1);
    let event = builder
        .get(CASEWORKER_AWAITING_PAYMENT_FROM_AWAITING_HWF)
        .expect("registered");
    assert!(event.pre_states().contains(&State::AwaitingHwfDecision));
    assert_eq!(event.post_state(), PostState::To(State::AwaitingPayment));
    assert_eq!(event.name(), "Awaiting payment");
}

#[test]
fn configuring_twice_is_rejected() {
    let mut builder = ConfigBuilder::for_case_type::<NoFaultDivorce>();
    CaseworkerAwaitingPayment
        .configure(&mut builder)
        .expect("first configure");

    let err = CaseworkerAwaitingPayment
        .configure(&mut builder)
        .expect_err("second configure");

    assert!(err.is_duplicate());
    assert_eq!(builder.len(), 1);
}
