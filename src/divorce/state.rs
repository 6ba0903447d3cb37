// Copyright 2025 Cowboy AI, LLC.

//! Case states

use crate::case_type::CaseState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a divorce case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum State {
    /// Application started, not yet submitted
    Draft,
    /// Submitted with a help-with-fees reference, awaiting a decision
    #[serde(rename = "AwaitingHWFDecision")]
    AwaitingHwfDecision,
    /// Awaiting payment of the application fee
    AwaitingPayment,
    /// Fee paid or remitted
    Submitted,
    /// Awaiting supporting documents
    AwaitingDocuments,
    /// Issued and in the 20-week holding period
    Holding,
    /// Conditional order pronounced
    ConditionalOrderPronounced,
    /// Final order granted
    FinalOrderComplete,
    /// Withdrawn by the applicant
    Withdrawn,
}

impl State {
    const ALL: [State; 9] = [
        State::Draft,
        State::AwaitingHwfDecision,
        State::AwaitingPayment,
        State::Submitted,
        State::AwaitingDocuments,
        State::Holding,
        State::ConditionalOrderPronounced,
        State::FinalOrderComplete,
        State::Withdrawn,
    ];
}

impl CaseState for State {
    fn name(&self) -> &'static str {
        match self {
            State::Draft => "Draft",
            State::AwaitingHwfDecision => "AwaitingHWFDecision",
            State::AwaitingPayment => "AwaitingPayment",
            State::Submitted => "Submitted",
            State::AwaitingDocuments => "AwaitingDocuments",
            State::Holding => "Holding",
            State::ConditionalOrderPronounced => "ConditionalOrderPronounced",
            State::FinalOrderComplete => "FinalOrderComplete",
            State::Withdrawn => "Withdrawn",
        }
    }

    fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
