// Copyright 2025 Cowboy AI, LLC.

//! User roles

use crate::case_type::CaseRole;
use serde::{Deserialize, Serialize};

/// Access-control principal that events are granted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Court administrator
    CaseWorker,
    /// Legal advisor
    LegalAdvisor,
    /// Caseworker superuser
    SuperUser,
    /// Applicant's solicitor
    Solicitor,
    /// Applicant acting in person
    Citizen,
    /// Automated system updates
    SystemUpdate,
}

impl CaseRole for UserRole {
    fn role(&self) -> &'static str {
        match self {
            UserRole::CaseWorker => "caseworker-divorce-courtadmin_beta",
            UserRole::LegalAdvisor => "caseworker-divorce-courtadmin-la",
            UserRole::SuperUser => "caseworker-divorce-superuser",
            UserRole::Solicitor => "caseworker-divorce-solicitor",
            UserRole::Citizen => "citizen",
            UserRole::SystemUpdate => "caseworker-divorce-systemupdate",
        }
    }

    fn all() -> Vec<Self> {
        vec![
            UserRole::CaseWorker,
            UserRole::LegalAdvisor,
            UserRole::SuperUser,
            UserRole::Solicitor,
            UserRole::Citizen,
            UserRole::SystemUpdate,
        ]
    }
}
