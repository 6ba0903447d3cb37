// Copyright 2025 Cowboy AI, LLC.

//! Event registrars of the No Fault Divorce case type

pub mod caseworker_add_note;
pub mod caseworker_awaiting_payment;
pub mod caseworker_hwf_application_accepted;
pub mod citizen_create_application;
pub mod citizen_submit_application;

pub use caseworker_add_note::*;
pub use caseworker_awaiting_payment::*;
pub use caseworker_hwf_application_accepted::*;
pub use citizen_create_application::*;
pub use citizen_submit_application::*;
