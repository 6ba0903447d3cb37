// Copyright 2025 Cowboy AI, LLC.

use case_event_config::divorce::{State, UserRole};
use case_event_config::{CaseState, ConfigBuilder, DuplicatePolicy, RegistrationPolicy};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn builder() -> ConfigBuilder<State, UserRole> {
    ConfigBuilder::new(State::all(), Vec::new())
}

proptest! {
    #[test]
    fn events_keep_registration_order(
        ids in proptest::collection::btree_set("[a-z]{1,8}(-[a-z]{1,8}){0,2}", 0..32)
    ) {
        // btree_set dedups; shuffle the order deterministically by reversing
        let ids: Vec<String> = ids.into_iter().rev().collect();
        let mut builder = builder();
        for id in &ids {
            builder.event(id.as_str()).register().unwrap();
        }

        let registered: Vec<String> = builder.events().map(|e| e.id().to_string()).collect();
        prop_assert_eq!(registered, ids);
    }

    #[test]
    fn duplicates_never_grow_the_registry(ids in proptest::collection::vec("[a-c]{1,2}", 0..48)) {
        let mut builder = builder();
        let mut rejected = 0usize;
        for id in &ids {
            if let Err(err) = builder.event(id.as_str()).register() {
                prop_assert!(err.is_duplicate());
                rejected += 1;
            }
        }

        let unique: BTreeSet<&String> = ids.iter().collect();
        prop_assert_eq!(builder.len(), unique.len());
        prop_assert_eq!(rejected, ids.len() - unique.len());
    }

    #[test]
    fn replace_keeps_first_position(ids in proptest::collection::vec("[a-c]{1,2}", 1..48)) {
        let mut builder = builder().with_policy(RegistrationPolicy {
            duplicates: DuplicatePolicy::Replace,
            ..RegistrationPolicy::default()
        });
        let mut first_seen: Vec<&String> = Vec::new();
        for id in &ids {
            builder.event(id.as_str()).register().unwrap();
            if !first_seen.contains(&id) {
                first_seen.push(id);
            }
        }

        let registered: Vec<String> = builder.event_ids().map(|id| id.to_string()).collect();
        let expected: Vec<String> = first_seen.into_iter().cloned().collect();
        prop_assert_eq!(registered, expected);
    }
}
