#![allow(dead_code)]

extern crate std;

use std::vec::Vec;

use soroban_sdk::{Env, String};

use crate::{AidCategory, ImpactRecord};

/// Ids are assigned sequentially starting from 1.
pub fn assert_sequential_ids(records: &[ImpactRecord]) {
    for (i, record) in records.iter().enumerate() {
        assert_eq!(
            record.id,
            i as u64 + 1,
            "expected impact id {}, got {}",
            i + 1,
            record.id
        );
    }
}

/// The stored category always matches the taxonomy for the stored aid type.
pub fn assert_category_matches_aid_type(env: &Env, record: &ImpactRecord) {
    let expected = AidCategory::from_aid_type(record.aid_type).label();
    assert!(
        record.category == String::from_str(env, expected),
        "impact {} has category inconsistent with aid type {}",
        record.id,
        record.aid_type
    );
}

/// An unverified record carries no attestation text.
pub fn assert_unverified_has_empty_description(record: &ImpactRecord) {
    if !record.verified {
        assert_eq!(
            record.description.len(),
            0,
            "unverified impact {} has a description",
            record.id
        );
    }
}

/// Only `description` and `verified` may change after creation.
pub fn assert_impact_immutable_fields(original: &ImpactRecord, current: &ImpactRecord) {
    assert_eq!(original.id, current.id, "impact id changed");
    assert_eq!(
        original.allocation_id, current.allocation_id,
        "impact allocation_id changed"
    );
    assert_eq!(original.recipient, current.recipient, "impact recipient changed");
    assert_eq!(original.aid_type, current.aid_type, "impact aid_type changed");
    assert_eq!(original.amount, current.amount, "impact amount changed");
    assert_eq!(
        original.impact_date, current.impact_date,
        "impact impact_date changed"
    );
    assert_eq!(original.category, current.category, "impact category changed");
}

/// Verification is one-way: a verified record never reverts to unverified.
pub fn assert_verification_monotonic(before: &ImpactRecord, after: &ImpactRecord) {
    assert!(
        !before.verified || after.verified,
        "impact {} reverted from verified to unverified",
        before.id
    );
}

/// The maintained running total equals a full scan over verified records.
pub fn assert_total_matches_scan(records: &[ImpactRecord], category: &String, total: u128) {
    let scanned: u128 = records
        .iter()
        .filter(|r| r.verified && r.category == *category)
        .map(|r| r.amount)
        .sum();
    assert_eq!(
        total, scanned,
        "category running total {} differs from scanned sum {}",
        total, scanned
    );
}

/// Run all per-record invariants.
pub fn assert_all_impact_invariants(env: &Env, record: &ImpactRecord) {
    assert_category_matches_aid_type(env, record);
    assert_unverified_has_empty_description(record);
}

/// Collect records `1..=count` via the supplied loader.
pub fn collect_records<F>(count: u64, mut load: F) -> Vec<ImpactRecord>
where
    F: FnMut(u64) -> ImpactRecord,
{
    (1..=count).map(&mut load).collect()
}
