//! # Storage
//!
//! ## Instance storage
//!
//! | Key           | Type  | Description                          |
//! |---------------|-------|--------------------------------------|
//! | `ImpactCount` | `u64` | Last assigned impact id (0 = none)   |
//!
//! The admin lives alongside these under `aid_common::access::AccessKey`.
//!
//! ## Persistent storage
//!
//! | Key                     | Type           | Description                         |
//! |-------------------------|----------------|-------------------------------------|
//! | `Impact(id)`            | `ImpactRecord` | One record per id                   |
//! | `CategoryTotal(label)`  | `u128`         | Running total of verified amounts   |
//!
//! `CategoryTotal` is credited when a record first becomes verified, which keeps
//! `get_total_by_category` a single read regardless of how many records exist.

use soroban_sdk::{contracttype, Env, String};

use aid_common::storage::{bump_instance, bump_persistent};
use aid_common::Error;

use crate::types::ImpactRecord;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Last assigned impact id (Instance).
    ImpactCount,
    /// Impact record keyed by id (Persistent).
    Impact(u64),
    /// Running verified total keyed by category label (Persistent).
    CategoryTotal(String),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Number of records created so far, which is also the last assigned id.
pub fn impact_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ImpactCount)
        .unwrap_or(0)
}

/// Reserve and return the next impact id. Ids start at 1 and are never reused.
pub fn next_impact_id(env: &Env) -> Result<u64, Error> {
    let next = impact_count(env).checked_add(1).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::ImpactCount, &next);
    Ok(next)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

pub fn save_impact(env: &Env, record: &ImpactRecord) {
    let key = DataKey::Impact(record.id);
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Load a record by id, or `None` if it does not exist.
pub fn load_impact(env: &Env, id: u64) -> Option<ImpactRecord> {
    let key = DataKey::Impact(id);
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

/// Verified total for `category`; zero when nothing has been credited.
pub fn category_total(env: &Env, category: &String) -> u128 {
    let key = DataKey::CategoryTotal(category.clone());
    match env.storage().persistent().get::<_, u128>(&key) {
        Some(total) => {
            bump_persistent(env, &key);
            total
        }
        None => 0,
    }
}

/// Add `amount` to the running total of `category` and return the new total.
///
/// Nothing is written when the addition overflows.
pub fn credit_category(env: &Env, category: &String, amount: u128) -> Result<u128, Error> {
    let total = category_total(env, category)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let key = DataKey::CategoryTotal(category.clone());
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
    Ok(total)
}
