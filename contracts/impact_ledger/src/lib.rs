//! # Impact Ledger Contract
//!
//! Append-only store of aid disbursement records. Anyone may report a
//! disbursement; only the admin may attest to it. Attested amounts roll up
//! into per-category totals.
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Bootstrap    | [`ImpactLedger::init`]                          |
//! | Admin        | `transfer_admin`, `admin`, `is_admin`           |
//! | Reporting    | [`ImpactLedger::record_impact`]                 |
//! | Attestation  | [`ImpactLedger::verify_impact`]                 |
//! | Queries      | `get_impact_details`, `get_total_by_category`, `impact_count` |
//!
//! ## Provenance
//!
//! `record_impact` carries no authorization gate. Consumers that need
//! provenance must check `verified` on the record, and per-category totals
//! only ever include verified records.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use aid_common::access;

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_category_totals;

pub use aid_common::Error;
pub use types::{AidCategory, CategoryTotal, ImpactRecord};

#[contract]
pub struct ImpactLedger;

#[contractimpl]
impl ImpactLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract and set the admin. Callable once.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        access::init_admin(&env, &admin)
    }

    // ─────────────────────────────────────────────────────────
    // Admin
    // ─────────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Option<Address> {
        access::admin(&env)
    }

    pub fn is_admin(env: Env, address: Address) -> bool {
        access::is_admin(&env, &address)
    }

    /// Hand the admin role to `new_admin`. `caller` loses it in the same call.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        access::transfer_admin(&env, &caller, &new_admin)
    }

    // ─────────────────────────────────────────────────────────
    // Reporting
    // ─────────────────────────────────────────────────────────

    /// Record an aid disbursement and return its id.
    ///
    /// Open to any caller. The category is derived from `aid_type`; the record
    /// starts unverified with an empty description and does not count towards
    /// any category total until verified.
    pub fn record_impact(
        env: Env,
        allocation_id: u64,
        recipient: Address,
        aid_type: u32,
        amount: u128,
    ) -> Result<u64, Error> {
        let id = storage::next_impact_id(&env)?;
        let category = AidCategory::from_aid_type(aid_type).as_string(&env);

        let record = ImpactRecord {
            id,
            allocation_id,
            recipient: recipient.clone(),
            aid_type,
            amount,
            impact_date: env.ledger().sequence(),
            category: category.clone(),
            description: String::from_str(&env, ""),
            verified: false,
        };
        storage::save_impact(&env, &record);

        events::emit_impact_recorded(&env, id, allocation_id, recipient, category, amount);
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────
    // Attestation
    // ─────────────────────────────────────────────────────────

    /// Attest to record `impact_id` with `description`.
    ///
    /// - `caller` must be the admin (`Unauthorized`).
    /// - The record must exist (`NotFound`).
    ///
    /// The first verification credits the record's amount to its category
    /// total. Verifying an already verified record only replaces the
    /// description.
    pub fn verify_impact(env: Env, caller: Address, impact_id: u64, description: String) -> Result<(), Error> {
        access::require_admin(&env, &caller)?;

        let mut record = storage::load_impact(&env, impact_id).ok_or(Error::NotFound)?;

        if !record.verified {
            storage::credit_category(&env, &record.category, record.amount)?;
        }
        record.description = description;
        record.verified = true;
        storage::save_impact(&env, &record);

        events::emit_impact_verified(&env, impact_id, caller, record.category, record.amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Return record `impact_id`, or `None` if it does not exist.
    pub fn get_impact_details(env: Env, impact_id: u64) -> Option<ImpactRecord> {
        storage::load_impact(&env, impact_id)
    }

    /// Sum of `amount` over verified records whose category equals `category`.
    ///
    /// Labels outside the taxonomy simply report zero.
    pub fn get_total_by_category(env: Env, category: String) -> CategoryTotal {
        let total = storage::category_total(&env, &category);
        CategoryTotal { category, total }
    }

    /// Number of records created so far; equal to the most recent id.
    pub fn impact_count(env: Env) -> u64 {
        storage::impact_count(&env)
    }
}
