//! # Donor Registry Contract
//!
//! Admin-curated allow-list of donor addresses with per-donor donation
//! statistics.
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Bootstrap    | [`DonorRegistry::init`]                               |
//! | Admin        | `transfer_admin`, `admin`, `is_admin`                 |
//! | Allow-list   | `add_verified_donor`, `remove_verified_donor`         |
//! | Activity     | [`DonorRegistry::record_donation`]                    |
//! | Queries      | `is_verified_donor`, `donor_membership`, `get_donor_details` |
//!
//! ## Architecture
//!
//! Authorization and the membership lifecycle are delegated to
//! [`aid_common`]. This file holds the donor-specific profile shape, the
//! donation counters and event emission.
//!
//! Donations are recorded, not transferred: no tokens move through this
//! contract.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use aid_common::{access, registry};

pub mod events;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use aid_common::{Error, Membership};
pub use types::DonorProfile;

#[contract]
pub struct DonorRegistry;

#[contractimpl]
impl DonorRegistry {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract and set the admin.
    ///
    /// Must be called exactly once after deployment; later calls fail with
    /// `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        access::init_admin(&env, &admin)
    }

    // ─────────────────────────────────────────────────────────
    // Admin
    // ─────────────────────────────────────────────────────────

    /// Return the current admin, or `None` before `init`.
    pub fn admin(env: Env) -> Option<Address> {
        access::admin(&env)
    }

    /// Return `true` if `address` is the current admin.
    pub fn is_admin(env: Env, address: Address) -> bool {
        access::is_admin(&env, &address)
    }

    /// Hand the admin role to `new_admin`. `caller` loses it in the same call.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        access::transfer_admin(&env, &caller, &new_admin)
    }

    // ─────────────────────────────────────────────────────────
    // Allow-list
    // ─────────────────────────────────────────────────────────

    /// Verify `donor` and write a fresh profile.
    ///
    /// Re-adding an existing donor overwrites the profile and resets its
    /// statistics to zero. `verification_date` is the current ledger sequence.
    pub fn add_verified_donor(env: Env, caller: Address, donor: Address, name: String) -> Result<(), Error> {
        let verification_date = env.ledger().sequence();
        let profile = DonorProfile {
            name: name.clone(),
            verification_date,
            donation_count: 0,
            total_donated: 0,
        };

        registry::add_verified(&env, &caller, &donor, &profile)?;

        events::emit_donor_added(&env, donor, name, verification_date);
        Ok(())
    }

    /// Revoke `donor`. The stored profile is kept.
    pub fn remove_verified_donor(env: Env, caller: Address, donor: Address) -> Result<(), Error> {
        registry::remove_verified(&env, &caller, &donor)?;

        events::emit_donor_removed(&env, donor);
        Ok(())
    }

    /// Return `true` if `donor` is currently verified.
    pub fn is_verified_donor(env: Env, donor: Address) -> bool {
        registry::is_verified(&env, &donor)
    }

    /// Return the allow-list status of `donor`.
    pub fn donor_membership(env: Env, donor: Address) -> Membership {
        registry::membership(&env, &donor)
    }

    // ─────────────────────────────────────────────────────────
    // Activity
    // ─────────────────────────────────────────────────────────

    /// Record a donation of `amount` by a verified donor.
    ///
    /// Fails with `NotVerified` for never-added or revoked donors, and with
    /// `Overflow` if either counter would leave its range. Counters are only
    /// written when both increments succeed.
    pub fn record_donation(env: Env, donor: Address, amount: u128) -> Result<(), Error> {
        let profile: DonorProfile = registry::update_verified_profile(&env, &donor, |p: &mut DonorProfile| {
            p.donation_count = p.donation_count.checked_add(1).ok_or(Error::Overflow)?;
            p.total_donated = p.total_donated.checked_add(amount).ok_or(Error::Overflow)?;
            Ok(())
        })?;

        events::emit_donation_recorded(
            &env,
            donor,
            amount,
            profile.donation_count,
            profile.total_donated,
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Return the profile of `donor`, or `None` if it was never added.
    pub fn get_donor_details(env: Env, donor: Address) -> Option<DonorProfile> {
        registry::load_profile(&env, &donor)
    }
}
