//! # Recipient Registry Contract
//!
//! Admin-curated allow-list of aid recipients. Each recipient carries a
//! location, a needs category and a running count of aid deliveries.
//!
//! | Phase        | Entry Point(s)                                              |
//! |--------------|-------------------------------------------------------------|
//! | Bootstrap    | [`RecipientRegistry::init`]                                 |
//! | Admin        | `transfer_admin`, `admin`, `is_admin`                       |
//! | Allow-list   | `add_verified_recipient`, `remove_verified_recipient`       |
//! | Activity     | [`RecipientRegistry::record_aid_received`]                  |
//! | Queries      | `is_verified_recipient`, `recipient_membership`, `get_recipient_details` |
//!
//! The admin gate and membership lifecycle come from [`aid_common`], shared
//! with the donor registry.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use aid_common::{access, registry};

pub mod events;
mod types;

#[cfg(test)]
mod test;

pub use aid_common::{Error, Membership};
pub use types::RecipientProfile;

#[contract]
pub struct RecipientRegistry;

#[contractimpl]
impl RecipientRegistry {
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
    // Allow-list
    // ─────────────────────────────────────────────────────────

    /// Verify `recipient` and write a fresh profile with a zero aid count.
    ///
    /// Re-adding overwrites any earlier profile.
    pub fn add_verified_recipient(
        env: Env,
        caller: Address,
        recipient: Address,
        name: String,
        location: String,
        needs_category: String,
    ) -> Result<(), Error> {
        let verification_date = env.ledger().sequence();
        let profile = RecipientProfile {
            name: name.clone(),
            location,
            verification_date,
            needs_category: needs_category.clone(),
            aid_received_count: 0,
        };

        registry::add_verified(&env, &caller, &recipient, &profile)?;

        events::emit_recipient_added(&env, recipient, name, needs_category, verification_date);
        Ok(())
    }

    /// Revoke `recipient`. The stored profile is kept.
    pub fn remove_verified_recipient(env: Env, caller: Address, recipient: Address) -> Result<(), Error> {
        registry::remove_verified(&env, &caller, &recipient)?;

        events::emit_recipient_removed(&env, recipient);
        Ok(())
    }

    pub fn is_verified_recipient(env: Env, recipient: Address) -> bool {
        registry::is_verified(&env, &recipient)
    }

    pub fn recipient_membership(env: Env, recipient: Address) -> Membership {
        registry::membership(&env, &recipient)
    }

    // ─────────────────────────────────────────────────────────
    // Activity
    // ─────────────────────────────────────────────────────────

    /// Count one aid delivery to a verified recipient.
    pub fn record_aid_received(env: Env, recipient: Address) -> Result<(), Error> {
        let profile: RecipientProfile =
            registry::update_verified_profile(&env, &recipient, |p: &mut RecipientProfile| {
                p.aid_received_count = p.aid_received_count.checked_add(1).ok_or(Error::Overflow)?;
                Ok(())
            })?;

        events::emit_aid_received(&env, recipient, profile.aid_received_count);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Return the profile of `recipient`, or `None` if it was never added.
    pub fn get_recipient_details(env: Env, recipient: Address) -> Option<RecipientProfile> {
        registry::load_profile(&env, &recipient)
    }
}
