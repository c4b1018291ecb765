//! # Access Control
//!
//! Single-admin gate used by every aid ledger contract.
//!
//! | Key     | Tier     | Type      |
//! |---------|----------|-----------|
//! | `Admin` | Instance | `Address` |
//!
//! There is exactly one admin once [`init_admin`] has run. Ownership moves in a
//! single step via [`transfer_admin`]: the previous admin loses every privilege
//! in the same call, with no pending/accept handshake.

use soroban_sdk::{contracttype, Address, Env};

use crate::events;
use crate::storage::bump_instance;
use crate::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    Admin,
}

/// Set the first admin. Fails with `AlreadyInitialized` on any later call.
pub fn init_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    if env.storage().instance().has(&AccessKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&AccessKey::Admin, admin);
    bump_instance(env);
    Ok(())
}

/// The current admin, or `None` before initialisation.
pub fn admin(env: &Env) -> Option<Address> {
    let admin = env.storage().instance().get(&AccessKey::Admin);
    if admin.is_some() {
        bump_instance(env);
    }
    admin
}

/// Pure comparison against the stored admin.
pub fn is_admin(env: &Env, who: &Address) -> bool {
    admin(env).is_some_and(|current| current == *who)
}

/// Authenticate `caller` and require that it is the current admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if !is_admin(env, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Replace the admin with `new_admin`.
///
/// - `caller` must authorize and be the current admin.
/// - State is left untouched on failure.
pub fn transfer_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), Error> {
    require_admin(env, caller)?;
    env.storage().instance().set(&AccessKey::Admin, new_admin);
    bump_instance(env);
    events::emit_admin_transferred(env, caller.clone(), new_admin.clone());
    Ok(())
}
