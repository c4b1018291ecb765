//! # Verified-entity registry
//!
//! Admin-gated allow-list plus a per-identity profile, generic over the profile
//! type so the donor and recipient registries share one lifecycle.
//!
//! | Key                 | Tier       | Type         |
//! |---------------------|------------|--------------|
//! | `Member(Address)`   | Persistent | `Membership` |
//! | `Profile(Address)`  | Persistent | profile `P`  |
//!
//! Revocation flips the membership entry to `Revoked` and leaves the profile
//! untouched, so statistics stay queryable after removal. Re-adding overwrites
//! the profile, which resets its statistics.

use core::fmt::Debug;

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

use crate::access::require_admin;
use crate::storage::bump_persistent;
use crate::{Error, Membership};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryKey {
    /// Allow-list status keyed by identity.
    Member(Address),
    /// Profile and statistics keyed by identity.
    Profile(Address),
}

/// Mark `identity` verified and (re)write its profile.
///
/// `caller` must be the admin. Both entries are written in the same call; the
/// membership flag is never set without its profile.
pub fn add_verified<P>(env: &Env, caller: &Address, identity: &Address, profile: &P) -> Result<(), Error>
where
    P: IntoVal<Env, Val>,
{
    require_admin(env, caller)?;

    let member_key = RegistryKey::Member(identity.clone());
    let profile_key = RegistryKey::Profile(identity.clone());

    env.storage().persistent().set(&member_key, &Membership::Active);
    env.storage().persistent().set(&profile_key, profile);
    bump_persistent(env, &member_key);
    bump_persistent(env, &profile_key);
    Ok(())
}

/// Revoke `identity`. The profile, if any, is retained unchanged.
pub fn remove_verified(env: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
    require_admin(env, caller)?;

    let member_key = RegistryKey::Member(identity.clone());
    env.storage().persistent().set(&member_key, &Membership::Revoked);
    bump_persistent(env, &member_key);
    Ok(())
}

/// Current allow-list status; `NeverAdded` when no entry exists.
pub fn membership(env: &Env, identity: &Address) -> Membership {
    let key = RegistryKey::Member(identity.clone());
    match env.storage().persistent().get::<_, Membership>(&key) {
        Some(status) => {
            bump_persistent(env, &key);
            status
        }
        None => Membership::NeverAdded,
    }
}

/// `true` only for `Active`; never-added and revoked both read as `false`.
pub fn is_verified(env: &Env, identity: &Address) -> bool {
    membership(env, identity).is_active()
}

/// Load the stored profile, or `None` if the identity was never added.
pub fn load_profile<P>(env: &Env, identity: &Address) -> Option<P>
where
    P: TryFromVal<Env, Val>,
    P::Error: Debug,
{
    let key = RegistryKey::Profile(identity.clone());
    let profile = env.storage().persistent().get(&key);
    if profile.is_some() {
        bump_persistent(env, &key);
    }
    profile
}

/// Apply `update` to the profile of a verified identity and persist it.
///
/// Fails with `NotVerified` unless the identity is `Active`. If `update`
/// returns an error nothing is written.
pub fn update_verified_profile<P, F>(env: &Env, identity: &Address, update: F) -> Result<P, Error>
where
    P: TryFromVal<Env, Val> + IntoVal<Env, Val>,
    P::Error: Debug,
    F: FnOnce(&mut P) -> Result<(), Error>,
{
    if !is_verified(env, identity) {
        return Err(Error::NotVerified);
    }

    let mut profile: P = load_profile(env, identity).ok_or(Error::NotFound)?;
    update(&mut profile)?;

    let key = RegistryKey::Profile(identity.clone());
    env.storage().persistent().set(&key, &profile);
    bump_persistent(env, &key);
    Ok(profile)
}
