use soroban_sdk::contracttype;

/// Allow-list status of an identity.
///
/// ```text
/// NeverAdded ──► Active ◄──► Revoked
/// ```
///
/// Only `Active` and `Revoked` are ever written to storage; an identity with no
/// stored entry reads as `NeverAdded`. Keeping the three states distinct stops
/// "never seen" from being confused with "explicitly revoked".
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Membership {
    /// The identity was never added by an admin.
    NeverAdded,
    /// The identity was removed; its profile is retained.
    Revoked,
    /// The identity is currently verified.
    Active,
}

impl Membership {
    pub fn is_active(&self) -> bool {
        matches!(self, Membership::Active)
    }
}
