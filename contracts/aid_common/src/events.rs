//! Events published by the shared access-control layer.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Payload of the `adm_xfer` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    pub previous: Address,
    pub new_admin: Address,
}

/// Topic: `(adm_xfer, previous)`.
pub fn emit_admin_transferred(env: &Env, previous: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("adm_xfer"), previous.clone()),
        AdminTransferred {
            previous,
            new_admin,
        },
    );
}
