//! Recipient registry events. Topic layout is `(symbol, recipient)`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientAdded {
    pub recipient: Address,
    pub name: String,
    pub needs_category: String,
    pub verification_date: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientRemoved {
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AidReceived {
    pub recipient: Address,
    pub aid_received_count: u64,
}

pub fn emit_recipient_added(
    env: &Env,
    recipient: Address,
    name: String,
    needs_category: String,
    verification_date: u32,
) {
    env.events().publish(
        (symbol_short!("recip_add"), recipient.clone()),
        RecipientAdded {
            recipient,
            name,
            needs_category,
            verification_date,
        },
    );
}

pub fn emit_recipient_removed(env: &Env, recipient: Address) {
    env.events().publish(
        (symbol_short!("recip_del"), recipient.clone()),
        RecipientRemoved { recipient },
    );
}

pub fn emit_aid_received(env: &Env, recipient: Address, aid_received_count: u64) {
    env.events().publish(
        (symbol_short!("aid_recv"), recipient.clone()),
        AidReceived {
            recipient,
            aid_received_count,
        },
    );
}
