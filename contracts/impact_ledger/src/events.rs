//! Impact ledger events. Topic layout is `(symbol, impact_id)`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImpactRecorded {
    pub impact_id: u64,
    pub allocation_id: u64,
    pub recipient: Address,
    pub category: String,
    pub amount: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImpactVerified {
    pub impact_id: u64,
    pub verifier: Address,
    pub category: String,
    pub amount: u128,
}

pub fn emit_impact_recorded(
    env: &Env,
    impact_id: u64,
    allocation_id: u64,
    recipient: Address,
    category: String,
    amount: u128,
) {
    env.events().publish(
        (symbol_short!("impact"), impact_id),
        ImpactRecorded {
            impact_id,
            allocation_id,
            recipient,
            category,
            amount,
        },
    );
}

pub fn emit_impact_verified(env: &Env, impact_id: u64, verifier: Address, category: String, amount: u128) {
    env.events().publish(
        (symbol_short!("imp_verif"), impact_id),
        ImpactVerified {
            impact_id,
            verifier,
            category,
            amount,
        },
    );
}
