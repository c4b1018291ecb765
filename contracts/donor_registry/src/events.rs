//! Donor registry events. Topic layout is `(symbol, donor)`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonorAdded {
    pub donor: Address,
    pub name: String,
    pub verification_date: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonorRemoved {
    pub donor: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationRecorded {
    pub donor: Address,
    pub amount: u128,
    pub donation_count: u64,
    pub total_donated: u128,
}

pub fn emit_donor_added(env: &Env, donor: Address, name: String, verification_date: u32) {
    env.events().publish(
        (symbol_short!("donor_add"), donor.clone()),
        DonorAdded {
            donor,
            name,
            verification_date,
        },
    );
}

pub fn emit_donor_removed(env: &Env, donor: Address) {
    env.events().publish(
        (symbol_short!("donor_del"), donor.clone()),
        DonorRemoved { donor },
    );
}

pub fn emit_donation_recorded(
    env: &Env,
    donor: Address,
    amount: u128,
    donation_count: u64,
    total_donated: u128,
) {
    env.events().publish(
        (symbol_short!("donation"), donor.clone()),
        DonationRecorded {
            donor,
            amount,
            donation_count,
            total_donated,
        },
    );
}
