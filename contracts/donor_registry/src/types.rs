use soroban_sdk::{contracttype, String};

/// Profile and donation statistics of a donor.
///
/// Written by `add_verified_donor` with zeroed statistics and retained after
/// revocation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonorProfile {
    /// Display name supplied by the admin.
    pub name: String,
    /// Ledger sequence at which the donor was (last) added.
    pub verification_date: u32,
    /// Number of donations recorded since the last add.
    pub donation_count: u64,
    /// Sum of recorded donation amounts since the last add.
    pub total_donated: u128,
}
