use soroban_sdk::{contracttype, String};

/// Profile and aid statistics of a recipient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientProfile {
    pub name: String,
    pub location: String,
    /// Ledger sequence at which the recipient was (last) added.
    pub verification_date: u32,
    /// Free-form needs label supplied by the admin, e.g. "Food Security".
    pub needs_category: String,
    /// Number of aid deliveries recorded since the last add.
    pub aid_received_count: u64,
}
