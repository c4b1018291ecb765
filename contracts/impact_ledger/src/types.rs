//! # Types
//!
//! ## Category taxonomy
//!
//! Every impact record is classified by its aid-type code into a fixed label:
//!
//! | Code  | Category            |
//! |-------|---------------------|
//! | 1     | Food Security       |
//! | 2     | Healthcare          |
//! | 3     | Shelter             |
//! | 4     | Education           |
//! | 5     | Financial Support   |
//! | other | Other               |
//!
//! The mapping is total: unknown codes are accepted and land in `Other`.
//!
//! ## Record lifecycle
//!
//! ```text
//! recorded (verified = false) ──verify_impact──► verified (verified = true)
//! ```
//!
//! Only `description` and `verified` change after creation. Verifying again
//! replaces the description and leaves everything else as is.

use soroban_sdk::{contracttype, Address, Env, String};

/// Category derived from an aid-type code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AidCategory {
    FoodSecurity,
    Healthcare,
    Shelter,
    Education,
    FinancialSupport,
    Other,
}

impl AidCategory {
    pub fn from_aid_type(aid_type: u32) -> Self {
        match aid_type {
            1 => Self::FoodSecurity,
            2 => Self::Healthcare,
            3 => Self::Shelter,
            4 => Self::Education,
            5 => Self::FinancialSupport,
            _ => Self::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodSecurity => "Food Security",
            Self::Healthcare => "Healthcare",
            Self::Shelter => "Shelter",
            Self::Education => "Education",
            Self::FinancialSupport => "Financial Support",
            Self::Other => "Other",
        }
    }

    pub fn as_string(&self, env: &Env) -> String {
        String::from_str(env, self.label())
    }
}

/// One aid disbursement event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImpactRecord {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Off-chain allocation this disbursement belongs to.
    pub allocation_id: u64,
    pub recipient: Address,
    /// Raw aid-type code as reported.
    pub aid_type: u32,
    pub amount: u128,
    /// Ledger sequence at which the record was created.
    pub impact_date: u32,
    /// Label derived from `aid_type`.
    pub category: String,
    /// Attestation text supplied by the admin; empty until verified.
    pub description: String,
    pub verified: bool,
}

/// Result of a per-category total query.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of `amount` over verified records in `category`.
    pub total: u128,
}
