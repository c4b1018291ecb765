//! Canonical event types emitted by the aid ledger contracts.
//!
//! These mirror the Soroban events published by `donor_registry`,
//! `recipient_registry`, `impact_ledger` and the shared `aid_common` access
//! layer.

use serde::{Deserialize, Serialize};

/// All recognised event kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Admin role moved to a new address (`adm_xfer` topic).
    AdminTransferred,
    /// A donor was verified (`donor_add` topic).
    DonorAdded,
    /// A donor was revoked (`donor_del` topic).
    DonorRemoved,
    /// A donation was recorded for a verified donor (`donation` topic).
    DonationRecorded,
    /// A recipient was verified (`recip_add` topic).
    RecipientAdded,
    /// A recipient was revoked (`recip_del` topic).
    RecipientRemoved,
    /// An aid delivery was counted for a recipient (`aid_recv` topic).
    AidReceived,
    /// An impact record was reported (`impact` topic).
    ImpactRecorded,
    /// The admin attested to an impact record (`imp_verif` topic).
    ImpactVerified,
    /// An event from a followed contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "adm_xfer" => Self::AdminTransferred,
            "donor_add" => Self::DonorAdded,
            "donor_del" => Self::DonorRemoved,
            "donation" => Self::DonationRecorded,
            "recip_add" => Self::RecipientAdded,
            "recip_del" => Self::RecipientRemoved,
            "aid_recv" => Self::AidReceived,
            "impact" => Self::ImpactRecorded,
            "imp_verif" => Self::ImpactVerified,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminTransferred => "admin_transferred",
            Self::DonorAdded => "donor_added",
            Self::DonorRemoved => "donor_removed",
            Self::DonationRecorded => "donation_recorded",
            Self::RecipientAdded => "recipient_added",
            Self::RecipientRemoved => "recipient_removed",
            Self::AidReceived => "aid_received",
            Self::ImpactRecorded => "impact_recorded",
            Self::ImpactVerified => "impact_verified",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded aid ledger event, ready to be stored in the database.
///
/// `subject` is the second topic: an address for registry and admin events,
/// an impact id for impact events. `contract_id` is `None` when the RPC did
/// not report the emitting contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AidEvent {
    pub event_id: Option<String>,
    pub event_type: String,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: Option<String>,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: Option<String>,
    pub event_type: String,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: Option<String>,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
