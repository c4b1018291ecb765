//! # Aid Common
//!
//! Policy shared by the three aid-transparency contracts
//! (`donor_registry`, `recipient_registry`, `impact_ledger`).
//!
//! | Concern              | Module        |
//! |----------------------|---------------|
//! | Admin gate           | [`access`]    |
//! | Verified allow-lists | [`registry`]  |
//! | TTL management       | [`storage`]   |
//! | Shared events        | [`events`]    |
//!
//! This crate declares no contract of its own. Each contract links it and
//! re-exposes the operations it needs as entry points, so the admin check and
//! the membership lifecycle are implemented once and behave identically in
//! every registry.

#![no_std]

use soroban_sdk::contracterror;

pub mod access;
pub mod events;
pub mod registry;
pub mod storage;
mod types;


pub use types::Membership;

/// Error codes returned by every aid ledger contract.
///
/// Codes are part of the public ABI; never renumber an existing variant.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the current admin on an admin-gated call.
    Unauthorized = 1,
    /// Activity recorded against an identity that is not currently verified.
    NotVerified = 2,
    /// Referenced record does not exist.
    NotFound = 3,
    /// `init` was called on an already initialised contract.
    AlreadyInitialized = 4,
    /// A counter or running total would exceed its integer range.
    Overflow = 5,
}
