#![allow(dead_code)]

extern crate std;

use crate::DonorProfile;

/// A freshly added donor starts with zeroed statistics.
pub fn assert_fresh_profile(profile: &DonorProfile) {
    assert_eq!(
        profile.donation_count, 0,
        "fresh donor profile has donation_count {}",
        profile.donation_count
    );
    assert_eq!(
        profile.total_donated, 0,
        "fresh donor profile has total_donated {}",
        profile.total_donated
    );
}

/// After recording `amount`, the count grows by one and the total by `amount`.
pub fn assert_donation_applied(before: &DonorProfile, after: &DonorProfile, amount: u128) {
    assert_eq!(
        after.donation_count,
        before.donation_count + 1,
        "donation_count did not advance by one: {} -> {}",
        before.donation_count,
        after.donation_count
    );
    assert_eq!(
        after.total_donated,
        before.total_donated + amount,
        "total_donated broken: {} + {} != {}",
        before.total_donated,
        amount,
        after.total_donated
    );
}

/// Statistics are untouched by a rejected donation.
pub fn assert_profile_unchanged(before: &DonorProfile, after: &DonorProfile) {
    assert_eq!(before, after, "donor profile changed by a rejected call");
}

/// Name and verification date never change outside of `add_verified_donor`.
pub fn assert_identity_fields_stable(original: &DonorProfile, current: &DonorProfile) {
    assert_eq!(original.name, current.name, "donor name changed");
    assert_eq!(
        original.verification_date, current.verification_date,
        "donor verification_date changed"
    );
}
