extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::invariants::{assert_total_matches_scan, collect_records};
use crate::{ImpactLedger, ImpactLedgerClient};

fn setup_with_init() -> (Env, ImpactLedgerClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ImpactLedger, ());
    let client = ImpactLedgerClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.init(&admin);
    (env, client, admin)
}

fn label(env: &Env, s: &str) -> String {
    String::from_str(env, s)
}

#[test]
fn test_total_is_zero_for_empty_category() {
    let (env, client, _admin) = setup_with_init();

    let result = client.get_total_by_category(&label(&env, "Food Security"));

    assert_eq!(result.category, label(&env, "Food Security"));
    assert_eq!(result.total, 0);
}

#[test]
fn test_total_counts_only_verified_records() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);

    client.record_impact(&1, &recipient, &1, &100); // Food
    client.record_impact(&2, &recipient, &1, &200); // Food
    client.record_impact(&3, &recipient, &2, &300); // Healthcare

    client.verify_impact(&admin, &1, &label(&env, "Impact 1"));
    client.verify_impact(&admin, &3, &label(&env, "Impact 3"));

    let food = client.get_total_by_category(&label(&env, "Food Security"));
    assert_eq!(food.total, 100);
    let health = client.get_total_by_category(&label(&env, "Healthcare"));
    assert_eq!(health.total, 300);
    assert_eq!(client.get_total_by_category(&label(&env, "Shelter")).total, 0);
}

#[test]
fn test_unverified_record_leaves_total_unchanged_until_verified() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    let food = label(&env, "Food Security");

    client.record_impact(&1, &recipient, &1, &100);
    client.verify_impact(&admin, &1, &label(&env, "desc"));
    assert_eq!(client.get_total_by_category(&food).total, 100);

    let second = client.record_impact(&2, &recipient, &1, &200);
    assert_eq!(client.get_total_by_category(&food).total, 100);

    client.verify_impact(&admin, &second, &label(&env, "desc"));
    assert_eq!(client.get_total_by_category(&food).total, 300);
}

#[test]
fn test_reverification_does_not_double_count() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    let shelter = label(&env, "Shelter");

    client.record_impact(&1, &recipient, &3, &500);
    client.verify_impact(&admin, &1, &label(&env, "first"));
    client.verify_impact(&admin, &1, &label(&env, "second"));
    client.verify_impact(&admin, &1, &label(&env, "third"));

    assert_eq!(client.get_total_by_category(&shelter).total, 500);
}

#[test]
fn test_rejected_verification_does_not_credit() {
    let (env, client, _admin) = setup_with_init();
    let recipient = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.record_impact(&1, &recipient, &5, &900);
    let _ = client.try_verify_impact(&intruder, &1, &label(&env, "forged"));

    assert_eq!(
        client.get_total_by_category(&label(&env, "Financial Support")).total,
        0
    );
}

#[test]
fn test_unknown_label_reports_zero() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    client.record_impact(&1, &recipient, &1, &100);
    client.verify_impact(&admin, &1, &label(&env, "desc"));

    let result = client.get_total_by_category(&label(&env, "food security"));

    assert_eq!(result.total, 0);
}

#[test]
fn test_running_totals_match_full_scan() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);

    // Mixed categories, every third record left unverified.
    let plan: [(u32, u128); 9] = [
        (1, 10),
        (2, 20),
        (3, 30),
        (1, 40),
        (5, 50),
        (9, 60),
        (4, 70),
        (1, 80),
        (0, 90),
    ];
    for (i, (aid_type, amount)) in plan.iter().enumerate() {
        let id = client.record_impact(&(i as u64), &recipient, aid_type, amount);
        if id % 3 != 0 {
            client.verify_impact(&admin, &id, &label(&env, "attested"));
        }
    }

    let records = collect_records(client.impact_count(), |id| {
        client.get_impact_details(&id).unwrap()
    });
    for name in [
        "Food Security",
        "Healthcare",
        "Shelter",
        "Education",
        "Financial Support",
        "Other",
    ] {
        let category = label(&env, name);
        let total = client.get_total_by_category(&category).total;
        assert_total_matches_scan(&records, &category, total);
    }
}
