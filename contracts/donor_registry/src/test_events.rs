extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use aid_common::events::AdminTransferred;

use crate::events::{DonationRecorded, DonorAdded, DonorRemoved};
use crate::{DonorRegistry, DonorRegistryClient};

fn setup_with_init() -> (Env, DonorRegistryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(DonorRegistry, ());
    let client = DonorRegistryClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.init(&admin);
    (env, client, admin)
}

#[test]
fn test_donor_added_event() {
    let (env, client, admin) = setup_with_init();
    let donor = Address::generate(&env);
    let name = String::from_str(&env, "Test Donor");
    env.ledger().set_sequence_number(42);

    client.add_verified_donor(&admin, &donor, &name);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("donor_add"), donor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donor_add").into_val(&env),
        donor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonorAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonorAdded {
            donor: donor.clone(),
            name,
            verification_date: 42,
        }
    );
}

#[test]
fn test_donor_removed_event() {
    let (env, client, admin) = setup_with_init();
    let donor = Address::generate(&env);
    client.add_verified_donor(&admin, &donor, &String::from_str(&env, "Test Donor"));

    client.remove_verified_donor(&admin, &donor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("donor_del").into_val(&env),
        donor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: DonorRemoved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, DonorRemoved { donor });
}

#[test]
fn test_donation_recorded_event() {
    let (env, client, admin) = setup_with_init();
    let donor = Address::generate(&env);
    client.add_verified_donor(&admin, &donor, &String::from_str(&env, "Test Donor"));
    client.record_donation(&donor, &100);

    client.record_donation(&donor, &250);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("donation").into_val(&env),
        donor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: DonationRecorded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationRecorded {
            donor: donor.clone(),
            amount: 250,
            donation_count: 2,
            total_donated: 350,
        }
    );
}

#[test]
fn test_admin_transferred_event() {
    let (env, client, admin) = setup_with_init();
    let new_admin = Address::generate(&env);

    client.transfer_admin(&admin, &new_admin);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("adm_xfer").into_val(&env),
        admin.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: AdminTransferred = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        AdminTransferred {
            previous: admin.clone(),
            new_admin,
        }
    );
}

#[test]
fn test_rejected_donation_emits_nothing() {
    let (env, client, _admin) = setup_with_init();
    let donor = Address::generate(&env);
    let before = env.events().all().len();

    let _ = client.try_record_donation(&donor, &100);

    assert_eq!(env.events().all().len(), before);
}
