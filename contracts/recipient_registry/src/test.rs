extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{AidReceived, RecipientAdded};
use crate::{Error, Membership, RecipientRegistry, RecipientRegistryClient};

fn setup() -> (Env, RecipientRegistryClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(RecipientRegistry, ());
    let client = RecipientRegistryClient::new(&env, &contract_id);
    (env, client)
}

fn setup_with_init() -> (Env, RecipientRegistryClient<'static>, Address) {
    let (env, client) = setup();
    let admin = Address::generate(&env);
    client.init(&admin);
    (env, client, admin)
}

fn add_recipient(env: &Env, client: &RecipientRegistryClient, admin: &Address, recipient: &Address) {
    client.add_verified_recipient(
        admin,
        recipient,
        &String::from_str(env, "Test Recipient"),
        &String::from_str(env, "Test Location"),
        &String::from_str(env, "Food Security"),
    );
}

#[test]
fn test_unknown_recipient_is_not_verified() {
    let (env, client, _admin) = setup_with_init();
    let recipient = Address::generate(&env);

    assert!(!client.is_verified_recipient(&recipient));
    assert_eq!(client.recipient_membership(&recipient), Membership::NeverAdded);
    assert_eq!(client.get_recipient_details(&recipient), None);
}

#[test]
fn test_add_verified_recipient() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    env.ledger().set_sequence_number(123);

    add_recipient(&env, &client, &admin, &recipient);

    assert!(client.is_verified_recipient(&recipient));
    let details = client.get_recipient_details(&recipient).unwrap();
    assert_eq!(details.name, String::from_str(&env, "Test Recipient"));
    assert_eq!(details.location, String::from_str(&env, "Test Location"));
    assert_eq!(details.needs_category, String::from_str(&env, "Food Security"));
    assert_eq!(details.verification_date, 123);
    assert_eq!(details.aid_received_count, 0);
}

#[test]
fn test_add_verified_recipient_requires_admin() {
    let (env, client, _admin) = setup_with_init();
    let intruder = Address::generate(&env);
    let recipient = Address::generate(&env);

    let result = client.try_add_verified_recipient(
        &intruder,
        &recipient,
        &String::from_str(&env, "Test Recipient"),
        &String::from_str(&env, "Test Location"),
        &String::from_str(&env, "Food Security"),
    );

    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(client.get_recipient_details(&recipient), None);
}

#[test]
fn test_remove_verified_recipient_keeps_profile() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    add_recipient(&env, &client, &admin, &recipient);
    client.record_aid_received(&recipient);

    client.remove_verified_recipient(&admin, &recipient);

    assert!(!client.is_verified_recipient(&recipient));
    assert_eq!(client.recipient_membership(&recipient), Membership::Revoked);
    assert_eq!(
        client.get_recipient_details(&recipient).unwrap().aid_received_count,
        1
    );
}

#[test]
fn test_record_aid_received() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    add_recipient(&env, &client, &admin, &recipient);

    client.record_aid_received(&recipient);
    client.record_aid_received(&recipient);

    assert_eq!(
        client.get_recipient_details(&recipient).unwrap().aid_received_count,
        2
    );
}

#[test]
fn test_record_aid_for_unverified_recipient_fails() {
    let (env, client, admin) = setup_with_init();
    let stranger = Address::generate(&env);
    let revoked = Address::generate(&env);
    add_recipient(&env, &client, &admin, &revoked);
    client.record_aid_received(&revoked);
    client.remove_verified_recipient(&admin, &revoked);

    assert_eq!(
        client.try_record_aid_received(&stranger),
        Err(Ok(Error::NotVerified))
    );
    assert_eq!(
        client.try_record_aid_received(&revoked),
        Err(Ok(Error::NotVerified))
    );
    assert_eq!(
        client.get_recipient_details(&revoked).unwrap().aid_received_count,
        1
    );
}

#[test]
fn test_readding_recipient_resets_count() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    add_recipient(&env, &client, &admin, &recipient);
    client.record_aid_received(&recipient);

    add_recipient(&env, &client, &admin, &recipient);

    assert_eq!(
        client.get_recipient_details(&recipient).unwrap().aid_received_count,
        0
    );
}

#[test]
fn test_transfer_admin() {
    let (env, client, admin) = setup_with_init();
    let new_admin = Address::generate(&env);
    let recipient = Address::generate(&env);

    client.transfer_admin(&admin, &new_admin);

    assert_eq!(
        client.try_remove_verified_recipient(&admin, &recipient),
        Err(Ok(Error::Unauthorized))
    );
    add_recipient(&env, &client, &new_admin, &recipient);
    assert!(client.is_verified_recipient(&recipient));
}

#[test]
fn test_recipient_added_event() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    env.ledger().set_sequence_number(7);

    add_recipient(&env, &client, &admin, &recipient);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("recip_add").into_val(&env),
        recipient.into_val(&env),
    ];
    assert_eq!(last_event.0, client.address);
    assert_eq!(last_event.1, expected_topics);
    let event_data: RecipientAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RecipientAdded {
            recipient: recipient.clone(),
            name: String::from_str(&env, "Test Recipient"),
            needs_category: String::from_str(&env, "Food Security"),
            verification_date: 7,
        }
    );
}

#[test]
fn test_aid_received_event() {
    let (env, client, admin) = setup_with_init();
    let recipient = Address::generate(&env);
    add_recipient(&env, &client, &admin, &recipient);

    client.record_aid_received(&recipient);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("aid_recv").into_val(&env),
        recipient.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: AidReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        AidReceived {
            recipient: recipient.clone(),
            aid_received_count: 1,
        }
    );
}
