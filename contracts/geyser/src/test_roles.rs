#![allow(clippy::unwrap_used, clippy::expect_used)]

extern crate std;

use common::events::{RoleGrantedEvent, RoleRevokedEvent};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _},
    Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::{GeyserApp, GeyserAppClient, GeyserError, Role};

fn setup() -> (Env, GeyserAppClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let client = GeyserAppClient::new(&env, &env.register(GeyserApp, ()));
    let admin = Address::generate(&env);
    client.initialize(&token, &token, &admin);

    (env, client, admin)
}

/// Recorded events published under `(topic, account)`.
fn role_events(env: &Env, topic: soroban_sdk::Symbol, account: &Address) -> std::vec::Vec<Val> {
    let wanted: Vec<Val> = (topic, account.clone()).into_val(env);
    let events: Vec<(Address, Vec<Val>, Val)> = all_events(&env);
    events
        .iter()
        .filter(|(_, topics, _)| *topics == wanted)
        .map(|(_, _, data)| data)
        .collect()
}

// ── Admin ─────────────────────────────────────────────────────────────────────

#[test]
fn test_initializer_is_admin_but_not_minter() {
    let (_env, client, admin) = setup();

    assert!(client.has_admin_role(&admin));
    assert!(!client.has_minter_role(&admin));
}

#[test]
fn test_set_admin_transfers_role() {
    let (env, client, admin) = setup();
    let next = Address::generate(&env);

    client.set_admin(&admin, &next);

    let revoked = role_events(&env, symbol_short!("ROLE_RVKD"), &admin);
    assert_eq!(revoked.len(), 1);
    let payload: RoleRevokedEvent = revoked[0].try_into_val(&env).unwrap();
    assert_eq!(payload.role, Role::Admin);

    let granted = role_events(&env, symbol_short!("ROLE_GRNT"), &next);
    assert_eq!(granted.len(), 1);
    let payload: RoleGrantedEvent = granted[0].try_into_val(&env).unwrap();
    assert_eq!(payload.role, Role::Admin);
    assert_eq!(payload.sender, admin);

    assert!(client.has_admin_role(&next));
    assert!(!client.has_admin_role(&admin));

    // the previous admin has lost every admin capability
    let minter = Address::generate(&env);
    assert_eq!(
        client.try_set_minter(&admin, &minter),
        Err(Ok(GeyserError::Unauthorized))
    );
    client.set_minter(&next, &minter);
    assert!(client.has_minter_role(&minter));
}

#[test]
fn test_non_admin_cannot_set_admin() {
    let (env, client, admin) = setup();
    let outsider = Address::generate(&env);

    assert_eq!(
        client.try_set_admin(&outsider, &outsider),
        Err(Ok(GeyserError::Unauthorized))
    );
    assert!(client.has_admin_role(&admin));
}

#[test]
fn test_renounce_admin_locks_out_admin_operations() {
    let (env, client, admin) = setup();

    client.renounce_admin(&admin);
    assert!(!client.has_admin_role(&admin));

    let someone = Address::generate(&env);
    assert_eq!(
        client.try_set_admin(&admin, &someone),
        Err(Ok(GeyserError::Unauthorized))
    );
    assert_eq!(
        client.try_set_minter(&admin, &someone),
        Err(Ok(GeyserError::Unauthorized))
    );
    assert_eq!(
        client.try_set_bonus_config(&admin, &10, &10),
        Err(Ok(GeyserError::Unauthorized))
    );
    assert_eq!(
        client.try_renounce_admin(&admin),
        Err(Ok(GeyserError::Unauthorized))
    );
}

// ── Minters ───────────────────────────────────────────────────────────────────

#[test]
fn test_set_minter_grants_role_once() {
    let (env, client, admin) = setup();
    let minter = Address::generate(&env);

    client.set_minter(&admin, &minter);
    assert_eq!(role_events(&env, symbol_short!("ROLE_GRNT"), &minter).len(), 1);
    assert!(client.has_minter_role(&minter));

    // repeated grant is a no-op
    client.add_minter_role(&admin, &minter);
    assert!(role_events(&env, symbol_short!("ROLE_GRNT"), &minter).len() <= 1);
    assert!(client.has_minter_role(&minter));

    client.remove_minter_role(&admin, &minter);
    assert!(!client.has_minter_role(&minter));
}

#[test]
fn test_minters_are_not_exclusive() {
    let (env, client, admin) = setup();
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    client.set_minter(&admin, &a);
    client.set_minter(&admin, &b);

    assert!(client.has_minter_role(&a));
    assert!(client.has_minter_role(&b));
}

#[test]
fn test_non_admin_cannot_grant_minter() {
    let (env, client, _admin) = setup();
    let outsider = Address::generate(&env);

    assert_eq!(
        client.try_set_minter(&outsider, &outsider),
        Err(Ok(GeyserError::Unauthorized))
    );
    assert!(!client.has_minter_role(&outsider));
}

#[test]
fn test_remove_minter_role() {
    let (env, client, admin) = setup();
    let minter = Address::generate(&env);
    client.set_minter(&admin, &minter);

    client.remove_minter_role(&admin, &minter);

    let revoked = role_events(&env, symbol_short!("ROLE_RVKD"), &minter);
    assert_eq!(revoked.len(), 1);
    let payload: RoleRevokedEvent = revoked[0].try_into_val(&env).unwrap();
    assert_eq!(payload.role, Role::Minter);
    assert_eq!(payload.sender, admin);

    assert!(!client.has_minter_role(&minter));
    assert_eq!(
        client.try_lock_reward_tokens(&minter, &100, &60),
        Err(Ok(GeyserError::Unauthorized))
    );
}

#[test]
fn test_renounce_minter() {
    let (env, client, admin) = setup();
    let minter = Address::generate(&env);
    client.set_minter(&admin, &minter);

    client.renounce_minter(&minter);
    assert!(!client.has_minter_role(&minter));

    assert_eq!(
        client.try_renounce_minter(&minter),
        Err(Ok(GeyserError::Unauthorized))
    );
}

#[test]
fn test_admin_can_grant_itself_minter() {
    let (_env, client, admin) = setup();

    client.set_minter(&admin, &admin);

    assert!(client.has_admin_role(&admin));
    assert!(client.has_minter_role(&admin));
}

#[test]
#[should_panic]
fn test_set_minter_requires_auth() {
    let env = Env::default();
    let token = Address::generate(&env);
    let client = GeyserAppClient::new(&env, &env.register(GeyserApp, ()));
    let admin = Address::generate(&env);

    env.mock_all_auths();
    client.initialize(&token, &token, &admin);

    // drop mocked auths
    env.set_auths(&[]);
    client.set_minter(&admin, &Address::generate(&env));
}

/// `env.events().all()` as `(contract, topics, data)` tuples.
fn all_events(env: &Env) -> Vec<(Address, Vec<Val>, Val)> {
    use soroban_sdk::testutils::Events as _;
    use soroban_sdk::xdr::{ContractEventBody, ScAddress, ScVal};
    use soroban_sdk::TryFromVal;
    let mut out = Vec::new(env);
    for event in env.events().all().events() {
        let ContractEventBody::V0(body) = &event.body;
        let contract_id = event.contract_id.clone().expect("contract event");
        let contract =
            Address::try_from_val(env, &ScVal::Address(ScAddress::Contract(contract_id))).unwrap();
        let mut topics = Vec::new(env);
        for topic in body.topics.iter() {
            topics.push_back(Val::try_from_val(env, topic).unwrap());
        }
        let data = Val::try_from_val(env, &body.data).unwrap();
        out.push_back((contract, topics, data));
    }
    out
}
